use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use train_routes::loader::{CsvSource, EdgeReader, LoaderConfig, LoaderError};
use train_routes::router::Router;
use train_routes::ui::{CommandLineUi, UiConfig, source_unavailable_message};
use train_routes::web::{AppState, serve};

#[derive(Parser, Debug)]
#[command(author, version, about = "THE Train Routes App")]
struct Cli {
    /// The path to CSV file.
    #[arg(long, default_value = "routes.csv")]
    file: PathBuf,

    /// Field delimiter of the CSV file.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Skip the first row of the CSV file.
    #[arg(long)]
    has_headers: bool,

    /// Print every station on the route.
    #[arg(long)]
    show_path: bool,

    /// Keep asking for routes until input ends.
    #[arg(long)]
    repeat: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve route queries over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let delimiter = u8::try_from(cli.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter {:?} must be a single ASCII character", cli.delimiter))?;
    let config = LoaderConfig::new(delimiter, cli.has_headers);

    let router = match load(&cli.file, config) {
        Ok(router) => router,
        Err(e) => match e.missing_path() {
            Some(path) => {
                println!("{}", source_unavailable_message(path));
                return Ok(ExitCode::FAILURE);
            }
            None => return Err(e).context("failed to load routes"),
        },
    };

    match cli.command {
        None => {
            let config = UiConfig {
                show_path: cli.show_path,
                repeat: cli.repeat,
            };
            handle_ask(&router, config)?;
        }
        Some(Command::Serve { addr }) => handle_serve(router, addr)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn load(file: &Path, config: LoaderConfig) -> Result<Router, LoaderError> {
    EdgeReader::new(CsvSource::with_config(file, config)).build_router()
}

fn handle_ask(router: &Router, config: UiConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    CommandLineUi::with_config(router, stdin, stdout, config)
        .run()
        .context("failed to run interactive session")?;
    Ok(())
}

fn handle_serve(router: Router, addr: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(serve(AppState::new(router), addr))
        .with_context(|| format!("failed to serve on {}", addr))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
