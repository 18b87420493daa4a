//! Interactive command-line front end.
//!
//! Asks for a boarding and an alighting station, re-prompting until each
//! names a known station, then prints the fastest route between them.

mod config;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::Station;
use crate::router::{RouteEntry, Router};

pub use config::UiConfig;

/// Prompt for the boarding station.
pub const BOARD_PROMPT: &str = "What station are you getting on the train?:";

/// Prompt for the alighting station.
pub const ALIGHT_PROMPT: &str = "What station are you getting off the train?:";

/// Shown when the entered station is unknown.
pub const INVALID_POINT: &str = "That's not a valid point.";

/// Trait for answering route queries.
///
/// This abstraction allows the front end to be tested with mock data.
pub trait RouteQuery {
    /// Check if `point` names a known station.
    fn is_valid_point(&self, point: &str) -> bool;

    /// Fastest route between two stations, if any.
    fn get_route(&self, from: &str, to: &str) -> Option<RouteEntry>;

    /// Every station on the fastest route, if it can be reconstructed.
    fn path(&self, _from: &str, _to: &str) -> Option<Vec<Station>> {
        None
    }
}

impl RouteQuery for Router {
    fn is_valid_point(&self, point: &str) -> bool {
        Router::is_valid_point(self, point)
    }

    fn get_route(&self, from: &str, to: &str) -> Option<RouteEntry> {
        Router::get_route(self, from, to)
    }

    fn path(&self, from: &str, to: &str) -> Option<Vec<Station>> {
        Router::path(self, from, to)
    }
}

/// Render the answer to a route query.
///
/// Stops are intermediate stations, one fewer than the edges travelled.
///
/// ```
/// use train_routes::router::RouteEntry;
/// use train_routes::ui::render_route;
///
/// let route = RouteEntry { time: 5, length: 2, via: None };
/// assert_eq!(
///     render_route("A", "D", Some(&route)),
///     "Your trip from A to D includes 1 stops and will take 5 minutes."
/// );
/// assert_eq!(render_route("A", "X", None), "No routes from A to X");
/// ```
pub fn render_route(from: &str, to: &str, route: Option<&RouteEntry>) -> String {
    match route {
        Some(route) => format!(
            "Your trip from {} to {} includes {} stops and will take {} minutes.",
            from,
            to,
            route.stops(),
            route.time
        ),
        None => format!("No routes from {} to {}", from, to),
    }
}

/// Render a station sequence as `A -> B -> C`.
pub fn render_path(path: &[Station]) -> String {
    let names: Vec<&str> = path.iter().map(Station::as_str).collect();
    format!("Route: {}", names.join(" -> "))
}

/// Message shown when the edge file cannot be opened.
pub fn source_unavailable_message(path: &Path) -> String {
    format!("File {} not found.", path.display())
}

/// Interactive session over any line-based input and output.
pub struct CommandLineUi<'a, Q, R, W> {
    router: &'a Q,
    input: R,
    output: W,
    config: UiConfig,
}

impl<'a, Q, R, W> CommandLineUi<'a, Q, R, W>
where
    Q: RouteQuery,
    R: BufRead,
    W: Write,
{
    /// Create a session with the default configuration.
    pub fn new(router: &'a Q, input: R, output: W) -> Self {
        Self::with_config(router, input, output, UiConfig::default())
    }

    /// Create a session with a custom configuration.
    pub fn with_config(router: &'a Q, input: R, output: W, config: UiConfig) -> Self {
        Self {
            router,
            input,
            output,
            config,
        }
    }

    /// Run the session.
    ///
    /// Asks once, or until input ends when `repeat` is set. Returns the
    /// number of routes displayed.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut answered = 0;

        while self.ask()? {
            answered += 1;
            if !self.config.repeat {
                break;
            }
        }

        Ok(answered)
    }

    /// Ask for two stations and display the route between them.
    ///
    /// Returns false if input ended before both stations were given.
    pub fn ask(&mut self) -> io::Result<bool> {
        let Some((from, to)) = self.get_points()? else {
            return Ok(false);
        };

        self.display_route(&from, &to)?;
        Ok(true)
    }

    /// Ask for the boarding and alighting stations.
    ///
    /// Each prompt repeats until a known station is entered. Returns `None`
    /// if input ends first.
    pub fn get_points(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(from) = self.prompt_point(BOARD_PROMPT)? else {
            return Ok(None);
        };
        let Some(to) = self.prompt_point(ALIGHT_PROMPT)? else {
            return Ok(None);
        };

        Ok(Some((from, to)))
    }

    /// Display the fastest route between two stations.
    pub fn display_route(&mut self, from: &str, to: &str) -> io::Result<()> {
        let route = self.router.get_route(from, to);
        writeln!(self.output, "{}", render_route(from, to, route.as_ref()))?;

        if self.config.show_path && route.is_some() {
            if let Some(path) = self.router.path(from, to) {
                writeln!(self.output, "{}", render_path(&path))?;
            }
        }

        Ok(())
    }

    fn prompt_point(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let point = line.trim();
            if self.router.is_valid_point(point) {
                return Ok(Some(point.to_string()));
            }

            writeln!(self.output, "{}", INVALID_POINT)?;
        }
    }

    /// Consume the session, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::Edge;

    /// Mock router answering from scripted responses.
    struct MockRouter {
        validity: Mutex<VecDeque<bool>>,
        route: Option<RouteEntry>,
        checked: Mutex<Vec<String>>,
        queried: Mutex<Vec<(String, String)>>,
    }

    impl MockRouter {
        fn new(validity: &[bool], route: Option<RouteEntry>) -> Self {
            Self {
                validity: Mutex::new(validity.iter().copied().collect()),
                route,
                checked: Mutex::new(Vec::new()),
                queried: Mutex::new(Vec::new()),
            }
        }

        fn check_count(&self) -> usize {
            self.checked.lock().unwrap().len()
        }

        fn queries(&self) -> Vec<(String, String)> {
            self.queried.lock().unwrap().clone()
        }
    }

    impl RouteQuery for MockRouter {
        fn is_valid_point(&self, point: &str) -> bool {
            self.checked.lock().unwrap().push(point.to_string());
            self.validity.lock().unwrap().pop_front().unwrap_or(false)
        }

        fn get_route(&self, from: &str, to: &str) -> Option<RouteEntry> {
            self.queried
                .lock()
                .unwrap()
                .push((from.to_string(), to.to_string()));
            self.route.clone()
        }
    }

    fn input(lines: &[&str]) -> Cursor<Vec<u8>> {
        let mut text = lines.join("\n");
        text.push('\n');
        Cursor::new(text.into_bytes())
    }

    fn output_text(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn incorrect_points_are_reprompted() {
        let router = MockRouter::new(&[false, false, true, false, false, false, true, true], None);
        let lines = ["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"];
        let mut ui = CommandLineUi::new(&router, input(&lines), Vec::new());

        assert!(ui.ask().unwrap());

        assert_eq!(router.check_count(), 7);
        assert_eq!(router.queries(), vec![("p3".to_string(), "p7".to_string())]);

        let text = output_text(ui.into_output());
        assert_eq!(text.matches(INVALID_POINT).count(), 5);
        assert_eq!(text.matches(BOARD_PROMPT).count(), 3);
        assert_eq!(text.matches(ALIGHT_PROMPT).count(), 4);
    }

    #[test]
    fn input_is_trimmed() {
        let router = MockRouter::new(&[true, true], None);
        let mut ui = CommandLineUi::new(&router, input(&["  A ", "\tB"]), Vec::new());

        ui.ask().unwrap();

        assert_eq!(*router.checked.lock().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn no_route() {
        let router = MockRouter::new(&[true, true], None);
        let mut ui = CommandLineUi::new(&router, input(&["A", "B"]), Vec::new());

        assert!(ui.ask().unwrap());

        assert_eq!(router.check_count(), 2);
        assert_eq!(router.queries().len(), 1);
        assert!(output_text(ui.into_output()).ends_with("No routes from A to B\n"));
    }

    #[test]
    fn route_found() {
        let route = RouteEntry {
            time: 10,
            length: 3,
            via: Station::parse("G").ok(),
        };
        let router = MockRouter::new(&[true, true], Some(route));
        let mut ui = CommandLineUi::new(&router, input(&["A", "B"]), Vec::new());

        assert!(ui.ask().unwrap());

        assert_eq!(router.queries().len(), 1);
        assert!(
            output_text(ui.into_output())
                .ends_with("Your trip from A to B includes 2 stops and will take 10 minutes.\n")
        );
    }

    #[test]
    fn end_of_input_stops_without_query() {
        let router = MockRouter::new(&[true], None);
        let mut ui = CommandLineUi::new(&router, input(&["A"]), Vec::new());

        assert!(!ui.ask().unwrap());
        assert!(router.queries().is_empty());
    }

    #[test]
    fn empty_input() {
        let router = MockRouter::new(&[], None);
        let mut ui = CommandLineUi::new(&router, Cursor::new(Vec::new()), Vec::new());

        assert_eq!(ui.run().unwrap(), 0);
        assert_eq!(router.check_count(), 0);
    }

    #[test]
    fn run_once_by_default() {
        let router = MockRouter::new(&[true, true, true, true], None);
        let mut ui = CommandLineUi::new(&router, input(&["A", "B", "C", "D"]), Vec::new());

        assert_eq!(ui.run().unwrap(), 1);
        assert_eq!(router.queries().len(), 1);
    }

    #[test]
    fn run_repeats_until_input_ends() {
        let router = MockRouter::new(&[true, true, true, true, true], None);
        let config = UiConfig {
            repeat: true,
            ..UiConfig::default()
        };
        let mut ui = CommandLineUi::with_config(
            &router,
            input(&["A", "B", "C", "D", "E"]),
            Vec::new(),
            config,
        );

        assert_eq!(ui.run().unwrap(), 2);
        assert_eq!(
            router.queries(),
            vec![
                ("A".to_string(), "B".to_string()),
                ("C".to_string(), "D".to_string())
            ]
        );
    }

    #[test]
    fn real_router_with_path() {
        let router = Router::build(vec![
            Edge::from_names("A", "B", 2).unwrap(),
            Edge::from_names("B", "C", 3).unwrap(),
            Edge::from_names("C", "D", 1).unwrap(),
        ]);
        let config = UiConfig {
            show_path: true,
            ..UiConfig::default()
        };
        let mut ui =
            CommandLineUi::with_config(&router, input(&["Q", "A", "D"]), Vec::new(), config);

        assert_eq!(ui.run().unwrap(), 1);

        let text = output_text(ui.into_output());
        assert!(text.contains(INVALID_POINT));
        assert!(text.contains("Your trip from A to D includes 2 stops and will take 6 minutes.\n"));
        assert!(text.ends_with("Route: A -> B -> C -> D\n"));
    }

    #[test]
    fn path_hidden_for_missing_route() {
        let router = Router::build(vec![Edge::from_names("A", "B", 2).unwrap()]);
        let config = UiConfig {
            show_path: true,
            ..UiConfig::default()
        };
        let mut ui = CommandLineUi::with_config(&router, input(&["B", "A"]), Vec::new(), config);

        ui.run().unwrap();

        let text = output_text(ui.into_output());
        assert!(text.ends_with("No routes from B to A\n"));
        assert!(!text.contains("Route:"));
    }

    #[test]
    fn unavailable_message() {
        assert_eq!(
            source_unavailable_message(Path::new("routes.csv")),
            "File routes.csv not found."
        );
    }
}
