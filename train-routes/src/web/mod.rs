//! Web layer for the route finder.
//!
//! Provides HTTP endpoints answering the same queries as the command line.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router, serve};
pub use state::AppState;
