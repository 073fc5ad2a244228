pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod season;
pub mod template;

pub use routes::AppState;
