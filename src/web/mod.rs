//! Web API module for the starrr application.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod shows;
pub mod status;

pub use routes::*;
