pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod state;
pub mod tvmaze;
pub mod web;
