// Frameworks: configuration and the terminal app bootstrap.

pub mod app;
pub mod config;
