pub mod app;
pub mod browse;
pub mod cli;
pub mod config;
pub mod directory;
pub mod display;
pub mod logging;
pub mod output;
pub mod patient;
pub mod server;

#[cfg(test)]
mod tests;
