pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod views;
