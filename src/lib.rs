pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod export;
pub mod holidays;
pub mod logging;
pub mod models;
pub mod rules;
pub mod staff;
pub mod ui;

pub use error::{AppError, Result};
