//! Filtering, sorting and grouping for the lists of a movie-viewing log.

pub mod catalog;
pub mod config;
pub mod error;
pub mod list;
pub mod lists;
pub mod models;
pub mod report;

pub use error::{AppError, AppResult};
