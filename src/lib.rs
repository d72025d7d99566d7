//! AgriScan CLI library
//!
//! Diagnose plant photos against the Gemini API from the terminal.

pub mod cli;
pub mod config;
pub mod scanner;
pub mod analyzer;
pub mod report;

pub use agriscan_common::error;
