//! Infrastructure: configuration, logging, and bet sheet input.

pub mod bet_sheet;
pub mod config;
