//! Move specification types
//!
//! Validated move parameters shared by manual moves and stored
//! programs. All quantities are raw steps and steps/second; unit
//! conversion happens in the console layer.

pub mod types;

pub use types::*;
