//! CLI utilities for Shiksha tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Score and count formatting
//! - Terminal rendering of highlighted matches

#![warn(missing_docs)]

pub mod output;
