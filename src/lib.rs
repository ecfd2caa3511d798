//! Pointplot - a terminal-based scatter plot viewer for 2D point data.
//!
//! Pointplot reads whitespace-delimited point records from a plain-text file,
//! renders them as a scatter chart in the terminal, nudges every point by a
//! small random offset, and renders the translated points as a second series
//! in a contrasting color on the same chart.
//!
//! # Features
//!
//! - Plain-text point file reading with typed parse errors
//! - Scatter chart with axis titles, gridlines, and a legend
//! - Random, non-negative translation offsets
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use pointplot::data::PointReader;
//! use std::path::Path;
//!
//! // Load a point file
//! let points = PointReader::read_file(Path::new("data.txt"))?;
//! println!("Loaded {} points", points.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod jitter;
pub mod ui;
pub mod util;

pub use error::{PointplotError, Result};
