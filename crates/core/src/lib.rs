//! Core library for devtoolkit
//!
//! This crate implements the **Functional Core** of the devtoolkit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The devtoolkit project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devtoolkit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`devtoolkit`**: CLI parsing, terminal output and the MCP server (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Validated at the edge**: Each tool exposes a typed error whose message is
//!   the one shown to the user, and the transformation itself is total once
//!   inputs are validated
//!
//! # Module Organization
//!
//! - [`clamp`]: Fluid CSS `clamp()` expressions interpolating between two viewports
//! - [`card`]: Luhn checksum, card brand detection and masking
//! - [`cron`]: Plain-English translation of 5-field cron expressions
//! - [`ascii`]: Text to binary/hex character codes and back
//! - [`color`]: HEX/RGB/HSL conversion and tint/shade palettes
//! - [`morse`]: Morse code translation
//! - [`text`]: Character/word counters, readability metrics, case detection and word frequency
//! - [`number`]: Even/odd checks, squares and cubes
//! - [`percent`]: Percentage calculator
//! - [`signature`]: HMAC-SHA256 signatures
//!
//! # Example Usage
//!
//! ```rust
//! use devtoolkit_core::clamp::{build_clamp_expression, parse_clamp_inputs, OutputUnit};
//!
//! let range = parse_clamp_inputs("16", "24", "320", "1200").unwrap();
//! let expression = build_clamp_expression(&range, OutputUnit::Px);
//!
//! assert_eq!(
//!     expression.to_string(),
//!     "clamp(16px, calc(0.9091vw + 13.0909px), 24px)"
//! );
//! ```

pub mod ascii;
pub mod card;
pub mod clamp;
pub mod color;
pub mod cron;
pub mod morse;
pub mod number;
pub mod percent;
pub mod signature;
pub mod text;
