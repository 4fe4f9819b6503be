/*!
 * # lineconv - concurrent culture-aware line converter
 *
 * A Rust library for normalizing plain-text files line by line.
 *
 * ## Features
 *
 * - Recognize each line as a date/time, a floating-point number or a
 *   char-index instruction, in that fixed priority order
 * - Culture-sensitive parsing (decimal separators, digit grouping, date
 *   field order) with invariant canonical output
 * - Length-prefixed output lines plus a trailing line-count sentinel
 * - Independent concurrent conversion of many files, failures isolated
 *   per file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `culture`: Culture registry and culture-aware parsing
 * - `recognizers`: The three line recognizers
 * - `line_converter`: Ordered dispatch and length-prefix formatting
 * - `line_preparer`: Blank filtering, trimming and the count sentinel
 * - `app_controller`: Per-file pipeline and the concurrent batch run
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod culture;
pub mod errors;
pub mod file_utils;
pub mod line_converter;
pub mod line_preparer;
pub mod recognizers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use culture::Culture;
pub use errors::{AppError, ConvertError};
