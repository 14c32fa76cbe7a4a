/*!
 * # vttfix - WEBVTT transcript timestamp fixer
 *
 * A Rust library and CLI for rewriting cue end times in WEBVTT-style
 * transcripts.
 *
 * ## Features
 *
 * - Replace each cue's end time with the following cue's start time
 * - Force the final cue's end to the 00:00:00.000 placeholder for manual edit
 * - Strict structural validation before the rewrite, with a specific
 *   diagnostic for every violated property
 * - Re-validation of the rewritten text, so a bad substitution is never
 *   returned
 * - Preserve everything outside the end-timestamp slots byte-for-byte
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `rewriter`: Timestamp extraction and the rewrite pass
 * - `validation`: Structural checks around the rewrite:
 *   - `validation::preconditions`: Checks on the input transcript
 *   - `validation::postconditions`: Checks on the rewritten transcript
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod rewriter;
pub mod validation;

// Re-export main types for easier usage
pub use app_controller::{Controller, InputSource, OutputTarget, FINAL_CUE_ADVISORY};
pub use errors::{AppError, PostconditionViolation, RewriteError};
pub use rewriter::{rewrite, Cue, SENTINEL_TIMESTAMP};
