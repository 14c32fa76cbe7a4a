/*!
 * Error types for the vttfix application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while validating and rewriting a transcript
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// The input string was empty
    #[error("No text provided. Paste the transcript first.")]
    EmptyInput,

    /// No timestamp token was found anywhere in the text
    #[error("No timestamps found in the transcript. Are they in the format \"HH:MM:SS.mmm\"?")]
    NoTimestampsFound,

    /// The raw timestamp count does not match the cue count
    #[error(
        "Mismatch between {timestamp_count} timestamps and {cue_count} \"start --> end\" cues. \
         A timestamp may be orphaned, an arrow may be missing between two timestamps, \
         or a cue line has extra spaces around the arrow."
    )]
    TimestampArrowMismatch {
        /// Raw timestamp occurrences in the text
        timestamp_count: usize,
        /// Well-formed `start --> end` cues in the text
        cue_count: usize,
    },

    /// A "-->" separator appears outside a cue line, or one is missing
    #[error(
        "Found {arrow_count} \"-->\" separators for {cue_count} cues. \
         An arrow may be missing, or one is used inside caption text."
    )]
    ArrowCountMismatch {
        /// `-->` occurrences anywhere in the text
        arrow_count: usize,
        /// Well-formed cues in the text
        cue_count: usize,
    },

    /// Two cues share the same start timestamp
    #[error("Duplicate start timestamp {0}. Start timestamps must be unique.")]
    DuplicateStartTimestamp(String),

    /// Cue starts are not in ascending document order
    #[error(
        "Start timestamps are not in ascending order near {0}. \
         Check all the starts again; ignore the ends for now."
    )]
    UnorderedTimestamps(String),

    /// Internal consistency check on the replacement sequence
    #[error("Expected {expected} replacement end timestamps but computed {actual}")]
    ReplacementCountMismatch {
        /// Number of cues to rewrite
        expected: usize,
        /// Length of the computed replacement sequence
        actual: usize,
    },

    /// A check on the rewritten text failed
    #[error("Rewrite postcondition violated: {0}")]
    Postcondition(#[from] PostconditionViolation),
}

/// Violations detected when re-validating the rewritten transcript
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostconditionViolation {
    /// The rewrite changed the number of timestamp tokens
    #[error("timestamp count changed from {before} to {after}")]
    TimestampCountChanged {
        /// Count before the rewrite
        before: usize,
        /// Count after the rewrite
        after: usize,
    },

    /// A start slot was touched by the substitution pass
    #[error("start timestamp of cue {index} changed from {original} to {rewritten}")]
    StartTimestampChanged {
        /// Zero-based cue index
        index: usize,
        /// Start before the rewrite
        original: String,
        /// Start after the rewrite
        rewritten: String,
    },

    /// An end slot does not hold the following cue's original start
    #[error("end timestamp of cue {index} is {actual}, expected the next cue's start {expected}")]
    EndTimestampMismatch {
        /// Zero-based cue index
        index: usize,
        /// The following cue's original start
        expected: String,
        /// What the end slot actually holds
        actual: String,
    },

    /// The final end slot is not the placeholder value
    #[error("final end timestamp is {0}, expected the 00:00:00.000 placeholder")]
    MissingSentinel(String),

    /// A rewritten cue would end at or before its own start
    #[error("cue {index} would end at {end}, at or before its start {start}")]
    BackwardCue {
        /// Zero-based cue index
        index: usize,
        /// The cue's original start
        start: String,
        /// The cue's new end
        end: String,
    },

    /// The rewrite changed the total text length
    #[error("transcript length changed from {before} to {after} bytes")]
    LengthChanged {
        /// Byte length before the rewrite
        before: usize,
        /// Byte length after the rewrite
        after: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from transcript validation or rewriting
    #[error("Rewrite error: {0}")]
    Rewrite(#[from] RewriteError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
