use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

use crate::errors::RewriteError;
use crate::validation;

// @module: Transcript timestamp extraction and rewriting

// @const: WEBVTT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

// @const: Cue line regex, start and end captured separately
static CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}\.\d{3}) --> (\d{2}:\d{2}:\d{2}\.\d{3})").unwrap()
});

/// Placeholder end time written into the final cue. The real end time is not
/// derivable from the transcript, so the caller must edit it by hand.
pub const SENTINEL_TIMESTAMP: &str = "00:00:00.000";

/// Separator between the start and end slots of a cue line
pub const ARROW: &str = "-->";

// @struct: Single start --> end pair
//
// Timestamps are kept as opaque strings. The fixed-width zero-padded
// HH:MM:SS.mmm format makes lexical order equivalent to chronological order,
// and every ordering check in this crate relies on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Start timestamp
    pub start: String,

    // @field: End timestamp
    pub end: String,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.start, ARROW, self.end)
    }
}

/// Extract every timestamp token in document order, starts and ends
/// interleaved: index 0 is cue 0's start, index 1 is cue 0's end, and so on
/// for a well-formed transcript.
pub fn extract_timestamps(transcript: &str) -> Vec<&str> {
    TIMESTAMP_REGEX
        .find_iter(transcript)
        .map(|m| m.as_str())
        .collect()
}

/// Extract every `start --> end` pair in document order
pub fn extract_cues(transcript: &str) -> Vec<Cue> {
    CUE_REGEX
        .captures_iter(transcript)
        .map(|caps| Cue {
            start: caps[1].to_string(),
            end: caps[2].to_string(),
        })
        .collect()
}

/// Count `-->` separators occurring anywhere in the text, including inside
/// free caption text
pub fn count_arrows(transcript: &str) -> usize {
    transcript.matches(ARROW).count()
}

/// Rewrite each cue's end time to the following cue's start time.
///
/// The final cue has no following cue, so its end becomes the
/// [`SENTINEL_TIMESTAMP`] placeholder. All text outside end-timestamp slots is
/// preserved byte-for-byte; the rewritten transcript always has the same length
/// as the input.
///
/// Fails with a [`RewriteError`] describing the violated structural property
/// when the input does not hold exactly one timestamp pair per arrow, has
/// duplicate or out-of-order starts, or when re-validation of the rewritten
/// text detects a bad substitution. No partial result is ever returned.
pub fn rewrite(transcript: &str) -> Result<String, RewriteError> {
    if transcript.is_empty() {
        return Err(RewriteError::EmptyInput);
    }

    let timestamps = extract_timestamps(transcript);
    let cues = extract_cues(transcript);
    let arrow_count = count_arrows(transcript);

    validation::preconditions::check(&timestamps, &cues, arrow_count)?;

    let replacements = build_replacements(&timestamps);
    if replacements.len() != cues.len() {
        return Err(RewriteError::ReplacementCountMismatch {
            expected: cues.len(),
            actual: replacements.len(),
        });
    }

    let rewritten = substitute_ends(transcript, &replacements);

    validation::postconditions::check(transcript, &rewritten, &timestamps)?;

    debug!("Rewrote {} cue end timestamp(s)", cues.len());
    Ok(rewritten)
}

/// Build the sequence of new end timestamps, one per cue in document order:
/// the start of cue 1 through the start of the last cue, then the sentinel.
fn build_replacements<'a>(timestamps: &[&'a str]) -> Vec<&'a str> {
    let mut replacements: Vec<&str> = timestamps
        .iter()
        .skip(2)
        .step_by(2)
        .copied()
        .collect();
    replacements.push(SENTINEL_TIMESTAMP);
    replacements
}

/// Substitute each cue's end slot with the next unused replacement value,
/// consumed strictly left to right. The cursor is local to this call; the
/// precondition pass guarantees one replacement per cue match.
fn substitute_ends(transcript: &str, replacements: &[&str]) -> String {
    let mut rewritten = String::with_capacity(transcript.len());
    let mut tail_start = 0;
    let mut cursor = 0;

    for caps in CUE_REGEX.captures_iter(transcript) {
        // Group 2 is mandatory in the pattern
        let end_slot = caps.get(2).unwrap();
        rewritten.push_str(&transcript[tail_start..end_slot.start()]);
        rewritten.push_str(replacements[cursor]);
        cursor += 1;
        tail_start = end_slot.end();
    }

    rewritten.push_str(&transcript[tail_start..]);
    rewritten
}
