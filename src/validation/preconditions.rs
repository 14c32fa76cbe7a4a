/*!
 * Structural checks on the input transcript, run before any substitution.
 *
 * The checks operate on the flat timestamp list, the cue list, and the raw
 * arrow count, all extracted in document order. Ordering comparisons are
 * lexical; the fixed-width HH:MM:SS.mmm format makes that equivalent to
 * chronological order.
 */

use std::collections::HashSet;

use crate::errors::RewriteError;
use crate::rewriter::Cue;

/// Validate the extracted structure of a transcript.
///
/// `timestamps` is the interleaved start/end list in document order, `cues`
/// the matched `start --> end` pairs, and `arrow_count` the number of `-->`
/// occurrences anywhere in the text. Returns the first violated check.
pub fn check(timestamps: &[&str], cues: &[Cue], arrow_count: usize) -> Result<(), RewriteError> {
    if timestamps.is_empty() {
        return Err(RewriteError::NoTimestampsFound);
    }

    // Every timestamp must sit in exactly one cue's start or end slot. An
    // orphaned timestamp or malformed arrow spacing breaks this count.
    if cues.len() * 2 != timestamps.len() {
        return Err(RewriteError::TimestampArrowMismatch {
            timestamp_count: timestamps.len(),
            cue_count: cues.len(),
        });
    }

    // A stray arrow in caption text inflates this count past the cue count.
    if arrow_count != cues.len() {
        return Err(RewriteError::ArrowCountMismatch {
            arrow_count,
            cue_count: cues.len(),
        });
    }

    check_unique_starts(timestamps)?;
    check_ascending_starts(timestamps)?;

    Ok(())
}

/// Start slots are the even indices of the interleaved list; each must be
/// distinct.
fn check_unique_starts(timestamps: &[&str]) -> Result<(), RewriteError> {
    let mut seen = HashSet::new();
    for start in timestamps.iter().step_by(2) {
        if !seen.insert(*start) {
            return Err(RewriteError::DuplicateStartTimestamp(start.to_string()));
        }
    }
    Ok(())
}

/// The starts of cue 1 onward must be non-decreasing in document order. The
/// first cue's own start is not compared against anything here; the
/// postcondition pass covers the pairings it feeds into.
fn check_ascending_starts(timestamps: &[&str]) -> Result<(), RewriteError> {
    let later_starts: Vec<&str> = timestamps.iter().skip(2).step_by(2).copied().collect();
    for pair in later_starts.windows(2) {
        if pair[0] > pair[1] {
            return Err(RewriteError::UnorderedTimestamps(pair[1].to_string()));
        }
    }
    Ok(())
}
