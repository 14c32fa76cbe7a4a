/*!
 * Re-validation of the rewritten transcript against the original.
 *
 * The substitution pass is positional, so these checks re-extract every
 * timestamp from the rewritten text and compare slot by slot: starts must be
 * untouched, each end must hold the following cue's original start, and the
 * final end must be the sentinel. The length check pins the rewrite down to a
 * pure component-for-component swap, which holds because every timestamp
 * token has the same fixed width.
 */

use crate::errors::PostconditionViolation;
use crate::rewriter::{extract_timestamps, SENTINEL_TIMESTAMP};

/// Validate the rewritten transcript.
///
/// `original_timestamps` is the interleaved timestamp list extracted from the
/// original text, in document order. Returns the first violated check.
pub fn check(
    original: &str,
    rewritten: &str,
    original_timestamps: &[&str],
) -> Result<(), PostconditionViolation> {
    let new_timestamps = extract_timestamps(rewritten);

    if new_timestamps.len() != original_timestamps.len() {
        return Err(PostconditionViolation::TimestampCountChanged {
            before: original_timestamps.len(),
            after: new_timestamps.len(),
        });
    }

    check_starts_untouched(original_timestamps, &new_timestamps)?;
    check_ends_shifted(original_timestamps, &new_timestamps)?;
    check_sentinel(&new_timestamps)?;
    check_cues_run_forward(original_timestamps, &new_timestamps)?;

    if original.len() != rewritten.len() {
        return Err(PostconditionViolation::LengthChanged {
            before: original.len(),
            after: rewritten.len(),
        });
    }

    Ok(())
}

/// Start slots (even indices) must be byte-identical to the originals.
fn check_starts_untouched(
    original: &[&str],
    rewritten: &[&str],
) -> Result<(), PostconditionViolation> {
    let original_starts = original.iter().step_by(2);
    let rewritten_starts = rewritten.iter().step_by(2);

    for (index, (before, after)) in original_starts.zip(rewritten_starts).enumerate() {
        if before != after {
            return Err(PostconditionViolation::StartTimestampChanged {
                index,
                original: before.to_string(),
                rewritten: after.to_string(),
            });
        }
    }
    Ok(())
}

/// Every end slot except the final one must hold the original start of the
/// following cue.
fn check_ends_shifted(
    original: &[&str],
    rewritten: &[&str],
) -> Result<(), PostconditionViolation> {
    let next_starts = original.iter().skip(2).step_by(2);
    let new_ends = rewritten.iter().skip(1).step_by(2);

    // next_starts has one fewer element than new_ends; zip stops before the
    // final end slot, which the sentinel check owns.
    for (index, (expected, actual)) in next_starts.zip(new_ends).enumerate() {
        if expected != actual {
            return Err(PostconditionViolation::EndTimestampMismatch {
                index,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
    Ok(())
}

/// The final end slot must be the placeholder.
fn check_sentinel(rewritten: &[&str]) -> Result<(), PostconditionViolation> {
    match rewritten.last() {
        Some(last) if *last == SENTINEL_TIMESTAMP => Ok(()),
        Some(last) => Err(PostconditionViolation::MissingSentinel(last.to_string())),
        None => Err(PostconditionViolation::MissingSentinel(String::new())),
    }
}

/// Each cue before the last must still run forward: its original start must
/// sort strictly below its new end. This catches a cue whose start exceeds
/// the next cue's start, which slips past the looser precondition ordering
/// check.
fn check_cues_run_forward(
    original: &[&str],
    rewritten: &[&str],
) -> Result<(), PostconditionViolation> {
    let cue_count = original.len() / 2;
    let starts = original.iter().step_by(2);
    let new_ends = rewritten.iter().skip(1).step_by(2);

    for (index, (start, end)) in starts.zip(new_ends).take(cue_count.saturating_sub(1)).enumerate() {
        if start >= end {
            return Err(PostconditionViolation::BackwardCue {
                index,
                start: start.to_string(),
                end: end.to_string(),
            });
        }
    }
    Ok(())
}
