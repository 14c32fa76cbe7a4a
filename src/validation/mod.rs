/*!
 * Validation module for the rewrite pipeline.
 *
 * The rewrite is guarded on both sides:
 * - `preconditions`: structural checks on the extracted timestamps and cues
 *   before any substitution is attempted
 * - `postconditions`: re-validation of the rewritten text against the
 *   original, so a bad substitution can never be returned
 *
 * Every check fails with its own diagnostic; nothing is silently corrected.
 * A timing file with ambiguous structure cannot be safely auto-repaired, so
 * strict rejection is deliberate.
 */

pub mod preconditions;
pub mod postconditions;
