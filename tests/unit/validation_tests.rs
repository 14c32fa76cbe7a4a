/*!
 * Tests for the precondition and postcondition passes
 */

use vttfix::errors::{PostconditionViolation, RewriteError};
use vttfix::rewriter::{extract_cues, extract_timestamps};
use vttfix::validation::{preconditions, postconditions};
use crate::common;

/// Run the precondition pass over a raw transcript, extracting the same
/// inputs the rewrite does
fn precheck(transcript: &str) -> Result<(), RewriteError> {
    let timestamps = extract_timestamps(transcript);
    let cues = extract_cues(transcript);
    let arrows = transcript.matches("-->").count();
    preconditions::check(&timestamps, &cues, arrows)
}

#[test]
fn test_preconditions_withGeneratedTranscript_shouldPass() {
    let transcript = common::build_transcript(10);
    assert!(precheck(&transcript).is_ok());
}

#[test]
fn test_preconditions_withTextOnly_shouldReportNoTimestamps() {
    let result = precheck("nothing timed here");

    assert_eq!(result, Err(RewriteError::NoTimestampsFound));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("HH:MM:SS.mmm"));
}

#[test]
fn test_preconditions_withMissingArrow_shouldReportMismatch() {
    // Two timestamps on one line with no arrow between them
    let result = precheck("00:00:01.000 00:00:02.000");

    assert!(matches!(
        result,
        Err(RewriteError::TimestampArrowMismatch {
            timestamp_count: 2,
            cue_count: 0,
        })
    ));
}

#[test]
fn test_preconditions_withEqualLaterStarts_shouldPassOrderingButFailUniqueness() {
    // Equal starts are a uniqueness violation, not an ordering one
    let transcript = "00:00:01.000 --> 00:00:02.000\n\
                      00:00:03.000 --> 00:00:04.000\n\
                      00:00:03.000 --> 00:00:05.000";

    let result = precheck(transcript);

    assert_eq!(
        result,
        Err(RewriteError::DuplicateStartTimestamp(
            "00:00:03.000".to_string()
        ))
    );
}

#[test]
fn test_preconditions_withLexicallySmallerLaterStart_shouldReportUnordered() {
    let transcript = "00:00:01.000 --> 00:00:02.000\n\
                      00:01:00.000 --> 00:01:01.000\n\
                      00:00:59.000 --> 00:01:02.000";

    let result = precheck(transcript);

    assert_eq!(
        result,
        Err(RewriteError::UnorderedTimestamps("00:00:59.000".to_string()))
    );
}

#[test]
fn test_postconditions_withIdenticalTexts_shouldReportUnshiftedEnd() {
    let original = "00:00:01.000 --> 00:00:02.000\n00:00:03.000 --> 00:00:04.000";
    let timestamps = extract_timestamps(original);

    // "Rewritten" text that was never actually rewritten
    let result = postconditions::check(original, original, &timestamps);

    assert!(matches!(
        result,
        Err(PostconditionViolation::EndTimestampMismatch { .. })
    ));
}

#[test]
fn test_postconditions_withDroppedTimestamp_shouldReportCountChange() {
    let original = "00:00:01.000 --> 00:00:02.000\n00:00:03.000 --> 00:00:04.000";
    let mangled = "00:00:01.000 --> 00:00:03.000\n00:00:03.000 --> gone";
    let timestamps = extract_timestamps(original);

    let result = postconditions::check(original, mangled, &timestamps);

    assert_eq!(
        result,
        Err(PostconditionViolation::TimestampCountChanged {
            before: 4,
            after: 3,
        })
    );
}

#[test]
fn test_postconditions_withPaddedText_shouldReportLengthChange() {
    let original = "00:00:01.000 --> 00:00:02.000\n00:00:03.000 --> 00:00:04.000";
    // Correct slots, but an extra trailing byte
    let padded = "00:00:01.000 --> 00:00:03.000\n00:00:03.000 --> 00:00:00.000\n";
    let timestamps = extract_timestamps(original);

    let result = postconditions::check(original, padded, &timestamps);

    assert_eq!(
        result,
        Err(PostconditionViolation::LengthChanged {
            before: original.len(),
            after: padded.len(),
        })
    );
}
