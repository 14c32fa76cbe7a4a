/*!
 * End-to-end rewrite workflow tests through the controller
 */

use anyhow::Result;
use vttfix::app_controller::{Controller, InputSource, OutputTarget};
use vttfix::rewriter::{extract_cues, SENTINEL_TIMESTAMP};
use vttfix::file_utils::FileManager;
use crate::common;

#[test]
fn test_run_withFileInAndFileOut_shouldWriteRewrittenTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::build_transcript(3);
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "in.vtt", &transcript)?;
    let output = temp_dir.path().join("out.vtt");

    let controller = Controller::new();
    controller.run(
        InputSource::File(input.clone()),
        OutputTarget::File(output.clone()),
    )?;

    let rewritten = FileManager::read_to_string(&output)?;
    assert_eq!(rewritten.len(), transcript.len());
    assert_eq!(
        extract_cues(&rewritten).last().unwrap().end,
        SENTINEL_TIMESTAMP
    );

    // The input file is untouched
    assert_eq!(FileManager::read_to_string(&input)?, transcript);
    Ok(())
}

#[test]
fn test_run_withInPlaceTarget_shouldOverwriteInputFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::build_transcript(2);
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "in.vtt", &transcript)?;

    let controller = Controller::new();
    controller.run(InputSource::File(input.clone()), OutputTarget::InPlace)?;

    let rewritten = FileManager::read_to_string(&input)?;
    assert_ne!(rewritten, transcript);
    assert_eq!(rewritten.len(), transcript.len());
    Ok(())
}

#[test]
fn test_run_withInPlaceOnStdin_shouldFail() {
    let controller = Controller::new();

    let result = controller.run(InputSource::Stdin, OutputTarget::InPlace);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("in-place"));
}

#[test]
fn test_run_withMissingInputFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new();

    let result = controller.run(
        InputSource::File(temp_dir.path().join("missing.vtt")),
        OutputTarget::Stdout,
    );

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("does not exist"));
    Ok(())
}

#[test]
fn test_run_withInvalidTranscript_shouldFailAndLeaveOutputUnwritten() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // Duplicated start timestamp
    let bad = "00:00:01.000 --> 00:00:02.000\n00:00:01.000 --> 00:00:04.000";
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "bad.vtt", bad)?;
    let output = temp_dir.path().join("out.vtt");

    let controller = Controller::new();
    let result = controller.run(
        InputSource::File(input),
        OutputTarget::File(output.clone()),
    );

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Duplicate start timestamp"));
    assert!(!FileManager::file_exists(&output));
    Ok(())
}

#[test]
fn test_rewriteTranscript_withInMemoryInput_shouldMatchCoreRewrite() {
    let transcript = common::build_transcript(4);
    let controller = Controller::new();

    let via_controller = controller.rewrite_transcript(&transcript).unwrap();
    let direct = vttfix::rewriter::rewrite(&transcript).unwrap();

    assert_eq!(via_controller, direct);
}
