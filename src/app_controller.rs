use anyhow::{Result, anyhow};
use log::{info, warn, debug};
use std::io::Write;
use std::path::PathBuf;

use crate::errors::RewriteError;
use crate::file_utils::FileManager;
use crate::rewriter;

// @module: Application controller for transcript rewriting

/// Fixed advisory shown after every successful rewrite. The final cue's end
/// time is the placeholder value and cannot be derived from the input.
pub const FINAL_CUE_ADVISORY: &str =
    "Remember: the final cue now ends at the 00:00:00.000 placeholder. \
     You MUST set its real end time by hand before using the transcript.";

/// Where the transcript comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read the transcript from stdin
    Stdin,
    /// Read the transcript from a file
    File(PathBuf),
}

/// Where the rewritten transcript goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print the rewritten transcript to stdout
    Stdout,
    /// Write the rewritten transcript to a file
    File(PathBuf),
    /// Overwrite the input file (file input only)
    InPlace,
}

/// Main application controller: one invocation reads a transcript, rewrites
/// it, and writes the result. All rewrite logic lives in [`rewriter`].
pub struct Controller;

impl Controller {
    /// Create a new controller
    pub fn new() -> Self {
        Controller
    }

    /// Rewrite a transcript that is already in memory
    pub fn rewrite_transcript(&self, transcript: &str) -> Result<String, RewriteError> {
        rewriter::rewrite(transcript)
    }

    /// Run the main workflow: read, rewrite, write
    pub fn run(&self, input: InputSource, output: OutputTarget) -> Result<()> {
        let start_time = std::time::Instant::now();

        if output == OutputTarget::InPlace && input == InputSource::Stdin {
            return Err(anyhow!("--in-place requires a file input, not stdin"));
        }

        let transcript = match &input {
            InputSource::Stdin => {
                debug!("Reading transcript from stdin");
                FileManager::read_from_stdin()?
            }
            InputSource::File(path) => {
                if !FileManager::file_exists(path) {
                    return Err(anyhow!("Input file does not exist: {:?}", path));
                }
                debug!("Reading transcript from {:?}", path);
                FileManager::read_to_string(path)?
            }
        };

        let rewritten = self.rewrite_transcript(&transcript)?;

        match &output {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout();
                stdout.write_all(rewritten.as_bytes())?;
                stdout.flush()?;
            }
            OutputTarget::File(path) => {
                FileManager::write_to_file(path, &rewritten)?;
                info!("Wrote rewritten transcript to {:?}", path);
            }
            OutputTarget::InPlace => {
                // Checked above: in-place always has a file input
                let InputSource::File(path) = &input else {
                    return Err(anyhow!("--in-place requires a file input, not stdin"));
                };
                FileManager::write_to_file(path, &rewritten)?;
                info!("Rewrote {:?} in place", path);
            }
        }

        debug!("Rewrite completed in {:?}", start_time.elapsed());
        warn!("{}", FINAL_CUE_ADVISORY);

        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
