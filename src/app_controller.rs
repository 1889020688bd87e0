use anyhow::Result;
use log::{error, info, warn};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::splitter::Splitter;

// @module: Application controller for bilingual file splitting

/// Outcome of processing a list of command line inputs
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    /// Input files split successfully
    pub processed: usize,

    /// Input files or patterns that failed
    pub failed: usize,

    /// Every file written, in order
    pub outputs: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Main application controller for splitting
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Splitter shared by all inputs
    splitter: Splitter,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let splitter = Splitter::from_config(&config);
        Ok(Self { config, splitter })
    }

    /// Create a controller around an already configured splitter
    pub fn with_splitter(config: Config, splitter: Splitter) -> Self {
        Self { config, splitter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every argument in order.
    ///
    /// Each argument is expanded as a glob pattern and each resulting file is
    /// split on its own. A failure is reported and counted, then processing
    /// moves on to the next file.
    pub fn run<S: AsRef<str>>(&self, inputs: &[S]) -> RunSummary {
        let mut summary = RunSummary::default();

        if inputs.is_empty() {
            warn!("No input files given");
            return summary;
        }

        for input in inputs {
            let input = input.as_ref();
            let files = match FileManager::expand_pattern(input) {
                Ok(files) => files,
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                    continue;
                }
            };

            for file in files {
                match self.splitter.split(&file) {
                    Ok(outputs) => {
                        summary.processed += 1;
                        summary.outputs.extend(outputs);
                    }
                    Err(e) => {
                        error!("{}: {}", file.display(), e);
                        summary.failed += 1;
                    }
                }
            }
        }

        info!(
            "Finished: {} file(s) split, {} failed, {} written",
            summary.processed,
            summary.failed,
            summary.outputs.len()
        );

        summary
    }
}
