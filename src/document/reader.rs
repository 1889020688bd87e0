/*!
 * Readers turning input files into bundles.
 *
 * The splitter never parses a bilingual format itself. It asks a
 * `ReaderManager`, which holds an ordered list of `BundleReader`
 * implementations and hands the file to the first one that accepts it.
 */

use anyhow::{Context, Result, anyhow};
use log::debug;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::app_config::ReaderConfig;
use crate::document::model::Bundle;

/// Common trait for all bundle readers
///
/// Implementations adapt one input format to the bundle model, so the
/// splitter can be used with any of them interchangeably.
pub trait BundleReader: Debug {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Whether this reader wants to handle the given file
    fn can_read(&self, path: &Path) -> bool;

    /// Read the file into a bundle
    ///
    /// # Arguments
    /// * `path` - The input file
    ///
    /// # Returns
    /// * `Result<Bundle>` - The parsed bundle, or an error describing why the file was rejected
    fn read(&self, path: &Path) -> Result<Bundle>;
}

/// Ordered collection of readers
#[derive(Debug, Default)]
pub struct ReaderManager {
    readers: Vec<Box<dyn BundleReader>>,
}

impl ReaderManager {
    /// Create a manager with no readers registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with the built-in readers, configured from `config`
    pub fn from_config(config: &ReaderConfig) -> Self {
        let mut manager = Self::new();
        manager.register(JsonBundleReader::new(&config.json_extensions));
        manager
    }

    /// Add a reader; earlier registrations take precedence
    pub fn register<R: BundleReader + 'static>(&mut self, reader: R) {
        self.readers.push(Box::new(reader));
    }

    /// Number of registered readers
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Read a file with the first accepting reader that succeeds
    ///
    /// When several readers accept the file and all of them fail, the error
    /// of the last one is returned.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Bundle> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(anyhow!("File does not exist: {}", path.display()));
        }

        let mut last_error = None;
        for reader in self.readers.iter().filter(|r| r.can_read(path)) {
            debug!("Trying reader '{}' for {}", reader.name(), path.display());
            match reader.read(path) {
                Ok(bundle) => return Ok(bundle),
                Err(e) => {
                    debug!("Reader '{}' rejected {}: {:#}", reader.name(), path.display(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unsupported file format: {}", path.display())))
    }
}

/// Reader for bundles stored as JSON in the crate's own data model
#[derive(Debug, Clone)]
pub struct JsonBundleReader {
    extensions: Vec<String>,
}

impl JsonBundleReader {
    /// Create a reader accepting the given file extensions (with or without a leading dot)
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }
}

impl Default for JsonBundleReader {
    fn default() -> Self {
        Self::new(&["json"])
    }
}

impl BundleReader for JsonBundleReader {
    fn name(&self) -> &str {
        "json"
    }

    fn can_read(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    fn read(&self, path: &Path) -> Result<Bundle> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let bundle: Bundle = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse bundle: {}", path.display()))?;

        Ok(bundle)
    }
}
