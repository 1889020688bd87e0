/*!
 * Splitting of bilingual bundles into monolingual XML files.
 *
 * - `converter`: inline string to XML mixed content
 * - `emitter`: one language side of an asset to one file
 * - `xml`: the output tree and its serializer
 *
 * `Splitter` ties them together for one input file.
 */

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document::{Asset, ReaderManager};
use crate::errors::{SplitError, SplitResult};
use crate::file_utils::FileManager;

pub mod converter;
pub mod emitter;
pub mod xml;

pub use converter::convert;
pub use emitter::{FileEmitter, build_document, output_file_name};
pub use xml::{XmlElement, XmlNode};

/// Splits bilingual files into pairs of monolingual XML files
#[derive(Debug)]
pub struct Splitter {
    readers: ReaderManager,
    emitter: FileEmitter,
}

impl Splitter {
    pub fn new(readers: ReaderManager, emitter: FileEmitter) -> Self {
        Self { readers, emitter }
    }

    /// Create a splitter with the built-in readers and the configured output directory
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ReaderManager::from_config(&config.readers),
            FileEmitter::new(&config.output_dir),
        )
    }

    pub fn emitter(&self) -> &FileEmitter {
        &self.emitter
    }

    /// Split one bilingual file.
    ///
    /// Every asset produces two files, source language first. Returns the
    /// paths written, in order.
    pub fn split<P: AsRef<Path>>(&self, path: P) -> SplitResult<Vec<PathBuf>> {
        let path = path.as_ref();

        let bundle = self.readers.read(path).map_err(|e| SplitError::read(path, &e))?;
        if bundle.is_empty() {
            return Err(SplitError::NoUsableContents {
                path: path.to_path_buf(),
            });
        }

        debug!("{}: {} asset(s)", path.display(), bundle.assets.len());

        let mut written = Vec::with_capacity(bundle.assets.len() * 2);
        for asset in &bundle.assets {
            let base_name = Self::base_name(path, asset);
            written.push(self.emitter.emit(&base_name, asset, &asset.source_language, |pair| &pair.source)?);
            written.push(self.emitter.emit(&base_name, asset, &asset.target_language, |pair| &pair.target)?);
            info!("{} -> {}", path.display(), base_name);
        }

        Ok(written)
    }

    /// Base name shared by both output files of an asset
    pub fn base_name(input: &Path, asset: &Asset) -> String {
        format!(
            "{}-{}",
            FileManager::file_name_only(&input.to_string_lossy()),
            FileManager::file_name_only(&asset.original_name)
        )
    }
}
