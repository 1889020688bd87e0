/*!
 * Error types for the bisplit application.
 *
 * This module contains custom error types for the splitting pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting one bilingual input file
#[derive(Error, Debug)]
pub enum SplitError {
    /// The reader could not open or parse the input file
    #[error("{message}")]
    Read {
        /// Input file that failed to load
        path: PathBuf,
        /// Reader's description of the failure
        message: String,
    },

    /// The input was read successfully but holds no assets
    #[error("Contains no usable contents: {}", path.display())]
    NoUsableContents {
        /// Input file that produced an empty bundle
        path: PathBuf,
    },

    /// Writing an output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Output file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Text or attribute content holds a character XML 1.0 cannot carry
    #[error("Invalid XML character U+{:04X} in {context}", *ch as u32)]
    InvalidXmlChar {
        /// The offending character
        ch: char,
        /// Where it was found (attribute name or "text")
        context: String,
    },

    /// The XML serializer reported an error
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A command line pattern could not be expanded
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern {
        /// The pattern as given on the command line
        pattern: String,
        /// Description from the glob matcher
        message: String,
    },
}

impl SplitError {
    /// Build a read error from whatever the reader returned
    pub fn read<P: Into<PathBuf>>(path: P, error: &anyhow::Error) -> Self {
        Self::Read {
            path: path.into(),
            message: format!("{:#}", error),
        }
    }

    /// Build a write error for the given output path
    pub fn write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used by the splitting pipeline
pub type SplitResult<T> = std::result::Result<T, SplitError>;
