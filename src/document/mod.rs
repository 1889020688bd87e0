/*!
 * Bilingual document model and readers.
 *
 * This module provides:
 * - The bundle/asset/pair/inline-string model consumed by the splitter
 * - The `BundleReader` trait and the `ReaderManager` that dispatches to readers
 */

pub mod model;
pub mod reader;

// Re-export types used by other modules
pub use model::{
    Asset, Bundle, InlineProperty, InlineRun, InlineString, InlineTag, RunWithProperty, TagKind,
    TransPair,
};
pub use reader::{BundleReader, JsonBundleReader, ReaderManager};
