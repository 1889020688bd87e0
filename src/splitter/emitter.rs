/*!
 * Monolingual output file emission.
 */

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Asset, InlineString, TransPair};
use crate::errors::{SplitError, SplitResult};
use crate::file_utils::FileManager;
use crate::splitter::converter;
use crate::splitter::xml::{self, XmlElement, XmlNode};

// Element and attribute names used in the output XML
pub const FILE_ELEMENT: &str = "file";
pub const SEG_ELEMENT: &str = "seg";
pub const XML_LANG: &str = "xml:lang";
pub const XML_SPACE: &str = "xml:space";
pub const NAME_ATTR: &str = "name";
pub const ID_ATTR: &str = "id";

/// Writes one monolingual XML file per call into an output directory
#[derive(Debug, Clone)]
pub struct FileEmitter {
    output_dir: PathBuf,
}

impl FileEmitter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file `emit` writes for a base name and language
    pub fn output_path(&self, base_name: &str, language: &str) -> PathBuf {
        self.output_dir.join(output_file_name(base_name, language))
    }

    /// Build the document for one language side of `asset` and write it.
    ///
    /// `selector` picks the inline string to render from each pair. An
    /// existing file of the same name is overwritten.
    ///
    /// # Returns
    /// * `SplitResult<PathBuf>` - Path of the written file
    pub fn emit<F>(&self, base_name: &str, asset: &Asset, language: &str, selector: F) -> SplitResult<PathBuf>
    where
        F: Fn(&TransPair) -> &InlineString,
    {
        let root = build_document(base_name, asset, language, selector);
        let bytes = xml::to_xml_bytes(&root)?;

        let path = self.output_path(base_name, language);
        FileManager::ensure_dir(&self.output_dir).map_err(|e| SplitError::write(&path, e))?;
        fs::write(&path, bytes).map_err(|e| SplitError::write(&path, e))?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Output file name for a base name and language
pub fn output_file_name(base_name: &str, language: &str) -> String {
    format!("{} ({}).xml", base_name, language)
}

/// Build the output document for one language side of an asset.
///
/// Only segments (pairs with a positive serial) are included. A newline text
/// node follows the root start tag and every `seg` element.
pub fn build_document<F>(base_name: &str, asset: &Asset, language: &str, selector: F) -> XmlElement
where
    F: Fn(&TransPair) -> &InlineString,
{
    let mut root = XmlElement::new(FILE_ELEMENT)
        .with_attribute(XML_LANG, language)
        .with_attribute(NAME_ATTR, base_name)
        .with_children([XmlNode::text("\n")]);

    for pair in asset.segments() {
        let seg = XmlElement::new(SEG_ELEMENT)
            .with_attribute(ID_ATTR, pair.id.as_str())
            .with_attribute(XML_SPACE, "preserve")
            .with_children(converter::convert(selector(pair)));
        root.push(seg.into());
        root.push(XmlNode::text("\n"));
    }

    root
}
