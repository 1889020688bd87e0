/*!
 * Bilingual document model.
 *
 * A bundle is what a reader produces from one input file. It holds assets,
 * each asset holds translation pairs, and each side of a pair is an inline
 * string: an ordered list of runs with a property mask per run.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Parsed contents of one bilingual input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Assets in document order
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Bundle {
    /// Create a bundle from a list of assets
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Whether the bundle holds no assets at all
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// One translatable unit, typically the contents of one original file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Name of the original file the asset was extracted from
    pub original_name: String,

    /// Source language code (e.g., "en", "en-US")
    pub source_language: String,

    /// Target language code (e.g., "fr", "fr-FR")
    pub target_language: String,

    /// Translation pairs in document order
    #[serde(default)]
    pub trans_pairs: Vec<TransPair>,
}

impl Asset {
    /// Create an empty asset
    pub fn new(original_name: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            original_name: original_name.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            trans_pairs: Vec::new(),
        }
    }

    /// Append a pair, builder style
    pub fn with_pair(mut self, pair: TransPair) -> Self {
        self.trans_pairs.push(pair);
        self
    }

    /// Pairs that are real segments, in document order
    pub fn segments(&self) -> impl Iterator<Item = &TransPair> {
        self.trans_pairs.iter().filter(|pair| pair.is_segment())
    }
}

/// A translation pair: an id, a serial number and two inline strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransPair {
    /// Identifier as given by the bilingual file
    pub id: String,

    /// Segment serial number; zero or negative for inter-segment content
    pub serial: i64,

    /// Source-language content
    #[serde(default)]
    pub source: InlineString,

    /// Target-language content
    #[serde(default)]
    pub target: InlineString,
}

impl TransPair {
    pub fn new(id: &str, serial: i64, source: InlineString, target: InlineString) -> Self {
        Self {
            id: id.to_string(),
            serial,
            source,
            target,
        }
    }

    /// True for a segment, false for skeleton/structural content
    pub fn is_segment(&self) -> bool {
        self.serial > 0
    }
}

/// Property bitmask attached to every inline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineProperty(u8);

impl InlineProperty {
    pub const NONE: Self = Self(0);
    /// Inserted text (tracked changes)
    pub const INS: Self = Self(1);
    /// Deleted text (tracked changes)
    pub const DEL: Self = Self(2);
    /// Emphasised text
    pub const EMP: Self = Self(4);

    /// Raw bit value
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for InlineProperty {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InlineProperty {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for InlineProperty {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Position of an inline tag relative to the text it marks up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// Opening tag of a paired span
    Begin,
    /// Closing tag of a paired span
    End,
    /// Standalone placeholder
    #[default]
    Standalone,
}

/// An inline formatting tag or placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineTag {
    #[serde(default)]
    pub kind: TagKind,

    /// Tag identifier from the bilingual file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Original markup name (e.g., "b", "bpt")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InlineTag {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
        }
    }
}

/// One unit of inline content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineRun {
    /// Plain text
    Text(String),
    /// A formatting tag or placeholder
    Tag(InlineTag),
    /// Any other run kind a reader chose to keep, with a debug label
    Other(String),
}

impl fmt::Display for InlineRun {
    /// Debug-style rendering used in diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Tag(tag) => match &tag.id {
                Some(id) => write!(f, "{{{:?}:{}}}", tag.kind, id),
                None => write!(f, "{{{:?}}}", tag.kind),
            },
            Self::Other(label) => write!(f, "{{other:{}}}", label),
        }
    }
}

/// A run together with its property mask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunWithProperty {
    pub run: InlineRun,

    #[serde(default, skip_serializing_if = "InlineProperty::is_none")]
    pub property: InlineProperty,
}

/// Rich text: an ordered sequence of runs with properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineString {
    runs: Vec<RunWithProperty>,
}

impl InlineString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run with the given property mask
    pub fn push(&mut self, run: InlineRun, property: InlineProperty) {
        self.runs.push(RunWithProperty { run, property });
    }

    /// Builder-style append of a plain text run
    pub fn text(mut self, text: &str) -> Self {
        self.push(InlineRun::Text(text.to_string()), InlineProperty::NONE);
        self
    }

    /// Builder-style append of a text run carrying properties
    pub fn text_with(mut self, text: &str, property: InlineProperty) -> Self {
        self.push(InlineRun::Text(text.to_string()), property);
        self
    }

    /// Builder-style append of a tag run
    pub fn tag(mut self, tag: InlineTag) -> Self {
        self.push(InlineRun::Tag(tag), InlineProperty::NONE);
        self
    }

    /// Builder-style append of any run
    pub fn run(mut self, run: InlineRun, property: InlineProperty) -> Self {
        self.push(run, property);
        self
    }

    /// Runs with their properties, in order
    pub fn runs_with_properties(&self) -> impl Iterator<Item = &RunWithProperty> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl From<&str> for InlineString {
    fn from(text: &str) -> Self {
        Self::new().text(text)
    }
}

impl fmt::Display for InlineString {
    /// Plain text of all runs that are not deleted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rwp in &self.runs {
            if let (InlineRun::Text(text), false) = (&rwp.run, rwp.property.contains(InlineProperty::DEL)) {
                f.write_str(text)?;
            }
        }
        Ok(())
    }
}
