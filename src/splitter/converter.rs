/*!
 * Conversion of inline strings to XML mixed content.
 */

use log::debug;

use crate::document::{InlineProperty, InlineRun, InlineString, RunWithProperty};
use crate::splitter::xml::{XmlElement, XmlNode};

/// Name of the empty element standing in for any inline tag
pub const TAG_ELEMENT: &str = "tag";

/// Convert an inline string to a sequence of XML nodes.
///
/// Deleted runs are dropped whatever their kind, text runs become text nodes
/// and tag runs become an empty `<tag/>`. The original markup of a tag is not
/// kept, only its position. Other run kinds produce nothing.
pub fn convert(inline: &InlineString) -> Vec<XmlNode> {
    inline.runs_with_properties().filter_map(convert_run).collect()
}

fn convert_run(rwp: &RunWithProperty) -> Option<XmlNode> {
    // render as if deletions were hidden
    if rwp.property.contains(InlineProperty::DEL) {
        return None;
    }

    match &rwp.run {
        InlineRun::Text(text) => Some(XmlNode::Text(text.clone())),
        InlineRun::Tag(_) => Some(XmlNode::Element(XmlElement::new(TAG_ELEMENT))),
        InlineRun::Other(_) => {
            debug!("unknown inline run: {}", rwp.run);
            None
        }
    }
}
