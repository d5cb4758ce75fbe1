// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Error, Options};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// An SVG element subtree, ready for writing.
///
/// Mirrors the `XmlTree` type of the generated Elm code:
/// a local tag name, attribute pairs and child elements,
/// all in source order. Namespace prefixes are already stripped
/// and attribute names are already Elm-friendly.
#[derive(Clone, PartialEq, Debug)]
pub struct XmlTree {
    /// The element's local tag name.
    pub tag: String,

    /// `(name, value)` attribute pairs in source order.
    pub attributes: Vec<(String, String)>,

    /// Child elements in source order.
    pub children: Vec<XmlTree>,
}

impl XmlTree {
    /// Parses a tree from an SVG string.
    ///
    /// Can contain an SVG fragment, not only a whole document.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let doc = roxmltree::Document::parse(text)?;
        Self::from_xmltree(&doc, opt)
    }

    /// Converts a parsed [`roxmltree::Document`] into a tree.
    pub fn from_xmltree(doc: &roxmltree::Document, opt: &Options) -> Result<Self, Error> {
        convert_element(doc.root_element(), opt, 0)
    }
}

fn convert_element(node: roxmltree::Node, opt: &Options, depth: u32) -> Result<XmlTree, Error> {
    if depth > 1024 {
        return Err(Error::ElementsLimitReached);
    }

    let mut attributes = Vec::new();
    for attr in node.attributes() {
        let name = match attribute_name(&attr) {
            Some(name) => name,
            None => continue,
        };

        // The check runs on the original name,
        // so it's independent from the renaming table.
        if name == "aria-hidden" && !opt.keep_aria_hidden {
            continue;
        }

        attributes.push((
            opt.attributes.get(&name).to_string(),
            attr.value().to_string(),
        ));
    }

    let mut children = Vec::new();
    for child in node.children() {
        if child.is_element() {
            children.push(convert_element(child, opt, depth + 1)?);
        } else if child.is_text() && !child.text().unwrap_or("").trim().is_empty() {
            log::warn!(
                "Text inside '{}' is not supported. Skipped.",
                node.tag_name().name()
            );
        }
    }

    Ok(XmlTree {
        tag: node.tag_name().name().to_string(),
        attributes,
        children,
    })
}

/// Reconstructs an attribute's prefixed name.
///
/// `roxmltree` hands us expanded names, while the renaming table
/// is keyed by the conventional `xlink:`/`xml:` spelling.
fn attribute_name(attr: &roxmltree::Attribute) -> Option<String> {
    match attr.namespace() {
        None => Some(attr.name().to_string()),
        Some(XLINK_NS) => Some(format!("xlink:{}", attr.name())),
        Some(XML_NS) => Some(format!("xml:{}", attr.name())),
        Some(_) => {
            log::warn!(
                "Attribute '{}' has an unsupported namespace. Skipped.",
                attr.name()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_is_stripped() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg'><path d='M0 0'/></svg>";
        let tree = XmlTree::from_str(svg, &Options::default()).unwrap();
        assert_eq!(tree.tag, "svg");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].tag, "path");
        assert_eq!(
            tree.children[0].attributes,
            [("d".to_string(), "M0 0".to_string())]
        );
    }

    #[test]
    fn attribute_order_is_preserved() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' stroke-width='2' fill='none'/>";
        let tree = XmlTree::from_str(svg, &Options::default()).unwrap();
        assert_eq!(
            tree.attributes,
            [
                ("strokeWidth".to_string(), "2".to_string()),
                ("fill".to_string(), "none".to_string()),
            ]
        );
    }

    #[test]
    fn aria_hidden_is_dropped_by_default() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' aria-hidden='true' fill='none'/>";
        let tree = XmlTree::from_str(svg, &Options::default()).unwrap();
        assert_eq!(
            tree.attributes,
            [("fill".to_string(), "none".to_string())]
        );
    }

    #[test]
    fn aria_hidden_is_kept_on_request() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' aria-hidden='true'/>";
        let opt = Options {
            keep_aria_hidden: true,
            ..Options::default()
        };
        let tree = XmlTree::from_str(svg, &opt).unwrap();
        assert_eq!(
            tree.attributes,
            [("aria-hidden".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn xlink_attribute_is_mapped() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' \
                   xmlns:xlink='http://www.w3.org/1999/xlink'>\
                   <use xlink:href='#a'/></svg>";
        let tree = XmlTree::from_str(svg, &Options::default()).unwrap();
        assert_eq!(
            tree.children[0].attributes,
            [("xlinkHref".to_string(), "#a".to_string())]
        );
    }

    #[test]
    fn text_content_is_skipped() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg'><title>Check</title></svg>";
        let tree = XmlTree::from_str(svg, &Options::default()).unwrap();
        assert_eq!(tree.children[0].tag, "title");
        assert!(tree.children[0].children.is_empty());
    }

    #[test]
    fn self_closing_equals_childless() {
        let opt = Options::default();
        let tree1 = XmlTree::from_str("<svg xmlns='http://www.w3.org/2000/svg'/>", &opt).unwrap();
        let tree2 =
            XmlTree::from_str("<svg xmlns='http://www.w3.org/2000/svg'></svg>", &opt).unwrap();
        assert_eq!(tree1, tree2);
    }

    #[test]
    fn malformed_xml() {
        let result = XmlTree::from_str("<svg", &Options::default());
        assert!(matches!(result, Err(Error::ParsingFailed(_))));
    }

    #[test]
    fn nesting_limit() {
        let mut svg = String::from("<svg xmlns='http://www.w3.org/2000/svg'>");
        svg.push_str(&"<g>".repeat(1030));
        svg.push_str(&"</g>".repeat(1030));
        svg.push_str("</svg>");

        let result = XmlTree::from_str(&svg, &Options::default());
        assert!(matches!(result, Err(Error::ElementsLimitReached)));
    }
}
