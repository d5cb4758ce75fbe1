// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

/// SVG attribute names and their Elm `Svg.Attributes` counterparts.
///
/// Covers the presentation attributes whose raw names are not valid
/// Elm identifiers. Must be sorted, since we binary search over it.
#[rustfmt::skip]
static SVG_ATTRIBUTES: &[(&str, &str)] = &[
    ("alignment-baseline",              "alignmentBaseline"),
    ("baseline-shift",                  "baselineShift"),
    ("clip-path",                       "clipPath"),
    ("clip-rule",                       "clipRule"),
    ("color-interpolation",             "colorInterpolation"),
    ("color-interpolation-filters",     "colorInterpolationFilters"),
    ("color-profile",                   "colorProfile"),
    ("color-rendering",                 "colorRendering"),
    ("dominant-baseline",               "dominantBaseline"),
    ("enable-background",               "enableBackground"),
    ("fill-opacity",                    "fillOpacity"),
    ("fill-rule",                       "fillRule"),
    ("flood-color",                     "floodColor"),
    ("flood-opacity",                   "floodOpacity"),
    ("font-family",                     "fontFamily"),
    ("font-size",                       "fontSize"),
    ("font-size-adjust",                "fontSizeAdjust"),
    ("font-stretch",                    "fontStretch"),
    ("font-style",                      "fontStyle"),
    ("font-variant",                    "fontVariant"),
    ("font-weight",                     "fontWeight"),
    ("glyph-orientation-horizontal",    "glyphOrientationHorizontal"),
    ("glyph-orientation-vertical",      "glyphOrientationVertical"),
    ("image-rendering",                 "imageRendering"),
    ("letter-spacing",                  "letterSpacing"),
    ("lighting-color",                  "lightingColor"),
    ("marker-end",                      "markerEnd"),
    ("marker-mid",                      "markerMid"),
    ("marker-start",                    "markerStart"),
    ("pointer-events",                  "pointerEvents"),
    ("shape-rendering",                 "shapeRendering"),
    ("stop-color",                      "stopColor"),
    ("stop-opacity",                    "stopOpacity"),
    ("stroke-dasharray",                "strokeDasharray"),
    ("stroke-dashoffset",               "strokeDashoffset"),
    ("stroke-linecap",                  "strokeLinecap"),
    ("stroke-linejoin",                 "strokeLinejoin"),
    ("stroke-miterlimit",               "strokeMiterlimit"),
    ("stroke-opacity",                  "strokeOpacity"),
    ("stroke-width",                    "strokeWidth"),
    ("text-anchor",                     "textAnchor"),
    ("text-decoration",                 "textDecoration"),
    ("text-rendering",                  "textRendering"),
    ("unicode-bidi",                    "unicodeBidi"),
    ("word-spacing",                    "wordSpacing"),
    ("writing-mode",                    "writingMode"),
    ("xlink:actuate",                   "xlinkActuate"),
    ("xlink:arcrole",                   "xlinkArcrole"),
    ("xlink:href",                      "xlinkHref"),
    ("xlink:role",                      "xlinkRole"),
    ("xlink:show",                      "xlinkShow"),
    ("xlink:title",                     "xlinkTitle"),
    ("xlink:type",                      "xlinkType"),
    ("xml:base",                        "xmlBase"),
    ("xml:lang",                        "xmlLang"),
    ("xml:space",                       "xmlSpace"),
];

/// A mapping from raw SVG attribute names to Elm-friendly ones.
///
/// Lookup is total: a name absent from the map is returned unchanged.
#[derive(Clone, Debug)]
pub struct AttributeMap {
    pairs: Vec<(String, String)>,
}

impl Default for AttributeMap {
    /// Returns the built-in SVG attributes table.
    fn default() -> Self {
        AttributeMap {
            pairs: SVG_ATTRIBUTES
                .iter()
                .map(|&(name, mapped)| (name.to_string(), mapped.to_string()))
                .collect(),
        }
    }
}

impl AttributeMap {
    /// Builds a map from an explicit list of pairs.
    ///
    /// Mainly for testing. The order of `pairs` doesn't matter.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut pairs: Vec<_> = pairs
            .iter()
            .map(|&(name, mapped)| (name.to_string(), mapped.to_string()))
            .collect();
        pairs.sort();
        AttributeMap { pairs }
    }

    /// Resolves a raw attribute name.
    ///
    /// Returns `name` itself when it's not in the map.
    pub fn get<'a>(&'a self, name: &'a str) -> &'a str {
        match self
            .pairs
            .binary_search_by(|(raw, _)| raw.as_str().cmp(name))
        {
            Ok(idx) => &self.pairs[idx].1,
            Err(_) => name,
        }
    }
}

/// Derives a camelCase Elm identifier from an icon's base name.
///
/// The name is split on hyphens. The first segment is used verbatim,
/// every later segment gets its first character uppercased.
/// Empty segments contribute nothing.
pub fn icon_ident(base_name: &str) -> String {
    let mut ident = String::with_capacity(base_name.len());
    for word in base_name.split('-').filter(|word| !word.is_empty()) {
        if ident.is_empty() {
            ident.push_str(word);
        } else if let Some(first) = word.chars().next() {
            ident.push(first.to_ascii_uppercase());
            ident.push_str(&word[first.len_utf8()..]);
        }
    }

    ident
}

/// Returns an icon's base name: the file name without directories
/// and without the extension.
///
/// Returns `None` when the path has no file name
/// or when it's not an UTF-8 string.
pub fn icon_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(std::ffi::OsStr::to_str)
}
