// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svg2elm` converts a set of SVG icon files into a generated Elm module
for a UI icon gallery.

Each icon becomes one record holding the icon's name, its search tags,
a reference to a same-named rendering function and an `XmlTree` value
mirroring the icon's SVG structure. SVG attribute names are translated
into their Elm `Svg.Attributes` spellings along the way.

## Pipeline

1. [`Tags`] loads the icon name → search tags mapping from `tags.json`.
2. [`Gallery::from_files`] assembles one [`Icon`] per input file:
   the file's stem becomes the icon name and its camelCase identifier,
   the SVG content becomes an [`XmlTree`].
3. [`Gallery::to_string`] renders the whole module as Elm source code.

The transformation is deterministic and single-pass: the same inputs
always produce byte-identical output, and any failure aborts the run
before anything is written.

## Limitations

- Only the SVG subset used by hand-curated icon sets is handled.
  Text content, comments and processing instructions are skipped
- Icons sharing a base name produce colliding Elm identifiers.
  This is not guarded against
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod error;
mod gallery;
mod names;
mod options;
mod tags;
mod tree;
mod writer;

pub use error::Error;
pub use gallery::{Gallery, Icon};
pub use names::{icon_ident, icon_name, AttributeMap};
pub use options::Options;
pub use tags::Tags;
pub use tree::XmlTree;
pub use writer::{Indent, WriteOptions};

pub use roxmltree;
