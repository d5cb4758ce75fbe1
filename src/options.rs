// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::AttributeMap;

/// Processing options.
#[derive(Debug)]
pub struct Options {
    /// The attribute renaming table applied during tree building.
    ///
    /// Default: the built-in SVG attributes table
    pub attributes: AttributeMap,

    /// Keep `aria-hidden` attributes in the generated trees.
    ///
    /// The gallery renders its own accessibility markup,
    /// so they are dropped by default.
    ///
    /// Default: false
    pub keep_aria_hidden: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            attributes: AttributeMap::default(),
            keep_aria_hidden: false,
        }
    }
}
