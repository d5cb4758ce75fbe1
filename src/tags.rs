// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::path::Path;

use crate::Error;

/// A mapping from icon base names to their search tags.
///
/// Sourced from a JSON object of string arrays, usually `tags.json`:
///
/// ```json
/// {
///     "check": ["confirm", "ok"],
///     "arrow-left-circle": ["back", "previous"]
/// }
/// ```
///
/// Tag order within an entry is preserved.
/// An icon absent from the mapping simply has no tags.
#[derive(Clone, Debug, Default)]
pub struct Tags {
    map: HashMap<String, Vec<String>>,
}

impl Tags {
    /// Parses tags from a JSON string.
    ///
    /// The shape is validated explicitly: a non-object root produces
    /// [`Error::InvalidTagsFormat`] and an entry that is not an array
    /// of strings produces [`Error::InvalidTagsEntry`] naming the entry.
    pub fn from_str(text: &str) -> Result<Self, Error> {
        let root: serde_json::Value = serde_json::from_str(text)?;
        let object = root.as_object().ok_or(Error::InvalidTagsFormat)?;

        let mut map = HashMap::with_capacity(object.len());
        for (name, value) in object {
            let list = value
                .as_array()
                .ok_or_else(|| Error::InvalidTagsEntry(name.clone()))?;

            let mut tags = Vec::with_capacity(list.len());
            for tag in list {
                let tag = tag
                    .as_str()
                    .ok_or_else(|| Error::InvalidTagsEntry(name.clone()))?;
                tags.push(tag.to_string());
            }

            map.insert(name.clone(), tags);
        }

        Ok(Tags { map })
    }

    /// Loads tags from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let result = std::fs::read(path)
            .map_err(Error::Io)
            .and_then(|data| match std::str::from_utf8(&data) {
                Ok(text) => Self::from_str(text),
                Err(_) => Err(Error::NotAnUtf8Str),
            });

        result.map_err(|e| Error::InFile(path.to_path_buf(), Box::new(e)))
    }

    /// Returns the tags of the specified icon.
    ///
    /// Unknown icons produce an empty slice, not an error.
    pub fn get(&self, name: &str) -> &[String] {
        self.map.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
