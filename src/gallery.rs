// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::{names, writer, Error, Options, Tags, WriteOptions, XmlTree};

/// A single gallery icon.
#[derive(Clone, Debug)]
pub struct Icon {
    /// The icon's base name, e.g. `arrow-left-circle`.
    pub name: String,

    /// The derived Elm identifier, e.g. `arrowLeftCircle`.
    ///
    /// References a same-named rendering function in the gallery's
    /// `Heroicons` namespace. Existence is not validated.
    pub ident: String,

    /// Search tags. Can be empty.
    pub tags: Vec<String>,

    /// The icon's SVG tree.
    pub tree: XmlTree,
}

impl Icon {
    /// Assembles an icon from an SVG string.
    ///
    /// `name` is the icon's base name, without directories and extension.
    pub fn from_str(text: &str, name: &str, tags: &Tags, opt: &Options) -> Result<Self, Error> {
        let tree = XmlTree::from_str(text, opt)?;

        let icon_tags = tags.get(name);
        if icon_tags.is_empty() {
            log::warn!("Icon '{}' has no search tags.", name);
        }

        Ok(Icon {
            name: name.to_string(),
            ident: names::icon_ident(name),
            tags: icon_tags.to_vec(),
            tree,
        })
    }

    /// Assembles an icon from an SVG file.
    ///
    /// The icon's name is the file's stem.
    /// Any failure is wrapped into [`Error::InFile`] with the file's path.
    pub fn from_file(path: &Path, tags: &Tags, opt: &Options) -> Result<Self, Error> {
        let result = std::fs::read(path)
            .map_err(Error::Io)
            .and_then(|data| match std::str::from_utf8(&data) {
                Ok(text) => {
                    let name = names::icon_name(path).ok_or(Error::NotAnUtf8Str)?;
                    Self::from_str(text, name, tags, opt)
                }
                Err(_) => Err(Error::NotAnUtf8Str),
            });

        result.map_err(|e| Error::InFile(path.to_path_buf(), Box::new(e)))
    }
}

/// A complete icon gallery module.
#[derive(Clone, Debug)]
pub struct Gallery {
    /// The module's name, e.g. `Outline`.
    ///
    /// Used verbatim in the `Gallery.<Name>` module declaration
    /// and the `Heroicons.<Name>` import.
    pub name: String,

    /// The module's icons, in input order.
    pub icons: Vec<Icon>,
}

impl Gallery {
    /// Creates a gallery from already assembled icons.
    pub fn new(name: &str, icons: Vec<Icon>) -> Self {
        Gallery {
            name: name.to_string(),
            icons,
        }
    }

    /// Assembles a gallery from a list of SVG files.
    ///
    /// Files are processed in order and the first failure
    /// aborts the whole run.
    pub fn from_files(
        name: &str,
        paths: &[PathBuf],
        tags: &Tags,
        opt: &Options,
    ) -> Result<Self, Error> {
        let mut icons = Vec::with_capacity(paths.len());
        for path in paths {
            icons.push(Icon::from_file(path, tags, opt)?);
        }

        Ok(Gallery::new(name, icons))
    }

    /// Writes the gallery as Elm source code.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        writer::convert(self, opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_is_derived_from_the_name() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg'/>";
        let icon = Icon::from_str(
            svg,
            "arrow-left-circle",
            &Tags::default(),
            &Options::default(),
        )
        .unwrap();
        assert_eq!(icon.name, "arrow-left-circle");
        assert_eq!(icon.ident, "arrowLeftCircle");
    }

    #[test]
    fn missing_tags_are_not_an_error() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg'/>";
        let icon = Icon::from_str(svg, "check", &Tags::default(), &Options::default()).unwrap();
        assert!(icon.tags.is_empty());
    }

    #[test]
    fn tags_are_attached() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg'/>";
        let tags = Tags::from_str("{ \"check\": [\"confirm\", \"ok\"] }").unwrap();
        let icon = Icon::from_str(svg, "check", &tags, &Options::default()).unwrap();
        assert_eq!(icon.tags, ["confirm", "ok"]);
    }

    #[test]
    fn missing_file() {
        let result = Icon::from_file(
            Path::new("does-not-exist.svg"),
            &Tags::default(),
            &Options::default(),
        );
        match result {
            Err(Error::InFile(path, e)) => {
                assert_eq!(path, Path::new("does-not-exist.svg"));
                assert!(matches!(*e, Error::Io(_)));
            }
            _ => unreachable!(),
        }
    }
}
