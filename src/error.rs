// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to read an input file.
    Io(std::io::Error),

    /// We do not allow SVG trees nested deeper than 1024 elements.
    ElementsLimitReached,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),

    /// Failed to parse the search tags data.
    TagsParsingFailed(serde_json::Error),

    /// The search tags data is not a JSON object.
    InvalidTagsFormat,

    /// A search tags entry is not an array of strings.
    ///
    /// Contains the name of the offending entry.
    InvalidTagsEntry(String),

    /// An error that occurred while processing the specified file.
    InFile(std::path::PathBuf, Box<Error>),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::TagsParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::Io(ref e) => {
                write!(f, "reading failed cause {}", e)
            }
            Error::ElementsLimitReached => {
                write!(
                    f,
                    "the maximum number of nested SVG elements has been reached"
                )
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::TagsParsingFailed(ref e) => {
                write!(f, "tags data parsing failed cause {}", e)
            }
            Error::InvalidTagsFormat => {
                write!(f, "tags data is not a JSON object")
            }
            Error::InvalidTagsEntry(ref name) => {
                write!(f, "tags entry '{}' is not an array of strings", name)
            }
            Error::InFile(ref path, ref e) => {
                write!(f, "failed to process '{}' cause {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for Error {}
