// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Gallery, Icon, XmlTree};

/// An indent mode for the generated code.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Indent {
    /// Collapse the `model` binding onto a single line.
    None,
    /// Indent with the specified number of spaces.
    Spaces(u8),
    /// Indent with tabs.
    Tabs,
}

/// Elm writing options.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Set the generated code indent.
    ///
    /// # Examples
    ///
    /// `Indent::None`
    /// Before:
    ///
    /// ```text
    /// model =
    ///     [ { name = "check", ... }
    ///     ]
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// model = [ { name = "check", ... } ]
    /// ```
    ///
    /// Default: 4 spaces
    pub indent: Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: Indent::Spaces(4),
        }
    }
}

pub(crate) fn convert(gallery: &Gallery, opt: &WriteOptions) -> String {
    let mut w = ElmWriter::new(opt.indent);

    w.out.push_str("module Gallery.");
    w.out.push_str(&gallery.name);
    w.out.push_str(" exposing (model)\n\nimport Heroicons.");
    w.out.push_str(&gallery.name);
    w.out.push_str(" exposing (..)\nimport Gallery exposing (Icon, XmlTree(..))");
    w.out.push_str("\n\n\nmodel : List (Icon a)\n");

    w.write_model(gallery);

    w.out
}

/// The Elm pretty-printer.
///
/// Purely mechanical: every semantic decision (attribute renaming,
/// attribute filtering, identifier derivation) has already been made
/// by the time a [`Gallery`] reaches it.
struct ElmWriter {
    out: String,
    indent: String,
    flat: bool,
}

impl ElmWriter {
    fn new(indent: Indent) -> Self {
        let (flat, indent) = match indent {
            Indent::None => (true, String::new()),
            Indent::Spaces(n) => (false, " ".repeat(n as usize)),
            Indent::Tabs => (false, "\t".to_string()),
        };

        ElmWriter {
            out: String::with_capacity(4096),
            indent,
            flat,
        }
    }

    /// Starts a new line indented `level` levels deep.
    ///
    /// In flat mode lines are joined with single spaces instead.
    fn new_line(&mut self, level: usize) {
        if self.flat {
            self.out.push(' ');
        } else {
            self.out.push('\n');
            for _ in 0..level {
                self.out.push_str(&self.indent);
            }
        }
    }

    fn write_model(&mut self, gallery: &Gallery) {
        self.out.push_str("model =");

        if gallery.icons.is_empty() {
            self.new_line(1);
            self.out.push_str("[]\n");
            return;
        }

        for (i, icon) in gallery.icons.iter().enumerate() {
            self.new_line(1);
            self.out.push_str(if i == 0 { "[ " } else { ", " });
            self.write_icon(icon);
        }
        self.new_line(1);
        self.out.push_str("]\n");
    }

    fn write_icon(&mut self, icon: &Icon) {
        self.out.push_str("{ name = ");
        self.push_quoted(&icon.name);
        self.out.push_str(", tags = ");
        self.push_tags(&icon.tags);
        self.out.push_str(", viewIcon = ");
        self.out.push_str(&icon.ident);
        self.out.push_str(", tree = ");
        self.write_tree(&icon.tree, 1);
        self.out.push_str(" }");
    }

    fn write_tree(&mut self, tree: &XmlTree, level: usize) {
        self.out.push_str("XmlTree {");

        self.new_line(level + 1);
        self.out.push_str("tag = ");
        self.push_quoted(&tree.tag);
        self.out.push(',');

        self.new_line(level + 1);
        self.out.push_str("attributes = ");
        self.push_attributes(&tree.attributes);
        self.out.push(',');

        self.new_line(level + 1);
        if tree.children.is_empty() {
            self.out.push_str("children = []");
        } else {
            self.out.push_str("children = [");
            for (i, child) in tree.children.iter().enumerate() {
                self.new_line(level + 2);
                self.write_tree(child, level + 2);
                if i + 1 != tree.children.len() {
                    self.out.push(',');
                }
            }
            self.new_line(level + 1);
            self.out.push(']');
        }

        self.new_line(level);
        self.out.push('}');
    }

    fn push_attributes(&mut self, attributes: &[(String, String)]) {
        self.out.push('[');
        for (i, (name, value)) in attributes.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push('(');
            self.push_quoted(name);
            self.out.push_str(", ");
            self.push_quoted(value);
            self.out.push(')');
        }
        self.out.push(']');
    }

    fn push_tags(&mut self, tags: &[String]) {
        self.out.push('[');
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.push_quoted(tag);
        }
        self.out.push(']');
    }

    /// Writes an escaped Elm string literal.
    fn push_quoted(&mut self, text: &str) {
        self.out.push('"');
        for c in text.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                _ if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{{{:04X}}}", c as u32));
                }
                _ => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}
