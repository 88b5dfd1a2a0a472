//! JSON rendering for documents.
//!
//! Output is deterministic: object keys are sorted, so the same document
//! always renders to the same text regardless of map iteration order.
//!
//! # Examples
//!
//! ```
//! use shroud::Document;
//! use shroud::output::{to_json, to_json_pretty};
//!
//! let doc = Document::Array(vec![Document::Number(1.into()), Document::Null]);
//!
//! assert_eq!(to_json(&doc), "[1,null]");
//! assert_eq!(to_json_pretty(&doc), "[\n  1,\n  null\n]");
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::document::Document;

const INDENT: &str = "  ";

struct Renderer {
    pretty: bool,
    out: String,
}

impl Renderer {
    fn new(pretty: bool) -> Self {
        Renderer { pretty, out: String::new() }
    }

    fn finish(self) -> String {
        self.out
    }

    fn document(&mut self, doc: &Document, depth: usize) {
        match doc {
            Document::Null => self.out.push_str("null"),
            Document::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            // serde_json writes floats so that they parse back as floats
            Document::Number(n) => {
                let _ = write!(self.out, "{}", n);
            }
            Document::String(s) => self.string(s),
            Document::Array(items) => self.array(items, depth),
            Document::Object(map) => self.object(map, depth),
        }
    }

    fn string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn array(&mut self, items: &[Document], depth: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            self.separator(i, depth + 1);
            self.document(item, depth + 1);
        }
        self.close(']', depth);
    }

    fn object(&mut self, map: &HashMap<String, Document>, depth: usize) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        self.out.push('{');
        for (i, (key, value)) in entries.into_iter().enumerate() {
            self.separator(i, depth + 1);
            self.string(key);
            self.out.push_str(if self.pretty { ": " } else { ":" });
            self.document(value, depth + 1);
        }
        self.close('}', depth);
    }

    fn separator(&mut self, index: usize, depth: usize) {
        if index > 0 {
            self.out.push(',');
        }
        self.newline(depth);
    }

    fn close(&mut self, bracket: char, depth: usize) {
        self.newline(depth);
        self.out.push(bracket);
    }

    fn newline(&mut self, depth: usize) {
        if self.pretty {
            self.out.push('\n');
            self.out.push_str(&INDENT.repeat(depth));
        }
    }
}

/// Render a document as compact JSON.
pub fn to_json(doc: &Document) -> String {
    let mut renderer = Renderer::new(false);
    renderer.document(doc, 0);
    renderer.finish()
}

/// Render a document as JSON with two-space indentation.
pub fn to_json_pretty(doc: &Document) -> String {
    let mut renderer = Renderer::new(true);
    renderer.document(doc, 0);
    renderer.finish()
}
