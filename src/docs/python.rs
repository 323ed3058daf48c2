//! Static extraction of a documentation literal from Python module source.

use tracing::warn;

use super::{DocBlock, MetadataExtractor};

/// Name of the module-level assignment holding the documentation YAML.
const DEFAULT_VARIABLE: &str = "DOCUMENTATION";

/// Extracts `NAME = "..."` string assignments from Python source text.
///
/// Only top-level (column 0) assignments are considered. The right-hand side
/// may be any combination of prefixed, triple-quoted or single-line string
/// literals, optionally wrapped in parentheses for implicit concatenation.
#[derive(Debug, Clone)]
pub struct PythonDocExtractor {
    variable: String,
}

impl PythonDocExtractor {
    /// Creates an extractor for a custom assignment name.
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self { variable: variable.into() }
    }

    /// Returns the raw string value assigned to the configured name.
    #[must_use]
    pub fn find_literal(&self, source: &str) -> Option<String> {
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            if let Some(rhs) = assignment_rhs(line, &self.variable) {
                let start = offset + (line.len() - rhs.len());
                return Scanner::new(source, start).string_expression();
            }
            offset += line.len();
        }
        None
    }
}

impl Default for PythonDocExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE)
    }
}

impl MetadataExtractor for PythonDocExtractor {
    fn extract(&self, source: &str) -> Option<DocBlock> {
        let text = self.find_literal(source)?;
        match DocBlock::from_yaml(&text) {
            Ok(doc) => Some(doc),
            Err(err) => {
                warn!("ignoring {} block: {err}", self.variable);
                None
            }
        }
    }
}

/// Returns the text following `name =` when `line` is a top-level assignment.
fn assignment_rhs<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?;
    let rest = rest.trim_start_matches([' ', '\t']);
    let rest = rest.strip_prefix('=')?;
    if rest.starts_with('=') {
        return None;
    }
    Some(rest)
}

/// Cursor over Python source positioned at the start of an expression.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips spaces and tabs, plus newlines and comments when `multiline`.
    fn skip_blank(&mut self, multiline: bool) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\x0c' => {
                    self.bump();
                }
                '\\' if self.rest()[1..].starts_with('\n') => {
                    self.pos += 2;
                }
                '\n' | '\r' if multiline => {
                    self.bump();
                }
                '#' if multiline => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Parses one or more adjacent string literals, optionally parenthesized.
    fn string_expression(&mut self) -> Option<String> {
        self.skip_blank(false);
        let parenthesized = self.peek() == Some('(');
        if parenthesized {
            self.bump();
        }

        let mut value = String::new();
        let mut found = false;
        loop {
            self.skip_blank(parenthesized);
            match self.string_literal() {
                Some(part) => {
                    value.push_str(&part);
                    found = true;
                }
                None => break,
            }
        }

        if parenthesized {
            self.skip_blank(true);
            if self.bump() != Some(')') {
                return None;
            }
        }
        found.then_some(value)
    }

    /// Parses a single string literal at the cursor, restoring it on failure.
    fn string_literal(&mut self) -> Option<String> {
        let start = self.pos;
        let prefix: String =
            self.rest().chars().take_while(char::is_ascii_alphabetic).take(3).collect();
        if prefix.len() > 2 || !prefix.chars().all(|c| "rRuUbB".contains(c)) {
            return None;
        }
        self.pos += prefix.len();
        let raw = prefix.contains(['r', 'R']);

        let Some(quote @ ('"' | '\'')) = self.peek() else {
            self.pos = start;
            return None;
        };
        let triple = quote.to_string().repeat(3);
        let delimiter = if self.rest().starts_with(&triple) { triple } else { quote.to_string() };
        self.pos += delimiter.len();

        let body_start = self.pos;
        loop {
            if self.rest().starts_with(&delimiter) {
                let body = &self.src[body_start..self.pos];
                self.pos += delimiter.len();
                return Some(if raw { body.to_string() } else { unescape(body) });
            }
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('\n') if delimiter.len() == 1 => break,
                Some(_) => {}
                None => break,
            }
        }
        self.pos = start;
        None
    }
}

/// Decodes the backslash escapes of a non-raw Python string body.
///
/// Unknown escapes keep their backslash, as Python does.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('\n') => {}
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
