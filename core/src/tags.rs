#![deny(missing_docs)]

//! # Struct Tags
//!
//! Parser for the Go struct tag mini-language:
//! `key:"name,opt1,opt2" other:"value"`.
//!
//! The parse result is an ordered map from key to [`Tag`]. When a key
//! appears more than once the first occurrence wins, matching how tag
//! lookups behave at runtime.

use derive_more::Display;
use indexmap::IndexMap;

/// Reasons a tag string is rejected.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TagSyntaxError {
    /// A key is empty or contains a forbidden byte.
    #[display("bad syntax for struct tag key")]
    Key,
    /// A key is not followed by `:`.
    #[display("bad syntax for struct tag pair")]
    Pair,
    /// A value is not a well-formed double-quoted string.
    #[display("bad syntax for struct tag value")]
    Value,
}

impl std::error::Error for TagSyntaxError {}

/// One `key:"value"` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// The tag key, e.g. `mapstructure`.
    pub key: String,
    /// The first comma-separated element of the value.
    pub name: String,
    /// The remaining comma-separated elements.
    pub options: Vec<String>,
}

impl Tag {
    /// Full value with the options joined back on, e.g. `name,squash`.
    pub fn value(&self) -> String {
        if self.options.is_empty() {
            return self.name.clone();
        }
        let mut value = self.name.clone();
        for option in &self.options {
            value.push(',');
            value.push_str(option);
        }
        value
    }
}

/// Ordered collection of the entries of one tag string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTags {
    tags: IndexMap<String, Tag>,
}

impl StructTags {
    /// Parses the content of a tag, without the surrounding quotes.
    pub fn parse(tag: &str) -> Result<Self, TagSyntaxError> {
        let mut tags = IndexMap::new();
        let mut rest = tag.as_bytes();

        loop {
            let skip = rest.iter().take_while(|b| **b == b' ').count();
            rest = &rest[skip..];
            if rest.is_empty() {
                break;
            }

            // A space, a quote or a control character ends the key.
            let key_len = rest
                .iter()
                .take_while(|b| **b > b' ' && **b != b':' && **b != b'"' && **b != 0x7f)
                .count();
            if key_len == 0 {
                return Err(TagSyntaxError::Key);
            }
            if key_len + 1 >= rest.len() || rest[key_len] != b':' {
                return Err(TagSyntaxError::Pair);
            }
            if rest[key_len + 1] != b'"' {
                return Err(TagSyntaxError::Value);
            }
            let key = String::from_utf8_lossy(&rest[..key_len]).into_owned();
            rest = &rest[key_len + 1..];

            let mut i = 1;
            while i < rest.len() && rest[i] != b'"' {
                if rest[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= rest.len() {
                return Err(TagSyntaxError::Value);
            }
            let quoted = std::str::from_utf8(&rest[..=i]).map_err(|_| TagSyntaxError::Value)?;
            rest = &rest[i + 1..];

            let value = unquote(quoted).ok_or(TagSyntaxError::Value)?;
            let mut parts = value.split(',').map(str::to_string);
            let name = parts.next().unwrap_or_default();
            let options = parts.collect();

            tags.entry(key.clone()).or_insert(Tag { key, name, options });
        }

        Ok(Self { tags })
    }

    /// Decodes a tag literal as it appears in source (backquoted or
    /// double-quoted) and parses its content.
    pub fn from_literal(literal: &str) -> Result<Self, TagSyntaxError> {
        Self::parse(&decode_literal(literal)?)
    }

    /// Looks up the entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    /// True when the tag had no entries.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Strips the quoting from a Go string literal.
///
/// Raw strings keep their content verbatim except for carriage returns;
/// interpreted strings go through [`unquote`].
pub fn decode_literal(literal: &str) -> Result<String, TagSyntaxError> {
    if let Some(raw) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return Ok(raw.replace('\r', ""));
    }
    unquote(literal).ok_or(TagSyntaxError::Value)
}

/// Unquotes a Go double-quoted string literal.
///
/// Returns `None` for anything `strconv.Unquote` would reject: missing
/// quotes, raw newlines, unknown escapes, or invalid code points.
pub fn unquote(quoted: &str) -> Option<String> {
    let body = quoted.strip_prefix('"')?.strip_suffix('"')?;
    if body.contains('\n') {
        return None;
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => {
                let escape = chars.next()?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => out.push(u8::try_from(hex_digits(&mut chars, 2)?).ok()?),
                    'u' => push_char(&mut out, char::from_u32(hex_digits(&mut chars, 4)?)?),
                    'U' => push_char(&mut out, char::from_u32(hex_digits(&mut chars, 8)?)?),
                    '0'..='7' => {
                        let mut value = escape.to_digit(8)?;
                        for _ in 0..2 {
                            value = value * 8 + chars.next()?.to_digit(8)?;
                        }
                        out.push(u8::try_from(value).ok()?);
                    }
                    _ => return None,
                }
            }
            _ => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).ok()
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
