//! Minimal reader for Java-style `.properties` files

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::ParserError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse `key=value`, `key: value` and `key value` lines. `#` and `!`
    /// start comments; a trailing backslash continues the value on the next line.
    ///
    /// Keys and values are unescaped the way `java.util.Properties` writes
    /// them (`\:`, `\=`, `\ `, `\t`, `\n`, `\\`, `\uXXXX`).
    pub fn parse(content: &str) -> Result<Self, ParserError> {
        let mut entries = BTreeMap::new();
        let mut lines = content.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_odd_backslashes(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical)
                .map_err(|reason| ParserError::Invalid(format!("line {}: {reason}", index + 1)))?;
            if !key.is_empty() {
                entries.insert(key, value);
            }
        }

        Ok(Self { entries })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParserError> {
        let content = std::str::from_utf8(bytes)?;
        Self::parse(content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but treats blank values as missing
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    let backslashes = line.chars().rev().take_while(|c| *c == '\\').count();
    backslashes % 2 == 1
}

fn split_entry(line: &str) -> Result<(String, String), String> {
    let mut chars = line.chars().peekable();
    let mut key = Unescaper::default();
    let mut separator = None;

    while let Some(c) = chars.next() {
        match c {
            '\\' => key.escape(&mut chars)?,
            '=' | ':' => {
                separator = Some(c);
                break;
            }
            c if c.is_whitespace() => {
                separator = Some(' ');
                break;
            }
            c => key.push(c),
        }
    }

    skip_whitespace(&mut chars);
    if separator == Some(' ') && chars.next_if(|c| *c == '=' || *c == ':').is_some() {
        skip_whitespace(&mut chars);
    }

    let rest: String = chars.collect();
    let mut value = Unescaper::default();
    let mut chars = trim_value_end(&rest).chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.escape(&mut chars)?,
            c => value.push(c),
        }
    }

    Ok((key.finish(), value.finish()))
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Trailing whitespace is dropped unless its first character is escaped
fn trim_value_end(value: &str) -> &str {
    let trimmed = value.trim_end();
    if trimmed.len() < value.len() && ends_with_odd_backslashes(trimmed) {
        let escaped = value[trimmed.len()..].chars().next().map_or(0, char::len_utf8);
        &value[..trimmed.len() + escaped]
    } else {
        trimmed
    }
}

/// Accumulates decoded text. `\uXXXX` units are buffered so surrogate pairs
/// combine into one character.
#[derive(Default)]
struct Unescaper {
    text: String,
    units: Vec<u16>,
}

impl Unescaper {
    fn push(&mut self, c: char) {
        self.flush_units();
        self.text.push(c);
    }

    fn escape(&mut self, chars: &mut Peekable<Chars<'_>>) -> Result<(), String> {
        match chars.next() {
            Some('u') => {
                let digits: String = chars.by_ref().take(4).collect();
                let unit = (digits.len() == 4)
                    .then(|| u16::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .ok_or_else(|| format!("malformed \\uXXXX escape `\\u{digits}`"))?;
                self.units.push(unit);
            }
            Some('t') => self.push('\t'),
            Some('n') => self.push('\n'),
            Some('r') => self.push('\r'),
            Some('f') => self.push('\u{c}'),
            Some(other) => self.push(other),
            None => {}
        }
        Ok(())
    }

    fn flush_units(&mut self) {
        if !self.units.is_empty() {
            self.text.extend(
                char::decode_utf16(self.units.drain(..))
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
            );
        }
    }

    fn finish(mut self) -> String {
        self.flush_units();
        self.text
    }
}
