//! vCard lexer: line unfolding and content-line parsing.
//!
//! A folded physical line continues the previous one when it starts
//! with a single space or tab; unfolding removes the line break and the
//! fold marker without inserting anything in their place.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::vcard::core::VCardParameter;

/// Unfolds a vCard document by removing line continuations.
///
/// Line endings are normalized to LF in the process; CRLF, bare LF, and
/// bare CR all terminate a logical line.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let line_break = match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                true
            }
            '\n' => true,
            _ => {
                out.push(c);
                false
            }
        };

        if line_break {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                // Continuation: drop the break and the fold marker
                chars.next();
            } else {
                out.push('\n');
            }
        }
    }

    out
}

/// Splits unfolded input into non-empty logical lines, merging any
/// continuations that survived unfolding.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push(continuation.to_string());
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns an error if the line has no colon separator, an invalid
/// property name, or a malformed parameter.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let name_part = &line[..colon];
    let value = &line[colon + 1..];

    let (group, name_part) = split_group(name_part);

    let (name, params_str) = match name_part.find(';') {
        Some(semi) => (&name_part[..semi], &name_part[semi + 1..]),
        None => (name_part, ""),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    Ok(ContentLine {
        group: group.map(str::to_string),
        name: name.to_ascii_uppercase(),
        params: parse_parameters(params_str, line_num)?,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from the value, skipping
/// colons inside quoted parameter values.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits off an optional group prefix.
fn split_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot) = s.find('.') {
        let group = &s[..dot];
        if !group.is_empty() && group.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return (Some(group), &s[dot + 1..]);
        }
    }
    (None, s)
}

fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut rest = s;

    while !rest.is_empty() {
        let eq = rest.find('=').ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                "missing = in parameter",
            )
        })?;
        let name = &rest[..eq];
        let (values, remaining) = parse_param_values(&rest[eq + 1..]);
        params.push(VCardParameter::multi(name, values));
        rest = remaining;
    }

    Ok(params)
}

/// Parses comma-separated, possibly quoted parameter values, decoding
/// RFC 6868 caret escapes. Returns the values and the unparsed tail
/// (the text after a parameter-separating semicolon).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            ';' if !in_quotes => {
                if !current.is_empty() || !values.is_empty() {
                    values.push(current);
                }
                return (values, &s[i + 1..]);
            }
            '^' if !in_quotes => match chars.peek().map(|&(_, next)| next) {
                Some('n') => {
                    chars.next();
                    current.push('\n');
                }
                Some('\'') => {
                    chars.next();
                    current.push('"');
                }
                Some('^') => {
                    chars.next();
                    current.push('^');
                }
                _ => current.push('^'),
            },
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !values.is_empty() {
        values.push(current);
    }

    (values, "")
}
