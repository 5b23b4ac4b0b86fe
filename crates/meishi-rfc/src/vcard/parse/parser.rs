//! vCard document parser.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{parse_organization, parse_structured_name, unescape_text};
use crate::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Unfolds the input, splits it into logical lines, and parses every
/// `BEGIN:VCARD`..`END:VCARD` block found.
///
/// ## Errors
/// Returns a parse error if a block is malformed, unterminated, or
/// declares an unsupported version.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split logical lines");

    let mut parser = Parser::new(lines);
    let cards = parser.parse_document()?;

    tracing::debug!(count = cards.len(), "Parsed vCards");

    Ok(cards)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];

            if line.eq_ignore_ascii_case("BEGIN:VCARD") {
                self.pos += 1;
                cards.push(self.parse_vcard()?);
            } else {
                // Unknown content at top level is skipped
                self.pos += 1;
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let mut card = VCard::new();
        let start_line = self.current_line();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            let line_num = self.current_line();
            self.pos += 1;

            if line.trim().is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case("END:VCARD") {
                return Ok(card);
            }

            let content = parse_content_line(line, line_num)?;

            if content.name == "VERSION" {
                card.version = VCardVersion::from_str(&content.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content.value),
                    )
                })?;
            } else {
                card.add_property(convert_to_property(content));
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }
}

fn convert_to_property(line: ContentLine) -> VCardProperty {
    let value = parse_property_value(&line);

    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value: line.value,
    }
}

fn parse_property_value(line: &ContentLine) -> VCardValue {
    match line.name.as_str() {
        "N" => VCardValue::StructuredName(parse_structured_name(&line.value)),
        "ORG" => VCardValue::Organization(parse_organization(&line.value)),
        "URL" | "SOURCE" | "LOGO" => VCardValue::Uri(line.value.clone()),
        "PHOTO" => parse_photo(line),
        _ => VCardValue::Text(unescape_text(&line.value)),
    }
}

/// An inline PHOTO decodes to binary only when its parameters declare a
/// base64 encoding; anything else is treated as a URI reference.
fn parse_photo(line: &ContentLine) -> VCardValue {
    let declares_base64 = line.params.iter().any(|p| {
        p.name == "ENCODING"
            && p.values
                .iter()
                .any(|v| v.eq_ignore_ascii_case("b") || v.eq_ignore_ascii_case("base64"))
    });

    if declares_base64 {
        let compact: String = line.value.chars().filter(|c| !c.is_whitespace()).collect();
        match BASE64.decode(compact) {
            Ok(bytes) => VCardValue::Binary(bytes),
            Err(_) => VCardValue::Uri(line.value.clone()),
        }
    } else {
        VCardValue::Uri(line.value.clone())
    }
}
