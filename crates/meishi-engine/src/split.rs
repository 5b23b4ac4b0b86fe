//! Splitting winning lines into Western and localized parts.
//!
//! Bilingual cards routinely put both scripts on one line; these
//! splitters partition a winning line and populate the matching
//! `ContactInfo` slots. A CJK-only name is promoted to the primary name
//! slots - the localized fields exist for the *second* script, not the
//! only one.

use meishi_core::types::ContactInfo;

use crate::lexicon::Lexicon;
use crate::script;

/// Splits a winning name line into first/last and localized first/last.
///
/// Whitespace tokens are routed by script: CJK-containing tokens build
/// the localized name, pure-letter tokens the Western name; anything
/// else (digits, punctuation runs) is dropped.
pub fn apply_name(lexicon: &Lexicon, contact: &mut ContactInfo, line: &str) {
    let mut cjk = String::new();
    let mut latin: Vec<&str> = Vec::new();

    for token in line.split_whitespace() {
        if token.chars().any(script::is_cjk) {
            cjk.push_str(token);
        } else if token.chars().all(char::is_alphabetic) {
            latin.push(token);
        }
    }

    if latin.len() >= 2 {
        contact.first_name = Some(latin[0].to_string());
        contact.last_name = Some(latin[1..].join(" "));
    } else if let [only] = latin.as_slice() {
        contact.first_name = Some((*only).to_string());
    }

    split_cjk_name(lexicon, contact, &cjk);

    // CJK-only input becomes the primary name, never the localized one
    if latin.is_empty() {
        contact.first_name = contact.localized_first_name.take();
        contact.last_name = contact.localized_last_name.take();
    }
}

/// Splits the CJK accumulator into localized family/given names, with
/// compound-surname detection.
fn split_cjk_name(lexicon: &Lexicon, contact: &mut ContactInfo, cjk: &str) {
    let chars: Vec<char> = cjk.chars().collect();

    match chars.len() {
        0 => {}
        1 => {
            contact.localized_last_name = Some(cjk.to_string());
        }
        _ => {
            let (family_len, family) = match lexicon.compound_surname(cjk) {
                Some(compound) => (2, compound.to_string()),
                None => (1, chars[0].to_string()),
            };

            contact.localized_last_name = Some(family);

            let given: String = chars[family_len..].iter().collect();
            if !given.is_empty() {
                contact.localized_first_name = Some(given);
            }
        }
    }
}

/// Splits a winning company line character-by-character into Western
/// and localized company names.
pub fn apply_company(contact: &mut ContactInfo, line: &str) {
    let (latin, cjk) = partition_chars(line);

    if !latin.is_empty() {
        contact.company = Some(latin);
    }
    if !cjk.is_empty() {
        contact.localized_company = Some(cjk);
    }
}

/// Splits a winning title line token-by-token into Western and
/// localized titles.
pub fn apply_title(contact: &mut ContactInfo, line: &str) {
    let mut latin: Vec<&str> = Vec::new();
    let mut cjk = String::new();

    for token in line.split_whitespace() {
        if token.chars().any(script::is_cjk) {
            cjk.push_str(token);
        } else {
            latin.push(token);
        }
    }

    if !latin.is_empty() {
        contact.title = Some(latin.join(" "));
    }
    if !cjk.is_empty() {
        contact.localized_title = Some(cjk);
    }
}

/// Partitions a line's characters by script, trimming both halves.
fn partition_chars(line: &str) -> (String, String) {
    let mut latin = String::new();
    let mut cjk = String::new();

    for c in line.chars() {
        if script::is_cjk(c) {
            cjk.push(c);
        } else {
            latin.push(c);
        }
    }

    (latin.trim().to_string(), cjk.trim().to_string())
}
