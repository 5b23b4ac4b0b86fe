//! vCard line folding.

/// Maximum line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a line to the maximum length by inserting CRLF + space at
/// UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;

    for c in line.chars() {
        let width = c.len_utf8();
        if width > budget {
            folded.push_str("\r\n ");
            // Continuation lines lose one octet to the fold marker
            budget = MAX_LINE_OCTETS - 1;
        }
        folded.push(c);
        budget -= width;
    }

    folded
}
