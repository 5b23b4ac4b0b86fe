//! Line scoring and category assignment.
//!
//! Every line that survives field extraction and the address filter is
//! scored as a company, person-name, and job-title candidate on fixed
//! 0-100 scales. The highest score tags the line; tagged lines compete
//! greedily for one winner per category.

use crate::lexicon::Lexicon;
use crate::script;

/// Upper bound on every category score.
const SCORE_CAP: i32 = 100;

/// The category a line can win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    /// Company / organization name.
    Company,
    /// Personal name.
    Name,
    /// Job title.
    Title,
}

/// A line tagged with its best category and score.
#[derive(Debug, Clone)]
pub struct ScoredLine {
    /// The line text, trimmed.
    pub text: String,
    /// The winning category for this line.
    pub category: LineCategory,
    /// The winning score, in `1..=100`.
    pub score: u32,
}

/// The per-category winners of a classification pass.
#[derive(Debug, Clone, Default)]
pub struct Winners {
    /// Winning company line, if any.
    pub company: Option<String>,
    /// Winning person-name line, if any.
    pub name: Option<String>,
    /// Winning job-title line, if any.
    pub title: Option<String>,
}

/// Scores a line as a company-name candidate.
#[must_use]
pub fn company_score(lexicon: &Lexicon, line: &str) -> u32 {
    let mut score = 0i32;

    if lexicon.has_legal_suffix(line) {
        score += 80;
    }
    if lexicon.has_industry_keyword(line) {
        score += 30;
    }
    if line.chars().count() > 10 {
        score += 10;
    }
    if has_uppercase_word(line) {
        score += 15;
    }

    clamp_score(score)
}

/// Scores a line as a person-name candidate.
///
/// Branches on the dominant script: short CJK lines score on stripped
/// character count and a surname check; Latin lines score on word count
/// and title-casing. Long lines are penalized in either branch.
#[must_use]
pub fn name_score(lexicon: &Lexicon, line: &str) -> u32 {
    if script::letter_count(line) == 0 {
        return 0;
    }

    let mut score = 0i32;

    if script::is_primarily_cjk(line) {
        let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let len = stripped.chars().count();

        if (2..=4).contains(&len) {
            score += 60;
        } else if len == 5 {
            score += 30;
        }

        if !line
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '@' | '.' | '-' | '/'))
        {
            score += 20;
        }

        if stripped.chars().next().is_some_and(|c| lexicon.is_surname(c)) {
            score += 20;
        }
    } else {
        let words: Vec<&str> = line.split_whitespace().collect();

        if (2..=4).contains(&words.len()) {
            score += 50;
        }
        if !words.is_empty() && words.iter().all(|w| is_title_case(w)) {
            score += 30;
        }
        if !lexicon.has_legal_suffix(line) {
            score += 10;
        }
    }

    if line.chars().count() > 30 {
        score -= 30;
    }

    clamp_score(score)
}

/// Scores a line as a job-title candidate.
#[must_use]
pub fn title_score(lexicon: &Lexicon, line: &str) -> u32 {
    let mut score = 0i32;

    if lexicon.has_title_keyword(line) {
        score += 70;
    }
    if line.contains(" of ") || line.contains(" at ") {
        score += 20;
    }

    let len = line.chars().count();
    if len > 3 && len < 40 {
        score += 10;
    }

    clamp_score(score)
}

/// Tags each line with its best-scoring category.
///
/// Lines whose best score is zero are unclassifiable and dropped. Ties
/// between categories resolve company > name > title.
#[must_use]
pub fn classify_lines(lexicon: &Lexicon, lines: &[&str]) -> Vec<ScoredLine> {
    lines
        .iter()
        .filter_map(|line| {
            // Candidate order is the tie-break order
            let candidates = [
                (LineCategory::Company, company_score(lexicon, line)),
                (LineCategory::Name, name_score(lexicon, line)),
                (LineCategory::Title, title_score(lexicon, line)),
            ];

            let mut best = candidates[0];
            for candidate in &candidates[1..] {
                if candidate.1 > best.1 {
                    best = *candidate;
                }
            }

            let (category, score) = best;
            if score == 0 {
                return None;
            }

            Some(ScoredLine {
                text: (*line).to_string(),
                category,
                score,
            })
        })
        .collect()
}

/// Assigns winners greedily: tagged lines sorted by descending score,
/// the first line of each category takes that category; later lines of
/// an already-won category are ignored.
#[must_use]
pub fn assign_winners(mut scored: Vec<ScoredLine>) -> Winners {
    // Stable sort keeps input order among equal scores
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut winners = Winners::default();

    for line in scored {
        let slot = match line.category {
            LineCategory::Company => &mut winners.company,
            LineCategory::Name => &mut winners.name,
            LineCategory::Title => &mut winners.title,
        };
        if slot.is_none() {
            *slot = Some(line.text);
        }
    }

    winners
}

/// Returns whether the line contains an all-uppercase alphabetic word
/// of at least two characters.
fn has_uppercase_word(line: &str) -> bool {
    line.split_whitespace().any(|word| {
        word.chars().count() >= 2 && word.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
    })
}

/// First letter uppercase, remaining letters lowercase.
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(|c| c.is_lowercase()),
        None => false,
    }
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(0, SCORE_CAP).unsigned_abs()
}
