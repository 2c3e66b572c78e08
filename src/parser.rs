//! Tokenizing parser for free-text transfer instructions
//!
//! Two grammars are accepted, keywords case-insensitive:
//!
//! ```text
//! DEBIT <amount> <currency> FROM ACCOUNT <id> FOR CREDIT TO ACCOUNT <id> [ON <date>]
//! CREDIT <amount> <currency> TO ACCOUNT <id> FOR DEBIT FROM ACCOUNT <id> [ON <date>]
//! ```
//!
//! Keywords are located one after the other, each search starting right
//! after the previous hit, so the two `ACCOUNT`s bind to the right slots.
//! Values are cut out of the original-case text between keyword pairs.
use super::error::ParseError;
use super::types::{DraftTransfer, TransferType};

const DEBIT_FORM: [&str; 7] = ["DEBIT", "FROM", "ACCOUNT", "FOR", "CREDIT", "TO", "ACCOUNT"];
const CREDIT_FORM: [&str; 7] = ["CREDIT", "TO", "ACCOUNT", "FOR", "DEBIT", "FROM", "ACCOUNT"];
const DATE_KEYWORD: &str = "ON";

// byte range of a keyword hit, valid in both the normalized and upper-cased text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

/// Collapse every run of whitespace into a single space and trim the ends
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an instruction into a draft transfer.
///
/// Nothing about the values is checked here beyond their token shape; that is
/// the validator's job.
pub fn parse_instruction(instruction: &str) -> Result<DraftTransfer, ParseError> {
    let normalized = normalize(instruction);
    if normalized.is_empty() {
        return Err(ParseError::Malformed("instruction is empty".into()));
    }
    // ascii-only so byte offsets line up with `normalized`
    let upper = normalized.to_ascii_uppercase();

    let transfer_type = match upper.split(' ').next() {
        Some("DEBIT") => TransferType::Debit,
        Some("CREDIT") => TransferType::Credit,
        _ => return Err(ParseError::MissingKeyword("DEBIT or CREDIT")),
    };
    let sequence = match transfer_type {
        TransferType::Debit => &DEBIT_FORM,
        TransferType::Credit => &CREDIT_FORM,
    };

    let spans = locate_keywords(&upper, sequence)?;
    if let Some(i) = (1..spans.len()).find(|&i| spans[i].start < spans[i - 1].end) {
        return Err(ParseError::KeywordOrder(sequence[i]));
    }
    let on = find_word(&upper, DATE_KEYWORD, spans[6].end);

    let segment = slice(&normalized, spans[0].end, spans[1].start)?;
    let tokens: Vec<&str> = segment.split(' ').filter(|t| !t.is_empty()).collect();
    let &[amount, currency] = tokens.as_slice() else {
        return Err(ParseError::Malformed(format!(
            "expected '<amount> <currency>' after {}, found '{}'",
            transfer_type.keyword(),
            segment.trim()
        )));
    };

    let first_id = slice(&normalized, spans[2].end, spans[3].start)?.trim();
    let second_end = on.map_or(normalized.len(), |span| span.start);
    let second_id = slice(&normalized, spans[6].end, second_end)?.trim();
    let execute_on = match on {
        Some(span) => Some(slice(&normalized, span.end, normalized.len())?.trim().to_string()),
        None => None,
    };

    let (debit_account_id, credit_account_id) = match transfer_type {
        TransferType::Debit => (first_id, second_id),
        TransferType::Credit => (second_id, first_id),
    };

    Ok(DraftTransfer {
        transfer_type,
        amount: amount.to_string(),
        currency: currency.to_ascii_uppercase(),
        debit_account_id: debit_account_id.to_string(),
        credit_account_id: credit_account_id.to_string(),
        execute_on,
    })
}

// Walk the grammar, each keyword searched from the end of the one before it.
// Any keyword missing from its search offset onwards is SY01.
fn locate_keywords(upper: &str, sequence: &[&'static str]) -> Result<Vec<Span>, ParseError> {
    let mut spans = Vec::with_capacity(sequence.len());
    let mut offset = 0;

    for &keyword in sequence {
        let span = find_word(upper, keyword, offset).ok_or(ParseError::MissingKeyword(keyword))?;
        offset = span.end;
        spans.push(span);
    }

    Ok(spans)
}

// Whole-word search; `haystack` is already single-space separated
fn find_word(haystack: &str, word: &str, from: usize) -> Option<Span> {
    let tail = haystack.get(from..)?;
    let bytes = haystack.as_bytes();

    tail.match_indices(word)
        .map(|(i, _)| Span {
            start: from + i,
            end: from + i + word.len(),
        })
        .find(|span| {
            let open = span.start == 0 || bytes[span.start - 1] == b' ';
            let close = span.end == bytes.len() || bytes[span.end] == b' ';
            open && close
        })
}

fn slice(text: &str, start: usize, end: usize) -> Result<&str, ParseError> {
    text.get(start..end)
        .ok_or_else(|| ParseError::Malformed(format!("no text between offsets {start} and {end}")))
}
