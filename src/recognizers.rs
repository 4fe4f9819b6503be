/*!
 * The recognizer set: three independent attempts to interpret a trimmed line.
 *
 * Each recognizer returns `Some(normalized)` on a match and `None` otherwise;
 * no recognizer ever panics or returns partial text. Ordering between them is
 * the dispatcher's concern, see [`crate::line_converter`].
 */

use crate::culture::{format_date_time_invariant, format_f64_invariant, Culture};

/// Try to read the line as a culture-aware date/time.
///
/// On success the value is reformatted in the invariant canonical form,
/// not the source culture's.
pub fn as_date_time(line: &str, culture: &Culture) -> Option<String> {
    culture
        .parse_date_time(line)
        .map(|parsed| format_date_time_invariant(&parsed))
}

/// Try to read the line as a floating-point number under the source culture's
/// decimal and grouping conventions, reformatted in the invariant form.
pub fn as_number(line: &str, culture: &Culture) -> Option<String> {
    culture.parse_f64(line).map(format_f64_invariant)
}

/// Try to read the line as a char-index instruction: an integer index
/// followed by a word, the result being the word's character at that index.
///
/// Fewer than two tokens, a non-integer first token or an out-of-bounds
/// index are all non-matches.
pub fn as_char_index(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let index_token = tokens.next()?;
    let word = tokens.next()?;

    // usize parsing rejects negative indexes outright
    let index: usize = index_token.parse().ok()?;
    word.chars().nth(index).map(|c| c.to_string())
}
