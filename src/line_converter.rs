/*!
 * The line dispatcher: ordered, fallible, multi-format conversion.
 */

use crate::culture::Culture;
use crate::errors::ConvertError;
use crate::recognizers;

/// Convert one prepared line into its normalized textual form.
///
/// Recognizers run in fixed priority order: date/time, then number, then
/// char-index instruction. The first match wins and the remaining
/// recognizers are not tried. A line matching none of the three fails with
/// [`ConvertError::UnrecognizedLine`], which is fatal to the enclosing
/// file's conversion.
pub fn convert_line(line: &str, culture: &Culture) -> Result<String, ConvertError> {
    if let Some(normalized) = recognizers::as_date_time(line, culture) {
        return Ok(normalized);
    }
    if let Some(normalized) = recognizers::as_number(line, culture) {
        return Ok(normalized);
    }
    if let Some(normalized) = recognizers::as_char_index(line) {
        return Ok(normalized);
    }
    Err(ConvertError::UnrecognizedLine(line.to_string()))
}

/// Prefix a normalized line with its own character count
pub fn length_prefixed(normalized: &str) -> String {
    format!("{} {}", normalized.chars().count(), normalized)
}
