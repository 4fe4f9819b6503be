/*!
 * Culture registry and culture-aware parsing.
 *
 * Number and date parsing honors the conventions of the configured source
 * culture (decimal separator, digit grouping, date field order), while all
 * output formatting uses a fixed invariant representation. The culture is
 * always passed explicitly into parsing calls; there is no process-wide
 * current-culture state, so concurrent pipelines with different cultures
 * cannot interfere.
 */

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::AppError;

/// Field order of a culture's short date pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// e.g. 06/15/2009 (en-US)
    MonthDayYear,
    /// e.g. 15/06/2009 (fr-FR) or 15.06.2009 (de-DE)
    DayMonthYear,
    /// e.g. 2009/06/15 (ja-JP)
    YearMonthDay,
}

/// Parsing conventions for one source culture.
///
/// Resolved once per run from the configured culture name and shared
/// read-only by every file pipeline.
#[derive(Debug, Clone)]
pub struct Culture {
    name: String,
    decimal_separator: char,
    group_separator: char,
    date_order: DateOrder,
    date_separator: char,
}

impl Culture {
    /// The invariant culture: dot decimal, comma grouping, month-first dates
    pub fn invariant() -> Self {
        Culture {
            name: String::new(),
            decimal_separator: '.',
            group_separator: ',',
            date_order: DateOrder::MonthDayYear,
            date_separator: '/',
        }
    }

    /// Look up the conventions for a culture name such as "fr-FR".
    ///
    /// Specific tags are matched first, then the bare language subtag
    /// ("fr" and "fr-CA" both get French conventions). The empty name is
    /// the invariant culture. Unknown names are an error so a misconfigured
    /// culture is caught before any file work starts.
    pub fn resolve(name: &str) -> Result<Self, AppError> {
        if name.is_empty() {
            return Ok(Self::invariant());
        }

        let tag = name.replace('_', "-");
        let language = tag
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (decimal, group, order, date_sep) = match tag.as_str() {
            // English cultures outside the US write day-first dates
            "en-GB" | "en-AU" | "en-NZ" | "en-IE" | "en-IN" | "en-ZA" => {
                ('.', ',', DateOrder::DayMonthYear, '/')
            }
            _ => match language.as_str() {
                "en" => ('.', ',', DateOrder::MonthDayYear, '/'),
                "fr" => (',', '\u{202f}', DateOrder::DayMonthYear, '/'),
                "de" => (',', '.', DateOrder::DayMonthYear, '.'),
                "ru" | "uk" | "pl" | "cs" | "fi" => (',', '\u{a0}', DateOrder::DayMonthYear, '.'),
                "es" | "it" | "pt" => (',', '.', DateOrder::DayMonthYear, '/'),
                "nl" => (',', '.', DateOrder::DayMonthYear, '-'),
                "sv" => (',', '\u{a0}', DateOrder::YearMonthDay, '-'),
                "ja" | "zh" | "ko" => ('.', ',', DateOrder::YearMonthDay, '/'),
                _ => return Err(AppError::UnknownCulture(name.to_string())),
            },
        };

        Ok(Culture {
            name: name.to_string(),
            decimal_separator: decimal,
            group_separator: group,
            date_order: order,
            date_separator: date_sep,
        })
    }

    /// Culture name as configured
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decimal separator character for this culture
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    // Cultures that group with a space accept the plain space, NBSP and
    // narrow NBSP interchangeably.
    fn is_group_separator(&self, c: char) -> bool {
        const SPACES: [char; 3] = [' ', '\u{a0}', '\u{202f}'];
        c == self.group_separator
            || (SPACES.contains(&self.group_separator) && SPACES.contains(&c))
    }

    /// Parse a floating-point number under this culture's conventions.
    ///
    /// Accepts an optional sign, digits with group separators in the integer
    /// part, the culture's decimal separator and an exponent. Anything else
    /// is a non-match, never an error.
    pub fn parse_f64(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }

        let mut normalized = String::with_capacity(text.len());
        let mut seen_digit = false;
        let mut seen_decimal = false;
        let mut seen_exponent = false;
        let mut previous: Option<char> = None;

        for c in text.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
                normalized.push(c);
            } else if c == self.decimal_separator && !seen_decimal && !seen_exponent {
                seen_decimal = true;
                normalized.push('.');
            } else if self.is_group_separator(c) && seen_digit && !seen_decimal && !seen_exponent {
                // grouping is only valid in the integer part and is dropped
            } else if (c == 'e' || c == 'E') && seen_digit && !seen_exponent {
                seen_exponent = true;
                normalized.push('e');
            } else if (c == '+' || c == '-')
                && (previous.is_none() || matches!(previous, Some('e') | Some('E')))
            {
                normalized.push(c);
            } else {
                return None;
            }
            previous = Some(c);
        }

        if !seen_digit {
            return None;
        }
        normalized.parse::<f64>().ok()
    }

    /// Parse a date or date-and-time under this culture's conventions.
    ///
    /// ISO 8601 forms are accepted for every culture; the culture determines
    /// the short-date field order and separator. A date without a time part
    /// gets midnight.
    pub fn parse_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        const ISO_DATE_TIME: [&str; 3] = [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        for format in ISO_DATE_TIME {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
                return Some(parsed);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }

        let sep = self.date_separator;
        let date_format = match self.date_order {
            DateOrder::MonthDayYear => format!("%m{sep}%d{sep}%Y"),
            DateOrder::DayMonthYear => format!("%d{sep}%m{sep}%Y"),
            DateOrder::YearMonthDay => format!("%Y{sep}%m{sep}%d"),
        };
        for time_format in ["%H:%M:%S", "%H:%M"] {
            let format = format!("{date_format} {time_format}");
            if let Ok(parsed) = NaiveDateTime::parse_from_str(text, &format) {
                return Some(parsed);
            }
        }
        NaiveDate::parse_from_str(text, &date_format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

/// Canonical invariant form of a date/time, independent of the source culture
pub fn format_date_time_invariant(value: &NaiveDateTime) -> String {
    value.format("%m/%d/%Y %H:%M:%S").to_string()
}

/// Canonical invariant form of a number (shortest round-trip representation)
pub fn format_f64_invariant(value: f64) -> String {
    format!("{}", value)
}
