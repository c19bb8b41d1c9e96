#![forbid(unsafe_code)]

//! Textual list notation for tables and breakpoints.
//!
//! Configuration files and designer tooling store a [`PercentageTable`] or
//! [`BreakFlagTable`] as five values and a [`Breakpoints`] as four, in the
//! fixed order ExtraSmall, Small, Medium, Large(, ExtraLarge):
//!
//! ```text
//! 100, 50, 33.5, 25, 25
//! ```
//!
//! The list separator and decimal mark depend on the locale. Formatting joins
//! values with `"{separator} "`; parsing splits on the separator and trims
//! each token, so both `"1,2"` and `"1, 2"` are accepted.

use std::fmt;
use std::str::FromStr;

use crate::{BreakFlagTable, Breakpoint, Breakpoints, PercentageTable};

/// Field names for five-bucket tables.
const TABLE_FIELDS: &[&str] = &[
    Breakpoint::Xs.field_name(),
    Breakpoint::Sm.field_name(),
    Breakpoint::Md.field_name(),
    Breakpoint::Lg.field_name(),
    Breakpoint::Xl.field_name(),
];

/// Field names for breakpoint thresholds (no upper bound for ExtraLarge).
const THRESHOLD_FIELDS: &[&str] = &[
    Breakpoint::Xs.field_name(),
    Breakpoint::Sm.field_name(),
    Breakpoint::Md.field_name(),
    Breakpoint::Lg.field_name(),
];

/// Locale-dependent separators for list notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListFormat {
    /// Separator between values.
    pub separator: char,
    /// Decimal mark inside fractional values.
    pub decimal: char,
}

impl ListFormat {
    /// Comma-separated, decimal point.
    pub const INVARIANT: Self = Self::new(',', '.');

    /// Semicolon-separated, decimal comma (most continental European locales).
    pub const SEMICOLON_DECIMAL_COMMA: Self = Self::new(';', ',');

    pub const fn new(separator: char, decimal: char) -> Self {
        Self { separator, decimal }
    }
}

impl Default for ListFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Error from parsing list notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseListError {
    /// Wrong number of values.
    TokenCount {
        input: String,
        expected: usize,
        found: usize,
        fields: &'static [&'static str],
    },
    /// A value could not be parsed.
    InvalidToken {
        token: String,
        field: &'static str,
    },
}

impl fmt::Display for ParseListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount {
                input,
                expected,
                found,
                fields,
            } => write!(
                f,
                "cannot parse {input:?}: expected {expected} values ({}), found {found}",
                fields.join(", ")
            ),
            Self::InvalidToken { token, field } => {
                write!(f, "invalid value {token:?} for {field}")
            }
        }
    }
}

impl std::error::Error for ParseListError {}

/// A single value in list notation.
pub trait ListItem: Copy {
    fn format_item(self, format: ListFormat) -> String;
    fn parse_item(token: &str, format: ListFormat) -> Option<Self>;
}

impl ListItem for f32 {
    fn format_item(self, format: ListFormat) -> String {
        let text = self.to_string();
        if format.decimal == '.' {
            text
        } else {
            text.replace('.', &format.decimal.to_string())
        }
    }

    fn parse_item(token: &str, format: ListFormat) -> Option<Self> {
        let normalised = if format.decimal == '.' {
            token.to_owned()
        } else {
            token.replace(format.decimal, ".")
        };
        normalised.parse().ok()
    }
}

impl ListItem for i32 {
    fn format_item(self, _format: ListFormat) -> String {
        self.to_string()
    }

    fn parse_item(token: &str, _format: ListFormat) -> Option<Self> {
        token.parse().ok()
    }
}

impl ListItem for bool {
    fn format_item(self, _format: ListFormat) -> String {
        self.to_string()
    }

    fn parse_item(token: &str, _format: ListFormat) -> Option<Self> {
        if token.eq_ignore_ascii_case("true") {
            Some(true)
        } else if token.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

/// Types with a fixed-length list notation.
pub trait ListNotation: Sized {
    type Item: ListItem;

    /// Field names in notation order; its length is the token count.
    const FIELDS: &'static [&'static str];

    /// Values in notation order.
    fn items(&self) -> Vec<Self::Item>;

    /// Build from exactly `FIELDS.len()` values.
    fn from_items(items: &[Self::Item]) -> Self;

    /// Render in list notation.
    fn format_list(&self, format: ListFormat) -> String {
        let separator = format!("{} ", format.separator);
        self.items()
            .into_iter()
            .map(|item| item.format_item(format))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Parse list notation. Blank input yields `Ok(None)`.
    fn parse_list(input: &str, format: ListFormat) -> Result<Option<Self>, ParseListError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let tokens: Vec<&str> = trimmed.split(format.separator).map(str::trim).collect();
        if tokens.len() != Self::FIELDS.len() {
            return Err(ParseListError::TokenCount {
                input: trimmed.to_owned(),
                expected: Self::FIELDS.len(),
                found: tokens.len(),
                fields: Self::FIELDS,
            });
        }

        let items = tokens
            .iter()
            .zip(Self::FIELDS)
            .map(|(token, field)| {
                <Self::Item as ListItem>::parse_item(token, format).ok_or_else(|| {
                    ParseListError::InvalidToken {
                        token: (*token).to_owned(),
                        field: *field,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self::from_items(&items)))
    }
}

impl ListNotation for PercentageTable {
    type Item = f32;
    const FIELDS: &'static [&'static str] = TABLE_FIELDS;

    fn items(&self) -> Vec<f32> {
        self.values().to_vec()
    }

    fn from_items(items: &[f32]) -> Self {
        Self::new(items[0], items[1], items[2], items[3], items[4])
    }
}

impl ListNotation for BreakFlagTable {
    type Item = bool;
    const FIELDS: &'static [&'static str] = TABLE_FIELDS;

    fn items(&self) -> Vec<bool> {
        self.values().to_vec()
    }

    fn from_items(items: &[bool]) -> Self {
        Self::new(items[0], items[1], items[2], items[3], items[4])
    }
}

impl ListNotation for Breakpoints {
    type Item = i32;
    const FIELDS: &'static [&'static str] = THRESHOLD_FIELDS;

    fn items(&self) -> Vec<i32> {
        vec![self.xs(), self.sm(), self.md(), self.lg()]
    }

    fn from_items(items: &[i32]) -> Self {
        Self::new(items[0], items[1], items[2], items[3])
    }
}

/// `FromStr` in the invariant format; blank input is a token-count error.
fn parse_invariant<T: ListNotation>(input: &str) -> Result<T, ParseListError> {
    T::parse_list(input, ListFormat::INVARIANT)?.ok_or_else(|| ParseListError::TokenCount {
        input: String::new(),
        expected: T::FIELDS.len(),
        found: 0,
        fields: T::FIELDS,
    })
}

macro_rules! impl_text_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.format_list(ListFormat::INVARIANT))
                }
            }

            impl FromStr for $ty {
                type Err = ParseListError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_invariant(s)
                }
            }
        )*
    };
}

impl_text_traits!(PercentageTable, BreakFlagTable, Breakpoints);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_table_invariant_round_trip() {
        let table = PercentageTable::new(100.0, 50.0, 33.5, 25.0, 25.0);
        let text = table.to_string();
        assert_eq!(text, "100, 50, 33.5, 25, 25");
        assert_eq!(text.parse::<PercentageTable>(), Ok(table));
    }

    #[test]
    fn percentage_table_with_decimal_comma() {
        let format = ListFormat::SEMICOLON_DECIMAL_COMMA;
        let table = PercentageTable::new(12.5, 50.0, 50.0, 50.0, 50.0);
        assert_eq!(table.format_list(format), "12,5; 50; 50; 50; 50");

        let parsed = PercentageTable::parse_list(" 12,5 ;50;50; 50 ;50 ", format);
        assert_eq!(parsed, Ok(Some(table)));
    }

    #[test]
    fn parsed_values_are_clamped() {
        let table: PercentageTable = "150, -5, 50, 50, 50".parse().expect("five values");
        assert_eq!(table.values(), [100.0, 0.0, 50.0, 50.0, 50.0]);
    }

    #[test]
    fn blank_input_is_none() {
        assert_eq!(
            PercentageTable::parse_list("   ", ListFormat::INVARIANT),
            Ok(None)
        );
        assert!("".parse::<PercentageTable>().is_err());
    }

    #[test]
    fn wrong_token_count_names_the_fields() {
        let err = "1, 2, 3, 4"
            .parse::<PercentageTable>()
            .expect_err("four values");
        assert_eq!(
            err,
            ParseListError::TokenCount {
                input: "1, 2, 3, 4".to_owned(),
                expected: 5,
                found: 4,
                fields: TABLE_FIELDS,
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot parse \"1, 2, 3, 4\": expected 5 values \
             (ExtraSmall, Small, Medium, Large, ExtraLarge), found 4"
        );
    }

    #[test]
    fn invalid_token_reports_field() {
        let err = "1, 2, x, 4, 5"
            .parse::<PercentageTable>()
            .expect_err("x is not a number");
        assert_eq!(
            err,
            ParseListError::InvalidToken {
                token: "x".to_owned(),
                field: "Medium",
            }
        );
        assert_eq!(err.to_string(), "invalid value \"x\" for Medium");
    }

    #[test]
    fn break_flags_round_trip() {
        let flags = BreakFlagTable::only(Breakpoint::Md);
        assert_eq!(flags.to_string(), "false, false, true, false, false");
        let parsed: BreakFlagTable = "FALSE, false, True, false, false".parse().expect("bools");
        assert_eq!(parsed, flags);
        assert!("false, false, yes, false, false".parse::<BreakFlagTable>().is_err());
    }

    #[test]
    fn breakpoints_use_four_values() {
        assert_eq!(Breakpoints::BOOTSTRAP.to_string(), "576, 768, 992, 1200");
        let parsed: Breakpoints = "600, 968, 1280, 1920".parse().expect("four values");
        assert_eq!(parsed, Breakpoints::MATERIAL);

        let err = "576, 768, 992, 1200, 1400"
            .parse::<Breakpoints>()
            .expect_err("five values");
        assert!(err.to_string().contains("expected 4 values"));
    }

    #[test]
    fn parsed_breakpoints_are_repaired() {
        let parsed: Breakpoints = "800, 700, 900, 1000".parse().expect("four values");
        assert!(parsed.xs() < parsed.sm());
        assert_eq!((parsed.xs(), parsed.sm()), (699, 700));
    }
}
