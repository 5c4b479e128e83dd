use std::num::IntErrorKind;

use tracing::debug;

/// Number of leading fields a component line must carry.
pub const COMPONENT_FIELDS: usize = 6;

/// One whitespace-split component line, as read from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    fields: Vec<String>,
}

impl ComponentRecord {
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The six leading fields `(id, category, score, cost, spec1, spec2)`,
    /// or `None` when the line is too short. Extra fields are ignored.
    pub fn leading(&self) -> Option<[&str; COMPONENT_FIELDS]> {
        match self.fields.as_slice() {
            [id, category, score, cost, spec1, spec2, ..] => Some([
                id.as_str(),
                category.as_str(),
                score.as_str(),
                cost.as_str(),
                spec1.as_str(),
                spec2.as_str(),
            ]),
            _ => None,
        }
    }
}

/// Integer in `i64` syntax, saturating at the type's bounds.
///
/// Out-of-range values are still integers: they clamp to `i64::MAX` or
/// `i64::MIN` instead of failing. A leading `+` is accepted; digit
/// separators (`1_000`) are not.
pub fn parse_integer(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Strict integer parse for score and cost. Failure rejects the component.
///
/// Follows [`parse_integer`]: overflow saturates, and digit separators
/// such as `1_000` count as non-numeric.
pub fn parse_amount(raw: &str) -> Option<i64> {
    parse_integer(raw)
}

/// Lenient parse for tdp and wattage: non-numeric or negative becomes 0.
/// Values above `i64::MAX` saturate rather than coerce.
pub fn parse_rating(raw: &str) -> i64 {
    match parse_integer(raw) {
        Some(value) if value >= 0 => value,
        Some(value) => {
            debug!(value, "negative rating coerced to 0");
            0
        }
        None => {
            debug!(raw, "non-numeric rating coerced to 0");
            0
        }
    }
}
