//! Strict date/time parsing against `Y-m-d H:i:s`-style format strings.
//!
//! Format letters:
//!
//! | Letter | Input |
//! |---|---|
//! | `Y` | 4-digit year |
//! | `y` | 2-digit year (`70..=99` → 19xx, `00..=69` → 20xx) |
//! | `m` / `n` | month, 2 digits / 1–2 digits |
//! | `M` / `F` | month name, short (`Jan`) / full (`January`), any case |
//! | `d` / `j` | day of month, 2 digits / 1–2 digits |
//! | `D` / `l` | weekday name, short / full (not checked against the date) |
//! | `H` / `G` | 24-hour hour, 2 digits / 1–2 digits |
//! | `h` / `g` | 12-hour hour, 2 digits / 1–2 digits, needs `A` or `a` |
//! | `A` / `a` | `AM`/`PM`, any case |
//! | `i` / `s` | minutes / seconds, 2 digits |
//! | `U` | Unix timestamp, optionally signed |
//! | `?` | any single character |
//! | `!` / `\|` | reset markers, consume nothing |
//! | `\` | the next format character is literal |
//!
//! Any other format character must appear verbatim in the input. Missing date
//! parts default to `1970-01-01`, missing time parts to `00:00:00`.
use core::fmt::{self, Display};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Format used by [`Validator::date_time`](crate::Validator::date_time).
pub const DEFAULT_DATE_TIME_FORMAT: &str = "Y-m-d H:i:s";

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const WEEKDAYS: [&str; 7] =
    ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

/// Why an input did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeParseError {
    /// The input ended while the format still expected `expected`.
    UnexpectedEnd { expected: char },
    /// The input at byte `position` does not satisfy format character `expected`.
    Mismatch { position: usize, expected: char },
    /// Input remained after the whole format was consumed.
    TrailingData { position: usize },
    /// Every part parsed but they do not form a real date or time.
    OutOfRange,
}

impl Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "input ended while expecting `{expected}`")
            }
            Self::Mismatch { position, expected } => {
                write!(f, "input at byte {position} does not match `{expected}`")
            }
            Self::TrailingData { position } => write!(f, "trailing data at byte {position}"),
            Self::OutOfRange => f.write_str("the parsed date is invalid"),
        }
    }
}

impl std::error::Error for DateTimeParseError {}

#[derive(Default)]
struct Parts {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    timestamp: Option<i64>,
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn fail(&self, expected: char) -> DateTimeParseError {
        if self.pos >= self.input.len() {
            DateTimeParseError::UnexpectedEnd { expected }
        } else {
            DateTimeParseError::Mismatch { position: self.pos, expected }
        }
    }

    fn digits(&mut self, min: usize, max: usize, expected: char) -> Result<u32, DateTimeParseError> {
        let count = self.rest().bytes().take(max).take_while(u8::is_ascii_digit).count();
        if count < min {
            return Err(self.fail(expected));
        }
        let value = self.rest()[..count].parse().map_err(|_| self.fail(expected))?;
        self.pos += count;
        Ok(value)
    }

    // Optionally signed run of digits of any length.
    fn int(&mut self, expected: char) -> Result<i64, DateTimeParseError> {
        let rest = self.rest();
        let sign = usize::from(rest.starts_with(&['-', '+'][..]));
        let count = rest[sign..].bytes().take_while(u8::is_ascii_digit).count();
        if count == 0 {
            return Err(self.fail(expected));
        }
        let value = rest[..sign + count]
            .parse()
            .map_err(|_| DateTimeParseError::OutOfRange)?;
        self.pos += sign + count;
        Ok(value)
    }

    // First of `names` (or their 3-letter prefixes) found at the cursor, ignoring ASCII case.
    fn name(&mut self, names: &[&str], short: bool, expected: char) -> Result<usize, DateTimeParseError> {
        let rest = self.rest();
        for (index, &name) in names.iter().enumerate() {
            let candidate = if short { &name[..3] } else { name };
            if rest.len() >= candidate.len()
                && rest.is_char_boundary(candidate.len())
                && rest[..candidate.len()].eq_ignore_ascii_case(candidate)
            {
                self.pos += candidate.len();
                return Ok(index);
            }
        }
        Err(self.fail(expected))
    }

    fn literal(&mut self, expected: char) -> Result<(), DateTimeParseError> {
        match self.rest().chars().next() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            _ => Err(self.fail(expected)),
        }
    }
}

/// Parses `input` against `format`, rejecting leftovers and impossible dates.
///
/// # Examples
///
/// ```
/// use field_rail::validation::datetime::{parse_date_time, DateTimeParseError};
///
/// assert!(parse_date_time("2024-02-29 23:59:59", "Y-m-d H:i:s").is_ok());
/// assert_eq!(
///     parse_date_time("2023-02-29 00:00:00", "Y-m-d H:i:s"),
///     Err(DateTimeParseError::OutOfRange)
/// );
/// assert!(parse_date_time("2024-01-01 10:00:00 UTC", "Y-m-d H:i:s").is_err());
/// ```
pub fn parse_date_time(input: &str, format: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let mut parts = Parts::default();
    let mut cursor = Cursor { input, pos: 0 };
    let mut letters = format.chars();

    while let Some(c) = letters.next() {
        match c {
            'Y' => parts.year = Some(cursor.digits(4, 4, c)? as i32),
            'y' => {
                let yy = cursor.digits(2, 2, c)? as i32;
                parts.year = Some(if yy >= 70 { 1900 + yy } else { 2000 + yy });
            }
            'm' => parts.month = Some(cursor.digits(2, 2, c)?),
            'n' => parts.month = Some(cursor.digits(1, 2, c)?),
            'M' => parts.month = Some(cursor.name(&MONTHS, true, c)? as u32 + 1),
            'F' => parts.month = Some(cursor.name(&MONTHS, false, c)? as u32 + 1),
            'd' => parts.day = Some(cursor.digits(2, 2, c)?),
            'j' => parts.day = Some(cursor.digits(1, 2, c)?),
            'D' => {
                cursor.name(&WEEKDAYS, true, c)?;
            }
            'l' => {
                cursor.name(&WEEKDAYS, false, c)?;
            }
            'H' => parts.hour = Some(cursor.digits(2, 2, c)?),
            'G' => parts.hour = Some(cursor.digits(1, 2, c)?),
            'h' => parts.hour12 = Some(cursor.digits(2, 2, c)?),
            'g' => parts.hour12 = Some(cursor.digits(1, 2, c)?),
            'A' | 'a' => parts.pm = Some(cursor.name(&["am", "pm"], false, c)? == 1),
            'i' => parts.minute = Some(cursor.digits(2, 2, c)?),
            's' => parts.second = Some(cursor.digits(2, 2, c)?),
            'U' => parts.timestamp = Some(cursor.int(c)?),
            '?' => match cursor.rest().chars().next() {
                Some(any) => cursor.pos += any.len_utf8(),
                None => return Err(cursor.fail(c)),
            },
            '!' | '|' => {}
            '\\' => {
                let escaped = letters.next().unwrap_or('\\');
                cursor.literal(escaped)?;
            }
            other => cursor.literal(other)?,
        }
    }

    if cursor.pos < input.len() {
        return Err(DateTimeParseError::TrailingData { position: cursor.pos });
    }

    parts.build()
}

impl Parts {
    fn build(self) -> Result<NaiveDateTime, DateTimeParseError> {
        if let Some(ts) = self.timestamp {
            return DateTime::<Utc>::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc())
                .ok_or(DateTimeParseError::OutOfRange);
        }

        let hour = match (self.hour12, self.pm) {
            (Some(h), pm) if (1..=12).contains(&h) => Some(match pm {
                Some(true) => h % 12 + 12,
                _ => h % 12,
            }),
            (Some(_), _) => return Err(DateTimeParseError::OutOfRange),
            (None, Some(pm)) => self.hour.map(|h| if pm && h < 12 { h + 12 } else { h }),
            (None, None) => self.hour,
        };

        let date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(1970),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )
        .ok_or(DateTimeParseError::OutOfRange)?;
        let time = NaiveTime::from_hms_opt(
            hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
        )
        .ok_or(DateTimeParseError::OutOfRange)?;

        Ok(NaiveDateTime::new(date, time))
    }
}
