use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;

use time::Month;

use super::Error;

/// A calendar day as typed by the user, `dd-mm-yy` with the year taken as `20yy`.
///
/// The day is only checked against 1..=31, never against the length of the
/// month, so `31-02-24` is a valid `TaskDate`. That is why this is not a
/// `time::Date`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TaskDate {
  year: u16,
  month: Month,
  day: u8,
}

impl TaskDate {
  #[must_use]
  pub const fn year(self) -> u16 {
    self.year
  }

  #[must_use]
  pub const fn month(self) -> Month {
    self.month
  }

  #[must_use]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Renders the date the way it is typed and stored, e.g. `25-12-24`.
  #[must_use]
  pub fn to_short_string(self) -> String {
    format!(
      "{:02}-{:02}-{:02}",
      self.day,
      u8::from(self.month),
      self.year - 2000
    )
  }
}

fn numeric_field(field: &str) -> Option<u8> {
  if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  field.parse().ok()
}

impl FromStr for TaskDate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || Error::InvalidDate(s.to_owned());
    if s.len() != 8 {
      return Err(invalid());
    }
    let fields: Vec<_> = s.split('-').map(numeric_field).collect();
    let (day, month, year) = match fields.as_slice() {
      [Some(day), Some(month), Some(year)] => (*day, *month, *year),
      _ => return Err(invalid()),
    };
    if !(1..=31).contains(&day) || year > 99 {
      return Err(invalid());
    }
    let month = Month::try_from(month).map_err(|_| invalid())?;
    Ok(Self {
      year: 2000 + u16::from(year),
      month,
      day,
    })
  }
}

/// Human display format, e.g. `25 Dec 2024`.
impl Display for TaskDate {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    let month = self.month.to_string();
    write!(
      formatter,
      "{:02} {} {}",
      self.day,
      &month[..3],
      self.year
    )
  }
}
