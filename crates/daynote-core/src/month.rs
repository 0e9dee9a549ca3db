//! Month arithmetic used by the grid builder and the calendar state.
//!
//! Every helper is total: constructors that could fail fall back to a
//! neighbouring valid date instead of panicking.

use std::fmt::Write;

use chrono::format::{
  Item,
  StrftimeItems
};
use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};

pub const DEFAULT_HEADER_FORMAT: &str =
  "%B %Y";

const SUNDAY_FIRST_LABELS: [&str; 7] = [
  "Sun", "Mon", "Tue", "Wed", "Thu",
  "Fri", "Sat"
];

const MONDAY_FIRST_LABELS: [&str; 7] = [
  "Mon", "Tue", "Wed", "Thu", "Fri",
  "Sat", "Sun"
];

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

/// Latest date on or before `day` that falls on `week_start`.
pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

pub fn end_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    start_of_week(day, week_start),
    6
  )
}

/// Moves `date` by `months` calendar months. The day of month clamps
/// to the last valid day of the target month, so Jan 31 + 1 lands on
/// the last day of February.
pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let total = date.year() as i64 * 12
    + date.month0() as i64
    + months as i64;
  let year = total.div_euclid(12);
  let month =
    total.rem_euclid(12) as u32 + 1;
  let Ok(year) = i32::try_from(year)
  else {
    return date;
  };

  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn same_month(
  a: NaiveDate,
  b: NaiveDate
) -> bool {
  a.year() == b.year()
    && a.month() == b.month()
}

pub fn weekday_labels(
  week_start: Weekday
) -> [&'static str; 7] {
  match week_start {
    | Weekday::Sun => SUNDAY_FIRST_LABELS,
    | _ => MONDAY_FIRST_LABELS
  }
}

/// Accepts "sunday"/"monday" in any case; everything else is Sunday.
pub fn parse_week_start(
  raw: &str
) -> Weekday {
  if raw
    .trim()
    .eq_ignore_ascii_case("monday")
  {
    Weekday::Mon
  } else {
    Weekday::Sun
  }
}

/// True when every strftime specifier in `format` is recognised.
pub fn is_valid_format(
  format: &str
) -> bool {
  StrftimeItems::new(format)
    .all(|item| item != Item::Error)
}

/// Renders `date` with `format`. An unusable format falls back to
/// `DEFAULT_HEADER_FORMAT`.
pub fn month_label(
  date: NaiveDate,
  format: &str
) -> String {
  let format = if is_valid_format(format) {
    format
  } else {
    DEFAULT_HEADER_FORMAT
  };

  let mut label = String::new();
  if write!(label, "{}", date.format(format))
    .is_err()
  {
    label.clear();
    let _ = write!(
      label,
      "{}",
      date.format(DEFAULT_HEADER_FORMAT)
    );
  }
  label
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn month_bounds_cover_leap_february(
  ) {
    assert_eq!(
      last_day_of_month(2024, 2),
      ymd(2024, 2, 29)
    );
    assert_eq!(
      days_in_month(2023, 2),
      28
    );
    assert_eq!(
      last_day_of_month(2024, 12),
      ymd(2024, 12, 31)
    );
  }

  #[test]
  fn week_bounds_follow_week_start() {
    let friday = ymd(2024, 3, 1);
    assert_eq!(
      start_of_week(
        friday,
        Weekday::Sun
      ),
      ymd(2024, 2, 25)
    );
    assert_eq!(
      start_of_week(
        friday,
        Weekday::Mon
      ),
      ymd(2024, 2, 26)
    );
    assert_eq!(
      end_of_week(
        ymd(2024, 3, 31),
        Weekday::Sun
      ),
      ymd(2024, 4, 6)
    );
    let sunday = ymd(2024, 3, 31);
    assert_eq!(
      start_of_week(
        sunday,
        Weekday::Sun
      ),
      sunday
    );
  }

  #[test]
  fn shift_months_clamps_month_end() {
    assert_eq!(
      shift_months(ymd(2024, 1, 31), 1),
      ymd(2024, 2, 29)
    );
    assert_eq!(
      shift_months(ymd(2023, 1, 31), 1),
      ymd(2023, 2, 28)
    );
    assert_eq!(
      shift_months(
        ymd(2024, 3, 31),
        -1
      ),
      ymd(2024, 2, 29)
    );
  }

  #[test]
  fn shift_months_crosses_years() {
    assert_eq!(
      shift_months(
        ymd(2024, 12, 15),
        1
      ),
      ymd(2025, 1, 15)
    );
    assert_eq!(
      shift_months(
        ymd(2024, 1, 15),
        -1
      ),
      ymd(2023, 12, 15)
    );
    assert_eq!(
      shift_months(
        ymd(2024, 5, 10),
        -17
      ),
      ymd(2022, 12, 10)
    );
  }

  #[test]
  fn week_start_parsing_defaults_to_sunday(
  ) {
    assert_eq!(
      parse_week_start(" Monday "),
      Weekday::Mon
    );
    assert_eq!(
      parse_week_start("sunday"),
      Weekday::Sun
    );
    assert_eq!(
      parse_week_start(""),
      Weekday::Sun
    );
    assert_eq!(
      weekday_labels(Weekday::Sun)[0],
      "Sun"
    );
    assert_eq!(
      weekday_labels(Weekday::Mon)[6],
      "Sun"
    );
  }

  #[test]
  fn month_label_uses_format() {
    assert_eq!(
      month_label(
        ymd(2024, 3, 1),
        "%B %Y"
      ),
      "March 2024"
    );
  }

  #[test]
  fn unknown_specifier_falls_back_to_default(
  ) {
    assert!(is_valid_format("%d %b"));
    assert!(!is_valid_format("%Q"));
    assert_eq!(
      month_label(ymd(2024, 3, 1), "%Q"),
      "March 2024"
    );
  }
}
