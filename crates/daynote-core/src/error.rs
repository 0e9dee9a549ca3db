//! Errors raised while turning an entry draft into an event.

use chrono::NaiveDate;
use thiserror::Error;

/// Why an entry draft cannot be saved yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
  #[error("title is required")]
  EmptyTitle,

  #[error("date is required")]
  MissingDate,

  #[error("invalid date '{raw}', expected yyyy-mm-dd")]
  InvalidDate { raw: String },

  #[error("date {date} is outside {min}..={max}")]
  OutOfRange {
    date: NaiveDate,
    min:  NaiveDate,
    max:  NaiveDate
  }
}

pub type DraftResult<T> =
  Result<T, DraftError>;
