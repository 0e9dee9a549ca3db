//! Widget configuration, read from a TOML document.

use anyhow::Context;
use chrono::{
  NaiveDate,
  Weekday
};
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::draft::{
  DateBounds,
  parse_input_date
};
use crate::grid::{
  DEFAULT_EVENTS_PER_DAY,
  GridOptions
};
use crate::month::{
  DEFAULT_HEADER_FORMAT,
  is_valid_format,
  parse_week_start
};

fn default_version() -> u32 {
  1
}

fn default_week_start() -> String {
  "sunday".to_string()
}

fn default_events_per_day() -> usize {
  DEFAULT_EVENTS_PER_DAY
}

fn default_min_date() -> String {
  "1970-01-01".to_string()
}

fn default_max_date() -> String {
  "2200-01-01".to_string()
}

fn default_header_format() -> String {
  DEFAULT_HEADER_FORMAT.to_string()
}

fn default_add_button() -> String {
  "Zametka qo'shish".to_string()
}

fn default_modal_title() -> String {
  "Yangi zametka qoshish".to_string()
}

fn default_title_field() -> String {
  "Mavzu".to_string()
}

fn default_date_field() -> String {
  "Sana".to_string()
}

fn default_cancel() -> String {
  "Bekor Qilish".to_string()
}

fn default_save() -> String {
  "Zametkani saqlash".to_string()
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarConfig {
  #[serde(default = "default_version")]
  pub version:  u32,
  #[serde(default)]
  pub policies: CalendarPolicies,
  #[serde(default)]
  pub entry:    EntryPolicies,
  #[serde(default)]
  pub labels:   CalendarLabels
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarPolicies {
  #[serde(default = "default_week_start")]
  pub week_start:     String,
  #[serde(
    default = "default_events_per_day"
  )]
  pub events_per_day: usize
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct EntryPolicies {
  #[serde(default = "default_min_date")]
  pub min_date: String,
  #[serde(default = "default_max_date")]
  pub max_date: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarLabels {
  #[serde(
    default = "default_header_format"
  )]
  pub header_format: String,
  #[serde(default = "default_add_button")]
  pub add_button:    String,
  #[serde(default = "default_modal_title")]
  pub modal_title:   String,
  #[serde(default = "default_title_field")]
  pub title_field:   String,
  #[serde(default = "default_date_field")]
  pub date_field:    String,
  #[serde(default = "default_cancel")]
  pub cancel:        String,
  #[serde(default = "default_save")]
  pub save:          String
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      version:  default_version(),
      policies: CalendarPolicies::default(),
      entry:    EntryPolicies::default(),
      labels:   CalendarLabels::default()
    }
  }
}

impl Default for CalendarPolicies {
  fn default() -> Self {
    Self {
      week_start:     default_week_start(),
      events_per_day:
        default_events_per_day()
    }
  }
}

impl Default for EntryPolicies {
  fn default() -> Self {
    Self {
      min_date: default_min_date(),
      max_date: default_max_date()
    }
  }
}

impl Default for CalendarLabels {
  fn default() -> Self {
    Self {
      header_format:
        default_header_format(),
      add_button:    default_add_button(),
      modal_title:   default_modal_title(),
      title_field:   default_title_field(),
      date_field:    default_date_field(),
      cancel:        default_cancel(),
      save:          default_save()
    }
  }
}

impl CalendarConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<CalendarConfig>(raw)
        .context(
          "failed to parse calendar \
           config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Parses `raw`, falling back to defaults when it is malformed.
  pub fn load_embedded(raw: &str) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          version = config.version,
          week_start = %config.policies.week_start,
          events_per_day = config.policies.events_per_day,
          "loaded calendar config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "failed parsing calendar config; using defaults");
        Self::default()
      }
    }
  }

  pub fn sanitize(&mut self) {
    if self
      .policies
      .week_start
      .trim()
      .is_empty()
    {
      self.policies.week_start =
        default_week_start();
    }

    if self.policies.events_per_day == 0
    {
      warn!(
        "events_per_day must be \
         positive; using default"
      );
      self.policies.events_per_day =
        default_events_per_day();
    }

    let min = parse_input_date(
      &self.entry.min_date
    );
    let max = parse_input_date(
      &self.entry.max_date
    );
    match (min, max) {
      | (Some(min), Some(max))
        if min <= max => {}
      | _ => {
        warn!(
          min = %self.entry.min_date,
          max = %self.entry.max_date,
          "invalid entry date bounds; \
           using defaults"
        );
        self.entry = EntryPolicies::default();
      }
    }

    let header_format =
      &self.labels.header_format;
    if header_format.trim().is_empty()
      || !is_valid_format(header_format)
    {
      warn!(
        header_format = %header_format,
        "invalid header format; using \
         default"
      );
      self.labels.header_format =
        default_header_format();
    }
  }

  pub fn week_start(&self) -> Weekday {
    parse_week_start(
      &self.policies.week_start
    )
  }

  pub fn grid_options(&self) -> GridOptions {
    GridOptions {
      week_start:     self.week_start(),
      events_per_day: self
        .policies
        .events_per_day
    }
  }

  pub fn date_bounds(&self) -> DateBounds {
    let fallback = DateBounds::default();
    DateBounds {
      min: bound_or(
        &self.entry.min_date,
        fallback.min
      ),
      max: bound_or(
        &self.entry.max_date,
        fallback.max
      )
    }
  }
}

fn bound_or(
  raw: &str,
  fallback: NaiveDate
) -> NaiveDate {
  parse_input_date(raw)
    .unwrap_or(fallback)
}
