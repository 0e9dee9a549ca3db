use std::rc::Rc;

use chrono::{
  Local,
  NaiveDate
};
use daynote_core::{
  CalendarAction,
  CalendarConfig,
  CalendarState,
  EntryOutcome
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  function_component,
  html,
  use_reducer,
  use_state
};

use crate::components::{
  CalendarHeader,
  EntryModal,
  MonthGrid
};
use crate::logging::ui_debug;

const CALENDAR_CONFIG_TOML: &str =
  include_str!("../assets/calendar.toml");

/// Reducer wrapper so every state change goes through
/// `CalendarState::apply`.
#[derive(Clone, PartialEq)]
struct CalendarStore {
  state: CalendarState
}

impl Reducible for CalendarStore {
  type Action = CalendarAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    next.state.apply(action);
    Rc::new(next)
  }
}

fn local_today() -> NaiveDate {
  Local::now().date_naive()
}

fn load_calendar_config()
-> CalendarConfig {
  CalendarConfig::load_embedded(
    CALENDAR_CONFIG_TOML
  )
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_calendar_config);
  let store = use_reducer(|| {
    CalendarStore {
      state: CalendarState::new(
        local_today()
      )
    }
  });

  let today = local_today();
  let state = &store.state;
  let grid_options =
    config.grid_options();
  let days = state.grid(&grid_options);
  let header = state.header_label_with(
    &config.labels.header_format
  );

  let on_prev = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.prev.click",
        "previous month"
      );
      store.dispatch(
        CalendarAction::PrevMonth
      );
    })
  };

  let on_next = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.next.click",
        "next month"
      );
      store.dispatch(
        CalendarAction::NextMonth
      );
    })
  };

  let on_today = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      store.dispatch(
        CalendarAction::Today(
          local_today()
        )
      );
    })
  };

  let on_open_day = {
    let store = store.clone();
    Callback::from(
      move |day: NaiveDate| {
        ui_debug(
          "cell.click",
          &day.to_string()
        );
        store.dispatch(
          CalendarAction::OpenDay(day)
        );
      }
    )
  };

  let on_add_click = {
    let store = store.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.add.click",
        "open entry form for today"
      );
      store.dispatch(
        CalendarAction::OpenToday(
          local_today()
        )
      );
    })
  };

  let on_outcome = {
    let store = store.clone();
    Callback::from(
      move |outcome: EntryOutcome| {
        store.dispatch(outcome.into());
      }
    )
  };

  html! {
      <div class="page">
          <div class="panel calendar">
              <CalendarHeader
                  label={header}
                  on_prev={on_prev}
                  on_today={on_today}
                  on_next={on_next}
              />
              <MonthGrid
                  days={days}
                  week_start={grid_options.week_start}
                  today={today}
                  on_open_day={on_open_day}
              />
              <button type="button" class="btn btn-primary add-note" onclick={on_add_click}>
                  { config.labels.add_button.clone() }
              </button>
          </div>
          {
              if state.modal_open {
                  html! {
                      <EntryModal
                          selected_date={state.modal_date(today)}
                          bounds={config.date_bounds()}
                          labels={config.labels.clone()}
                          on_outcome={on_outcome}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
