use chrono::{
  Datelike,
  NaiveDate
};
use daynote_core::CalendarDay;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
  pub day:      CalendarDay,
  pub is_today: bool,
  pub on_open:  Callback<NaiveDate>
}

#[function_component(DayCell)]
pub fn day_cell(
  props: &DayCellProps
) -> Html {
  let day = &props.day;
  let date = day.date;
  let onclick = {
    let on_open = props.on_open.clone();
    Callback::from(move |_: MouseEvent| {
      on_open.emit(date)
    })
  };

  html! {
      <button
          type="button"
          class={classes!(
              "calendar-day-cell",
              (!day.is_current_month).then_some("outside"),
              props.is_today.then_some("today"),
              (!day.events.is_empty()).then_some("has-notes")
          )}
          onclick={onclick}
      >
          <div class="calendar-day-label">{ date.day() }</div>
          <div class="calendar-notes">
              {
                  for day.events.iter().map(|event| html! {
                      <div key={event.id.to_string()} class="note-chip" title={event.title.clone()}>
                          { event.title.clone() }
                      </div>
                  })
              }
          </div>
      </button>
  }
}
