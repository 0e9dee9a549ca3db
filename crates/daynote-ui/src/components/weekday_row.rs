use chrono::Weekday;
use daynote_core::month::weekday_labels;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WeekdayRowProps {
  pub week_start: Weekday
}

#[function_component(WeekdayRow)]
pub fn weekday_row(
  props: &WeekdayRowProps
) -> Html {
  html! {
      <div class="calendar-weekday-row">
          {
              for weekday_labels(props.week_start).into_iter().map(|label| html! {
                  <div class="calendar-weekday">{ label }</div>
              })
          }
      </div>
  }
}
