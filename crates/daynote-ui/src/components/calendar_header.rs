use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarHeaderProps {
  pub label:    String,
  pub on_prev:  Callback<MouseEvent>,
  pub on_today: Callback<MouseEvent>,
  pub on_next:  Callback<MouseEvent>
}

#[function_component(CalendarHeader)]
pub fn calendar_header(
  props: &CalendarHeaderProps
) -> Html {
  html! {
      <div class="header calendar-header">
          <h2 class="calendar-title">{ props.label.clone() }</h2>
          <div class="actions calendar-nav-actions">
              <button class="btn icon" aria-label="previous month" onclick={props.on_prev.clone()}>{ "‹" }</button>
              <button class="btn" onclick={props.on_today.clone()}>{ "Today" }</button>
              <button class="btn icon" aria-label="next month" onclick={props.on_next.clone()}>{ "›" }</button>
          </div>
      </div>
  }
}
