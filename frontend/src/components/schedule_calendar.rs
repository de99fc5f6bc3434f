use shared::{DayId, ScheduleCell, ScheduleGrid};
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct ScheduleCalendarProps {
    pub title: String,
    pub grid: std::rc::Rc<ScheduleGrid>,
    pub selected: Option<DayId>,
    pub on_select_day: Callback<DayId>,
}

#[function_component(ScheduleCalendar)]
pub fn schedule_calendar(props: &ScheduleCalendarProps) -> Html {
    let cell = |cell: &ScheduleCell| match cell {
        &ScheduleCell::MonthDay { day, day_id } => {
            let class = if props.selected == Some(day_id) {
                "calendar-day selected"
            } else {
                "calendar-day"
            };
            let on_select_day = props.on_select_day.clone();
            html! {
                <td class={class}
                    data-day-id={day_id.to_string()}
                    onclick={Callback::from(move |_: MouseEvent| on_select_day.emit(day_id))}>
                    {day}
                </td>
            }
        }
        _ => html! { <td class="calendar-day empty"></td> },
    };

    html! {
        <div class="calendar">
            <h2 class="calendar-title">{&props.title}</h2>
            <table class="calendar-grid">
                <thead>
                    <tr>
                        {for WEEKDAYS.iter().map(|day| html! { <th class="weekday">{*day}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for props.grid.rows.iter().map(|row| html! {
                        <tr>{for row.iter().map(&cell)}</tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
