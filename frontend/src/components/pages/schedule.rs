use workout_planner::Route;
use yew::prelude::*;

use crate::components::day_detail_panel::DayDetailPanel;
use crate::components::schedule_calendar::ScheduleCalendar;
use crate::hooks::use_schedule::{use_schedule, UseScheduleResult};
use crate::services::navigation::navigate;

#[function_component(SchedulePage)]
pub fn schedule_page() -> Html {
    let UseScheduleResult { state, open_day } = use_schedule();
    let on_navigate = Callback::from(|route: Route| navigate(&route));
    let selected = state.detail.as_ref().map(|detail| detail.day_id);

    html! {
        <div class="schedule-page">
            <ScheduleCalendar
                title={state.title}
                grid={state.grid}
                {selected}
                on_select_day={open_day}
            />
            {for state.detail.map(|detail| html! {
                <DayDetailPanel {detail} {on_navigate} />
            })}
        </div>
    }
}
