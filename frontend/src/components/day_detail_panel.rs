use workout_planner::domain::day_detail::SCHEDULE_WORKOUT_LABEL;
use workout_planner::domain::DayDetail;
use workout_planner::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayDetailPanelProps {
    pub detail: DayDetail,
    pub on_navigate: Callback<Route>,
}

#[function_component(DayDetailPanel)]
pub fn day_detail_panel(props: &DayDetailPanelProps) -> Html {
    let detail = &props.detail;
    let on_schedule = {
        let on_navigate = props.on_navigate.clone();
        let route = detail.schedule_route();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route))
    };

    html! {
        <div class="day-detail">
            <p class="day-id">{detail.heading()}</p>
            <button class="schedule-button" onclick={on_schedule}>{SCHEDULE_WORKOUT_LABEL}</button>
            <div class="day-workouts">
                {for detail.workouts.lines().iter().map(|line| html! {
                    <p class="day-workout" key={line.workout_id.to_string()}>{line.to_string()}</p>
                })}
                {for detail.workouts.message().map(|message| html! {
                    <p class="empty-state">{message}</p>
                })}
            </div>
        </div>
    }
}
