use shared::DayId;
use wasm_bindgen_futures::spawn_local;
use workout_planner::pages::SelectWorkoutPage;
use yew::prelude::*;

use super::{render_checkboxes, render_content};
use crate::hooks::use_page_model::use_page_model;
use crate::hooks::use_planner::use_planner;
use crate::services::notifier::BrowserNotifier;

#[derive(Properties, PartialEq)]
pub struct SelectWorkoutViewProps {
    pub day_id: Option<DayId>,
}

#[function_component(SelectWorkoutView)]
pub fn select_workout_view(props: &SelectWorkoutViewProps) -> Html {
    let planner = use_planner();
    let model = use_page_model({
        let day_id = props.day_id;
        move || SelectWorkoutPage::new(day_id)
    });

    {
        let model = model.clone();
        let api = planner.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                SelectWorkoutPage::load(&model, &api, &BrowserNotifier).await;
            });
            || ()
        });
    }

    let on_toggle = planner.toggle_callback(model.clone(), SelectWorkoutPage::checkboxes_mut);
    let page = model.read();

    html! {
        <div class="select-workout-page">
            <h2>{"Select Workouts"}</h2>
            <div id="workouts-container">
                {render_content(page.content(), |list| render_checkboxes(list, &on_toggle, |_| html! {}))}
            </div>
        </div>
    }
}
