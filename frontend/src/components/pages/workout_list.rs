use shared::WorkoutId;
use wasm_bindgen_futures::spawn_local;
use workout_planner::pages::{WorkoutCard, WorkoutListPage};
use yew::prelude::*;

use super::render_content;
use crate::hooks::use_page_model::use_page_model;
use crate::hooks::use_planner::use_planner;
use crate::services::navigation::navigate;
use crate::services::notifier::BrowserNotifier;

#[function_component(WorkoutListView)]
pub fn workout_list_view() -> Html {
    let planner = use_planner();
    let model = use_page_model(WorkoutListPage::new);

    {
        let model = model.clone();
        let api = planner.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                WorkoutListPage::load(&model, &api, &BrowserNotifier).await;
            });
            || ()
        });
    }

    let on_delete = {
        let model = model.clone();
        let api = planner.api.clone();
        Callback::from(move |workout_id: WorkoutId| {
            let model = model.clone();
            let api = api.clone();
            spawn_local(async move {
                WorkoutListPage::delete(&model, &api, &BrowserNotifier, workout_id).await;
            });
        })
    };

    let page = model.read();
    let card = |card: &WorkoutCard| {
        let edit_route = card.edit_route();
        let workout_id = card.workout_id;
        let on_delete = on_delete.clone();
        html! {
            <div class="workout" key={workout_id.to_string()}>
                <h2>{&card.name}</h2>
                <p>{&card.details}</p>
                if !card.exercises.is_empty() {
                    <div>
                        <h3>{"Selected Exercises:"}</h3>
                        <ul>
                            {for card.exercises.iter().map(|line| html! { <li>{line}</li> })}
                        </ul>
                    </div>
                }
                <button class="edit-btn" onclick={Callback::from(move |_: MouseEvent| navigate(&edit_route))}>
                    {"Edit"}
                </button>
                <button class="delete-btn" onclick={Callback::from(move |_: MouseEvent| on_delete.emit(workout_id))}>
                    {"Delete"}
                </button>
            </div>
        }
    };

    html! {
        <div class="workout-list-page">
            <div id="workouts-container">
                {render_content(page.content(), |cards| html! {
                    {for cards.iter().map(card)}
                })}
            </div>
        </div>
    }
}
