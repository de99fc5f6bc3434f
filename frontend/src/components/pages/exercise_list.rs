use shared::ExerciseId;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use workout_planner::pages::{ExerciseCard, ExerciseListPage};
use workout_planner::Route;
use yew::prelude::*;

use super::render_content;
use crate::hooks::use_page_model::use_page_model;
use crate::hooks::use_planner::use_planner;
use crate::services::navigation::{navigate, query_value};
use crate::services::notifier::BrowserNotifier;

#[function_component(ExerciseListView)]
pub fn exercise_list_view() -> Html {
    let planner = use_planner();
    let model = use_page_model(|| ExerciseListPage::new(query_value("filter")));
    let filter = use_state(|| model.read().filter().map(str::to_string));

    // Refetch whenever the applied filter changes
    {
        let model = model.clone();
        let api = planner.api.clone();
        use_effect_with((*filter).clone(), move |filter| {
            model.update(|page| page.set_filter(filter.clone()));
            spawn_local(async move {
                ExerciseListPage::load(&model, &api, &BrowserNotifier).await;
            });
            || ()
        });
    }

    let draft = use_state(|| (*filter).clone().unwrap_or_default());
    let on_filter_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_filter_submit = {
        let draft = draft.clone();
        let filter = filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = draft.trim();
            filter.set((!value.is_empty()).then(|| value.to_string()));
        })
    };

    let on_delete = {
        let model = model.clone();
        let api = planner.api.clone();
        Callback::from(move |exercise_id: ExerciseId| {
            let model = model.clone();
            let api = api.clone();
            spawn_local(async move {
                ExerciseListPage::delete(&model, &api, &BrowserNotifier, exercise_id).await;
            });
        })
    };

    let card = |card: &ExerciseCard| {
        let edit_route = card.edit_route();
        let exercise_id = card.exercise_id;
        let on_delete = on_delete.clone();
        html! {
            <div class="exercise" key={exercise_id.to_string()}>
                <h2>{&card.name}</h2>
                {for card.details.iter().map(|line| html! { <p>{line}</p> })}
                <button class="edit-btn" onclick={Callback::from(move |_: MouseEvent| navigate(&edit_route))}>
                    {"Edit"}
                </button>
                <button class="delete-btn" onclick={Callback::from(move |_: MouseEvent| on_delete.emit(exercise_id))}>
                    {"Delete"}
                </button>
            </div>
        }
    };
    let page = model.read();

    html! {
        <div class="exercise-list-page">
            <form class="exercise-filter" onsubmit={on_filter_submit}>
                <input
                    type="text"
                    placeholder="Filter exercises"
                    value={(*draft).clone()}
                    oninput={on_filter_input}
                />
                <button type="submit">{"Filter"}</button>
            </form>
            <button class="add-btn" onclick={Callback::from(|_: MouseEvent| navigate(&Route::AddExercise))}>
                {"Add Exercise"}
            </button>
            <div id="exercises-container">
                {render_content(page.content(), |cards| html! {
                    {for cards.iter().map(card)}
                })}
            </div>
        </div>
    }
}
