use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use workout_planner::pages::{EditorMode, WorkoutEditorPage, WorkoutForm};
use workout_planner::Route;
use yew::prelude::*;

use crate::hooks::use_page_model::{use_page_model, PageModel};
use crate::hooks::use_planner::use_planner;
use crate::services::navigation::{navigate, replace_url};
use crate::services::notifier::BrowserNotifier;

type FormField = fn(&mut WorkoutForm) -> &mut String;

#[derive(Properties, PartialEq)]
pub struct WorkoutEditorViewProps {
    /// `AddOrEditWorkout` or `EditWorkout`
    pub route: Route,
}

fn form_input(model: &PageModel<WorkoutEditorPage>, field: FormField) -> Callback<InputEvent> {
    let model = model.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        model.update(|page| *field(&mut page.form) = input.value());
    })
}

#[function_component(WorkoutEditorView)]
pub fn workout_editor_view(props: &WorkoutEditorViewProps) -> Html {
    let planner = use_planner();
    let route = props.route;
    let model = use_page_model(move || {
        WorkoutEditorPage::for_route(route).unwrap_or_else(|| WorkoutEditorPage::new(EditorMode::Create, None))
    });

    // A new workout first gets an id, then the page loads what it shows
    {
        let model = model.clone();
        let api = planner.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(route) = WorkoutEditorPage::load(&model, &api, &BrowserNotifier).await {
                    replace_url(&route);
                }
            });
            || ()
        });
    }

    let on_description = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            model.update(|page| page.form.description = input.value());
        })
    };

    let on_select_exercises = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(route) = model.read().select_exercises_route(&BrowserNotifier) {
                navigate(&route);
            }
        })
    };

    let on_submit = {
        let model = model.clone();
        let api = planner.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let model = model.clone();
            let api = api.clone();
            spawn_local(async move {
                if let Some(route) = WorkoutEditorPage::submit(&model, &api, &BrowserNotifier).await {
                    navigate(&route);
                }
            });
        })
    };

    let page = model.read();
    let title = match page.mode() {
        EditorMode::Create => "Add Workout",
        EditorMode::Edit => "Edit Workout",
    };
    let form = &page.form;

    html! {
        <div class="workout-editor-page">
            <h2>{title}</h2>
            <form class="workout-form" onsubmit={on_submit}>
                <label>
                    {"Name"}
                    <input type="text" value={form.name.clone()} oninput={form_input(&model, |f| &mut f.name)} />
                </label>
                <label>
                    {"Description"}
                    <textarea value={form.description.clone()} oninput={on_description} />
                </label>
                <label>
                    {"Rating"}
                    <input
                        type="number"
                        min="1"
                        max="10"
                        value={form.rating.clone()}
                        oninput={form_input(&model, |f| &mut f.rating)}
                    />
                </label>
                <label>
                    {"Focus"}
                    <input type="text" value={form.focus.clone()} oninput={form_input(&model, |f| &mut f.focus)} />
                </label>
                <label>
                    {"Intensity"}
                    <input
                        type="text"
                        value={form.intensity.clone()}
                        oninput={form_input(&model, |f| &mut f.intensity)}
                    />
                </label>
                <div class="selected-exercises">
                    <h3>{"Exercises"}</h3>
                    <ul>
                        {for page.exercises().iter().map(|line| html! { <li>{line}</li> })}
                    </ul>
                    <button type="button" onclick={on_select_exercises}>{"Select Exercises"}</button>
                </div>
                <button type="submit">{"Save Workout"}</button>
            </form>
        </div>
    }
}
