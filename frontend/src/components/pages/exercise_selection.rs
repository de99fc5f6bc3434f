use shared::ExerciseId;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_planner::pages::exercise_selection::INTENSITY_OPTIONS;
use workout_planner::pages::{CheckboxRow, DetailDraft, ExerciseSelectionPage, SelectionMode};
use workout_planner::{Association, Route};
use yew::prelude::*;

use super::{render_checkboxes, render_content};
use crate::hooks::use_page_model::{use_page_model, PageModel};
use crate::hooks::use_planner::use_planner;
use crate::services::navigation::navigate;
use crate::services::notifier::BrowserNotifier;

type DraftField = fn(&mut DetailDraft) -> &mut String;

#[derive(Properties, PartialEq)]
pub struct ExerciseSelectionViewProps {
    /// `SelectExercise` or `EditSelectExercise`
    pub route: Route,
}

fn row_exercise(row: &CheckboxRow) -> Option<ExerciseId> {
    match row.control.association() {
        Association::ExerciseSelection { exercise_id, .. }
        | Association::ExerciseToWorkout { exercise_id, .. } => Some(exercise_id),
        Association::WorkoutToDay { .. } => None,
    }
}

fn draft_input(
    model: &PageModel<ExerciseSelectionPage>,
    exercise_id: ExerciseId,
    field: DraftField,
) -> Callback<InputEvent> {
    let model = model.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        model.update(|page| *field(page.draft_mut(exercise_id)) = input.value());
    })
}

fn draft_text(
    model: &PageModel<ExerciseSelectionPage>,
    exercise_id: ExerciseId,
    label: &'static str,
    input_type: &'static str,
    value: &str,
    field: DraftField,
) -> Html {
    html! {
        <label class="detail-field">
            {label}
            <input
                type={input_type}
                value={value.to_string()}
                oninput={draft_input(model, exercise_id, field)}
            />
        </label>
    }
}

/// Description box, "Add Detail" and the extra fields for one exercise
fn detail_form(
    model: &PageModel<ExerciseSelectionPage>,
    exercise_id: ExerciseId,
    on_submit: &Callback<ExerciseId>,
) -> Html {
    let draft = model.read().draft(exercise_id).cloned().unwrap_or_default();

    let on_expand = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.update(|page| page.expand_detail(exercise_id)))
    };
    let on_intensity = {
        let model = model.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            model.update(|page| page.draft_mut(exercise_id).intensity = select.value());
        })
    };
    let on_add = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(exercise_id))
    };

    html! {
        <div class="exercise-detail">
            {draft_text(model, exercise_id, "Description", "text", &draft.description, |d| &mut d.description)}
            if draft.expanded {
                <div class="detail-fields">
                    {draft_text(model, exercise_id, "Equipment Needed", "text", &draft.equipment_needed, |d| &mut d.equipment_needed)}
                    {draft_text(model, exercise_id, "Weight", "number", &draft.weight, |d| &mut d.weight)}
                    <label class="detail-field">
                        {"Intensity"}
                        <select onchange={on_intensity}>
                            <option value="" selected={draft.intensity.is_empty()}>{"--"}</option>
                            {for INTENSITY_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={draft.intensity == *option}>{*option}</option>
                            })}
                        </select>
                    </label>
                    {draft_text(model, exercise_id, "Rating", "number", &draft.rating, |d| &mut d.rating)}
                    {draft_text(model, exercise_id, "Sets", "number", &draft.sets, |d| &mut d.sets)}
                    {draft_text(model, exercise_id, "Reps", "number", &draft.reps, |d| &mut d.reps)}
                </div>
            } else {
                <button type="button" class="add-detail-btn" onclick={on_expand}>{"Add Detail"}</button>
            }
            <button type="button" class="add-exercise-btn" onclick={on_add}>{"Add Exercise"}</button>
        </div>
    }
}

#[function_component(ExerciseSelectionView)]
pub fn exercise_selection_view(props: &ExerciseSelectionViewProps) -> Html {
    let planner = use_planner();
    let route = props.route;
    let model = use_page_model(move || {
        ExerciseSelectionPage::for_route(route)
            .unwrap_or_else(|| ExerciseSelectionPage::new(SelectionMode::BuildNew, None))
    });

    {
        let model = model.clone();
        let api = planner.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                ExerciseSelectionPage::load(&model, &api, &BrowserNotifier).await;
            });
            || ()
        });
    }

    let on_toggle = planner.toggle_callback(model.clone(), ExerciseSelectionPage::checkboxes_mut);

    let on_submit_detail = {
        let model = model.clone();
        let api = planner.api.clone();
        Callback::from(move |exercise_id: ExerciseId| {
            let model = model.clone();
            let api = api.clone();
            spawn_local(async move {
                ExerciseSelectionPage::submit_detail(&model, &api, &BrowserNotifier, exercise_id).await;
            });
        })
    };

    let (accepts_details, done_route) = {
        let page = model.read();
        (page.accepts_details(), page.done_route())
    };
    let on_done = Callback::from(move |_: MouseEvent| {
        if let Some(route) = &done_route {
            navigate(route);
        }
    });

    let extra = |row: &CheckboxRow| match row_exercise(row) {
        Some(exercise_id) if accepts_details => detail_form(&model, exercise_id, &on_submit_detail),
        _ => html! {},
    };
    let body = render_content(model.read().content(), |list| render_checkboxes(list, &on_toggle, extra));

    html! {
        <div class="exercise-selection-page">
            <h2>{"Select Exercises"}</h2>
            <div id="exercises-container">{body}</div>
            <button class="done-btn" onclick={on_done}>{"Done"}</button>
        </div>
    }
}
