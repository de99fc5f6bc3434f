pub mod exercise_list;
pub mod exercise_selection;
pub mod not_found;
pub mod schedule;
pub mod select_workout;
pub mod workout_editor;
pub mod workout_list;

use workout_planner::pages::{CheckboxList, CheckboxRow, PageContent};
use workout_planner::Association;
use yew::prelude::*;

use super::association_checkbox::AssociationCheckbox;

/// Loading text, a fixed message, or the rendered content
pub fn render_content<L>(content: &PageContent<L>, ready: impl FnOnce(&L) -> Html) -> Html {
    match content {
        PageContent::Loading => html! { <p class="loading">{"Loading..."}</p> },
        PageContent::Message(message) => html! { <p class="page-message">{*message}</p> },
        PageContent::Ready(inner) => ready(inner),
    }
}

pub fn render_checkboxes(
    list: &CheckboxList,
    on_toggle: &Callback<(Association, bool)>,
    extra: impl Fn(&CheckboxRow) -> Html,
) -> Html {
    html! {
        <div class="association-list">
            {for list.rows().iter().map(|row| html! {
                <AssociationCheckbox row={row.clone()} on_toggle={on_toggle.clone()}>
                    {extra(row)}
                </AssociationCheckbox>
            })}
        </div>
    }
}
