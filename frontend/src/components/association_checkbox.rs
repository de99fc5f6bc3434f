use web_sys::HtmlInputElement;
use workout_planner::pages::CheckboxRow;
use workout_planner::Association;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssociationCheckboxProps {
    pub row: CheckboxRow,
    pub on_toggle: Callback<(Association, bool)>,
    #[prop_or_default]
    pub children: Html,
}

/// A labelled checkbox that shows the control's current value, not the DOM's
#[function_component(AssociationCheckbox)]
pub fn association_checkbox(props: &AssociationCheckboxProps) -> Html {
    let association = props.row.control.association();
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit((association, input.checked()));
        })
    };

    html! {
        <div class="association-item">
            <label>
                <input type="checkbox"
                       checked={props.row.control.checked()}
                       {onchange} />
                {&props.row.label}
            </label>
            {props.children.clone()}
        </div>
    }
}
