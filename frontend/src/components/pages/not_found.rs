use workout_planner::Route;
use yew::prelude::*;

use crate::services::navigation::navigate;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let on_home = Callback::from(|_: MouseEvent| navigate(&Route::ExerciseList));
    html! {
        <div class="not-found">
            <h2>{"Page not found"}</h2>
            <button onclick={on_home}>{"Back to exercises"}</button>
        </div>
    }
}
