use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::header::Header;
use components::pages::exercise_list::ExerciseListView;
use components::pages::exercise_selection::ExerciseSelectionView;
use components::pages::not_found::NotFound;
use components::pages::schedule::SchedulePage;
use components::pages::select_workout::SelectWorkoutView;
use components::pages::workout_editor::WorkoutEditorView;
use components::pages::workout_list::WorkoutListView;
use hooks::use_planner::AppContext;
use services::config::load_config;
use services::{logging, navigation};
use workout_planner::Route;

#[derive(Properties, PartialEq)]
struct AppProps {
    context: AppContext,
}

fn page(route: Route) -> Html {
    match route {
        Route::ExerciseList => html! { <ExerciseListView /> },
        Route::Schedule => html! { <SchedulePage /> },
        Route::WorkoutList => html! { <WorkoutListView /> },
        Route::SelectWorkout(day_id) => html! { <SelectWorkoutView {day_id} /> },
        Route::SelectExercise(_) | Route::EditSelectExercise(_) => {
            html! { <ExerciseSelectionView {route} /> }
        }
        Route::AddOrEditWorkout(_) | Route::EditWorkout(_) => html! { <WorkoutEditorView {route} /> },
        // Exercise forms are served by the backend's own pages
        Route::AddExercise | Route::EditExercise(_) | Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let route = navigation::current_route();
    log::debug!("Rendering {}", route.to_path());

    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            <Header current={route} />
            <main class="main">
                <div class="container">
                    {page(route)}
                </div>
            </main>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    let config = load_config();
    logging::init(config.level_filter());
    log::info!("Workout planner starting against '{}'", config.base_url);

    let context = AppContext::new(config);
    yew::Renderer::<App>::with_props(AppProps { context }).render();
}
