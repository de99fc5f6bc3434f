use yew::prelude::*;
use workout_planner::Route;

const LINKS: [(Route, &str); 3] = [
    (Route::ExerciseList, "Exercises"),
    (Route::WorkoutList, "Workouts"),
    (Route::Schedule, "Schedule"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Route,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Workout Planner"}</h1>
                <nav class="header-links">
                    {for LINKS.iter().map(|(route, label)| {
                        let class = if *route == props.current { "nav-link active" } else { "nav-link" };
                        html! {
                            <a class={class} href={route.to_path()}>{*label}</a>
                        }
                    })}
                    <a class="nav-link" href={Route::AddOrEditWorkout(None).to_path()}>{"New Workout"}</a>
                </nav>
            </div>
        </header>
    }
}
