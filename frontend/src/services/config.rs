use workout_planner::PlannerConfig;

const CONFIG_META: &str = "meta[name=\"workout-planner-config\"]";

/// Configuration from the page's `<meta name="workout-planner-config">` tag.
///
/// Runs before the logger exists, so problems go straight to the console.
pub fn load_config() -> PlannerConfig {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(CONFIG_META).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    match content {
        Some(json) => PlannerConfig::from_json(&json).unwrap_or_else(|e| {
            gloo::console::warn!(format!("Ignoring planner config: {}", e));
            PlannerConfig::default()
        }),
        None => PlannerConfig::default(),
    }
}
