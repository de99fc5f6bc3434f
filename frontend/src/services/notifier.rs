use workout_planner::{Notification, Notifier, Severity};

/// Blocking `alert()` for errors, console only for everything else
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => {
                log::error!("{}", notification.message);
                gloo::dialogs::alert(&notification.message);
            }
            Severity::Warning => log::warn!("{}", notification.message),
            Severity::Info => log::info!("{}", notification.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // An alert would block the headless runner, so only the quiet levels run here
    #[wasm_bindgen_test]
    fn test_quiet_levels_skip_alert() {
        BrowserNotifier.notify(Notification::warning("Error loading the workouts: offline"));
        BrowserNotifier.notify(Notification::info("Workout added to day successfully"));
        assert!(!Notification::warning("w").severity.is_blocking());
        assert!(!Notification::info("i").severity.is_blocking());
    }
}
