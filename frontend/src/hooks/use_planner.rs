use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use workout_planner::pages::{toggle_row, CheckboxList};
use workout_planner::{Association, AssociationService, DayDetailService, PlannerConfig};
use yew::prelude::*;

use super::use_page_model::PageModel;
use crate::services::api::{GlooTransport, PlannerApi};
use crate::services::notifier::BrowserNotifier;

/// Shared by every page through a context provider
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<PlannerConfig>,
    pub api: PlannerApi,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

impl AppContext {
    pub fn new(config: PlannerConfig) -> Self {
        let api = config.api_client(GlooTransport);
        Self {
            config: Rc::new(config),
            api,
        }
    }

    pub fn associations(&self) -> AssociationService<GlooTransport, BrowserNotifier> {
        AssociationService::new(self.api.clone(), BrowserNotifier)
    }

    pub fn day_details(&self) -> DayDetailService<GlooTransport, BrowserNotifier> {
        DayDetailService::new(self.api.clone(), BrowserNotifier)
    }

    /// Callback for association checkboxes in `model`'s list.
    ///
    /// The row flips as soon as the task starts; the server's answer
    /// confirms it or rolls it back.
    pub fn toggle_callback<P: 'static>(
        &self,
        model: PageModel<P>,
        list: fn(&mut P) -> Option<&mut CheckboxList>,
    ) -> Callback<(Association, bool)> {
        let service = self.associations();
        Callback::from(move |(association, checked): (Association, bool)| {
            let model = model.clone();
            let service = service.clone();
            spawn_local(async move {
                toggle_row(&model, list, &service, association, checked).await;
            });
        })
    }
}

#[hook]
pub fn use_planner() -> AppContext {
    let fallback = use_memo((), |_| AppContext::new(PlannerConfig::default()));
    use_context::<AppContext>().unwrap_or_else(|| (*fallback).clone())
}
