use std::cell::{Ref, RefCell};
use std::rc::Rc;

use workout_planner::pages::PageHandle;
use yew::prelude::*;

/// A page model shared between the component and its async tasks.
///
/// Async page operations reach the model through [`PageHandle`], which
/// borrows it only between awaits and re-renders after every change.
pub struct PageModel<P> {
    inner: Rc<RefCell<P>>,
    refresh: UseForceUpdateHandle,
}

impl<P> Clone for PageModel<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<P> PageModel<P> {
    pub fn read(&self) -> Ref<'_, P> {
        self.inner.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.refresh.force_update();
        result
    }
}

impl<P> PageHandle<P> for PageModel<P> {
    fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        self.update(f)
    }
}

#[hook]
pub fn use_page_model<P: 'static, F>(init: F) -> PageModel<P>
where
    F: FnOnce() -> P,
{
    let inner = use_mut_ref(init);
    let refresh = use_force_update();
    PageModel { inner, refresh }
}
