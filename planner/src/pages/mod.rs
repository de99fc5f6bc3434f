//! Plain-data models for each page of the planner.
//!
//! A model owns what the page shows and how it reacts to user actions and
//! server responses. The async operations take a [`PageHandle`] rather than
//! `&mut self`: they borrow the model only to read their inputs and to apply
//! results, never across an `.await`, so a UI can keep rendering (and the
//! user keep clicking) while a request is in flight.

use std::cell::RefCell;
use std::rc::Rc;

pub mod checkbox_list;
pub mod exercise_list;
pub mod exercise_selection;
pub mod select_workout;
pub mod workout_editor;
pub mod workout_list;

pub use checkbox_list::{toggle_row, CheckboxList, CheckboxRow};
pub use exercise_list::{ExerciseCard, ExerciseListPage};
pub use exercise_selection::{DetailDraft, ExerciseSelectionPage, SelectionMode};
pub use select_workout::SelectWorkoutPage;
pub use workout_editor::{EditorMode, WorkoutEditorPage, WorkoutForm};
pub use workout_list::{WorkoutCard, WorkoutListPage};

/// Shared, mutable access to a page model
pub trait PageHandle<P> {
    /// Run `f` against the model; the borrow ends when `f` returns
    fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R;
}

impl<P> PageHandle<P> for RefCell<P> {
    fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<P, H: PageHandle<P> + ?Sized> PageHandle<P> for Rc<H> {
    fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        (**self).with(f)
    }
}

/// What the main area of a page shows
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent<L> {
    Loading,
    /// Fixed text in place of the content
    Message(&'static str),
    Ready(L),
}

impl<L> PageContent<L> {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PageContent::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&L> {
        match self {
            PageContent::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut L> {
        match self {
            PageContent::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageContent::Loading)
    }
}
