//! A list of labelled association checkboxes.

use shared::AssociationResponse;

use crate::domain::association::{
    settle, Association, AssociationService, PendingToggle, ToggleControl, ToggleResolution,
};
use super::PageHandle;
use crate::api::HttpTransport;
use crate::domain::notifications::Notifier;
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxRow {
    pub label: String,
    pub control: ToggleControl,
}

impl CheckboxRow {
    pub fn new(label: impl Into<String>, association: Association, checked: bool) -> Self {
        Self {
            label: label.into(),
            control: ToggleControl::new(association, checked),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxList {
    rows: Vec<CheckboxRow>,
}

impl CheckboxList {
    pub fn new(rows: Vec<CheckboxRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CheckboxRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, association: Association) -> Option<&CheckboxRow> {
        self.rows
            .iter()
            .find(|row| row.control.association() == association)
    }

    fn control_mut(&mut self, association: Association) -> Option<&mut ToggleControl> {
        self.rows
            .iter_mut()
            .map(|row| &mut row.control)
            .find(|control| control.association() == association)
    }

    /// Flip a row optimistically; `None` if no row has that association
    pub fn begin(&mut self, association: Association, checked: bool) -> Option<PendingToggle> {
        self.control_mut(association).map(|control| control.begin(checked))
    }

    pub fn finish<N: Notifier>(
        &mut self,
        pending: &PendingToggle,
        outcome: &Result<AssociationResponse, ClientError>,
        notifier: &N,
    ) -> ToggleResolution {
        match self.control_mut(pending.association) {
            Some(control) => settle(control, pending.token, outcome, notifier),
            None => ToggleResolution::Stale,
        }
    }
}

/// Flip one row of the list `list` finds in the page, send the request and
/// settle the answer.
///
/// `None` when the page has no list or no row for `association`.
pub async fn toggle_row<P, H, T, N>(
    page: &H,
    list: fn(&mut P) -> Option<&mut CheckboxList>,
    service: &AssociationService<T, N>,
    association: Association,
    checked: bool,
) -> Option<ToggleResolution>
where
    H: PageHandle<P> + ?Sized,
    T: HttpTransport,
    N: Notifier,
{
    let pending = page.with(|page| list(page)?.begin(association, checked))?;
    let outcome = service.submit(&pending).await;
    page.with(|page| {
        list(page).map(|rows| rows.finish(&pending, &outcome, service.notifier()))
    })
}
