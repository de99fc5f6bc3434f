//! Day identifier cache.
//!
//! One random identifier per day of the displayed month, generated once and
//! kept in key/value storage so every reload within the session binds the
//! same identifier to the same day.
//!
//! The stored record remembers the month it was generated for. A record for
//! another month, a corrupt record, or a legacy bare array whose length does
//! not match the month is treated as absent.

use std::collections::HashSet;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::DayId;

use super::calendar::CalendarService;
use crate::config::DEFAULT_DAY_ID_UPPER_BOUND;
use crate::error::ClientError;
use crate::storage::SessionStorage;

/// Identifiers for every day of one month, index 0 being the 1st
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayIdList {
    year: i32,
    month: u32,
    ids: Vec<DayId>,
}

impl DayIdList {
    /// `None` unless there is exactly one identifier per day of the month
    pub fn new(year: i32, month: u32, ids: Vec<DayId>) -> Option<Self> {
        let expected = CalendarService::new().days_in_month(year, month) as usize;
        if !(1..=12).contains(&month) || ids.len() != expected {
            return None;
        }
        Some(Self { year, month, ids })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn ids(&self) -> &[DayId] {
        &self.ids
    }

    /// Identifier bound to a 1-based day of the month
    pub fn for_day(&self, day: u32) -> Option<DayId> {
        (day as usize).checked_sub(1).and_then(|i| self.ids.get(i)).copied()
    }

    pub fn is_for(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDayIds {
    Tagged { year: i32, month: u32, ids: Vec<DayId> },
    Legacy(Vec<DayId>),
}

/// Loads, saves and regenerates the cached day identifier list
pub struct DayIdStore<S> {
    storage: S,
    key: String,
    upper_bound: u32,
}

impl<S: SessionStorage> DayIdStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            upper_bound: DEFAULT_DAY_ID_UPPER_BOUND,
        }
    }

    /// Identifiers are drawn from `0..upper_bound`
    pub fn with_upper_bound(mut self, upper_bound: u32) -> Self {
        // A month needs up to 31 distinct values
        self.upper_bound = upper_bound.max(31);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The cached list for `year`/`month`, if there is a usable one
    pub fn load(&self, year: i32, month: u32) -> Option<DayIdList> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read day IDs from storage: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<StoredDayIds>(&raw) {
            Ok(StoredDayIds::Tagged { year: y, month: m, ids }) if y == year && m == month => {
                DayIdList::new(y, m, ids)
            }
            Ok(StoredDayIds::Tagged { year: y, month: m, .. }) => {
                info!("Cached day IDs are for {}/{}, not {}/{}", m, y, month, year);
                None
            }
            Ok(StoredDayIds::Legacy(ids)) => DayIdList::new(year, month, ids),
            Err(e) => {
                warn!("Ignoring unreadable day IDs under '{}': {}", self.key, e);
                None
            }
        }
    }

    pub fn save(&self, list: &DayIdList) -> Result<(), ClientError> {
        let json = serde_json::to_string(list)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Forget the cached list
    pub fn clear(&self) -> Result<(), ClientError> {
        self.storage.remove_item(&self.key)
    }

    /// Generate a fresh list and store it
    pub fn regenerate(&self, year: i32, month: u32) -> Result<DayIdList, ClientError> {
        self.regenerate_with(&mut rand::thread_rng(), year, month)
    }

    pub fn regenerate_with<R: Rng>(
        &self,
        rng: &mut R,
        year: i32,
        month: u32,
    ) -> Result<DayIdList, ClientError> {
        let list = self.generate(rng, year, month);
        self.save(&list)?;
        info!("Generated {} day IDs for {}/{}", list.ids.len(), month, year);
        Ok(list)
    }

    /// The cached list, or a freshly generated one.
    ///
    /// Never fails: if the fresh list cannot be stored it is still returned
    /// and only lives as long as the page.
    pub fn load_or_generate(&self, year: i32, month: u32) -> DayIdList {
        self.load_or_generate_with(&mut rand::thread_rng(), year, month)
    }

    pub fn load_or_generate_with<R: Rng>(
        &self,
        rng: &mut R,
        year: i32,
        month: u32,
    ) -> DayIdList {
        if let Some(list) = self.load(year, month) {
            return list;
        }

        let list = self.generate(rng, year, month);
        if let Err(e) = self.save(&list) {
            warn!("Failed to store generated day IDs: {}", e);
        }
        list
    }

    fn generate<R: Rng>(&self, rng: &mut R, year: i32, month: u32) -> DayIdList {
        let month = month.clamp(1, 12);
        let count = CalendarService::new().days_in_month(year, month) as usize;
        let mut seen = HashSet::with_capacity(count);
        let mut ids = Vec::with_capacity(count);

        while ids.len() < count {
            let candidate = rng.gen_range(0..self.upper_bound);
            if seen.insert(candidate) {
                ids.push(DayId(candidate));
            }
        }

        DayIdList { year, month, ids }
    }
}
