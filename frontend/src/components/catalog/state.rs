//! State container for the catalog browser.
//!
//! `records` is the authoritative unfiltered collection as loaded; the
//! displayed list is always recomputed from it plus the current criteria,
//! never from a previous filtered result, so re-filtering cannot compound.

use common::catalog::{self, FilterCriteria};

use super::CatalogType;
use crate::api::FetchError;

pub struct CatalogPage<T> {
    /// The collection as the loader returned it. Never mutated by filtering.
    pub records: Vec<T>,

    /// Current search term, category restriction and sort key.
    pub criteria: FilterCriteria,

    /// True from mount (and from a retry) until the load settles.
    pub loading: bool,

    /// Why the last load failed, if it did.
    pub error: Option<FetchError>,

    /// Guard so the first-render load runs only once.
    pub loaded: bool,
}

impl<T: CatalogType> CatalogPage<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::with_sort(T::DEFAULT_SORT),
            loading: true,
            error: None,
            loaded: false,
        }
    }

    /// The records to render, in display order.
    pub fn displayed(&self) -> Vec<T> {
        catalog::filter_items(&self.records, &self.criteria)
    }

    /// Category options for the filter bar, derived from the collection.
    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.records)
    }

    /// Back to the page defaults: empty search, all categories, default sort.
    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::with_sort(T::DEFAULT_SORT);
    }
}
