//! Memoized projections.
//!
//! A cache entry remembers the `Arc` of the slice it was computed from and
//! recomputes only when the snapshot holds a different `Arc`. Content is
//! never compared.

use rb_model::{DisplayField, Filter, LastGeneratedReport, ReportDetailed};
use std::sync::Arc;

use crate::state::Snapshot;
use crate::store::EntityStore;

/// One memoized value keyed on the identity of its source slice.
#[derive(Debug)]
struct Memo<S, V> {
    entry: Option<(Arc<S>, V)>,
}

impl<S, V> Default for Memo<S, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<S, V: Clone> Memo<S, V> {
    fn get_or_compute(&mut self, source: &Arc<S>, compute: impl FnOnce(&S) -> V) -> V {
        match &self.entry {
            Some((cached, value)) if Arc::ptr_eq(cached, source) => value.clone(),
            _ => {
                let value = compute(source);
                self.entry = Some((Arc::clone(source), value.clone()));
                value
            }
        }
    }
}

/// Explicit cache for list projections.
///
/// Owned by whoever renders; there is no global instance. Holding the source
/// `Arc` keeps the identity check sound for as long as the entry lives.
#[derive(Debug, Default)]
pub struct ViewCache {
    display_fields: Memo<EntityStore<DisplayField>, Arc<[DisplayField]>>,
    filters: Memo<EntityStore<Filter>, Arc<[Filter]>>,
    last_generated: Memo<ReportDetailed, LastGeneratedReport>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_fields(&mut self, state: &Snapshot) -> Arc<[DisplayField]> {
        self.display_fields
            .get_or_compute(&state.display_fields, |store| store.iter().cloned().collect())
    }

    pub fn display_fields_count(&mut self, state: &Snapshot) -> usize {
        self.display_fields(state).len()
    }

    pub fn filters(&mut self, state: &Snapshot) -> Arc<[Filter]> {
        self.filters
            .get_or_compute(&state.filters, |store| store.iter().cloned().collect())
    }

    pub fn filters_count(&mut self, state: &Snapshot) -> usize {
        self.filters(state).len()
    }

    pub fn last_generated_report(&mut self, state: &Snapshot) -> Option<LastGeneratedReport> {
        let report = state.selected_report.as_ref()?;
        Some(
            self.last_generated
                .get_or_compute(report, |report| LastGeneratedReport::from(report)),
        )
    }

    /// Drop every cached value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{LayoutMessage, Message};
    use crate::reducer::Reducer;
    use crate::store::EntityMessage;
    use rb_model::{NewReportField, ReportId};

    fn field(position: u32) -> DisplayField {
        DisplayField::from_new(NewReportField::new("f", "F"), ReportId::new(1), position)
    }

    #[test]
    fn unchanged_slice_reuses_cached_list() {
        let reducer = Reducer::default();
        let state = reducer
            .transition(
                &Snapshot::new(),
                Message::DisplayField(EntityMessage::LoadAll(vec![field(1), field(0)])),
            )
            .expect("load display fields");
        let mut cache = ViewCache::new();
        let first = cache.display_fields(&state);

        let state = reducer
            .transition(&state, Message::Layout(LayoutMessage::LeftNavToggled))
            .expect("toggle nav");
        let second = cache.display_fields(&state);
        assert!(Arc::ptr_eq(&first, &second));

        let state = reducer
            .transition(&state, Message::DisplayField(EntityMessage::DeleteOne(0)))
            .expect("delete display field");
        let third = cache.display_fields(&state);
        assert!(!Arc::ptr_eq(&second, &third));
        assert_eq!(third.len(), 1);
        assert_eq!(cache.display_fields_count(&state), 1);

        cache.clear();
        let fourth = cache.display_fields(&state);
        assert!(!Arc::ptr_eq(&third, &fourth));
        assert_eq!(fourth, third);
    }

    #[test]
    fn last_generated_is_absent_without_selection() {
        let mut cache = ViewCache::new();
        assert_eq!(cache.last_generated_report(&Snapshot::new()), None);
    }
}
