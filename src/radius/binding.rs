use tracing::debug;

use crate::catalog::Catalog;

use super::{FilterState, Located, compute_visible};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterPhase {
    Filtered,
    PromptingExpand,
}

#[derive(Debug)]
pub struct FilterView<'a, T> {
    pub visible_items: Vec<&'a T>,
    pub radius_km: u32,
    pub show_prompt: bool,
}

#[derive(Debug)]
pub struct RadiusFilter<T> {
    label: &'static str,
    catalog: Catalog<T>,
    state: FilterState,
}

impl<T: Located> RadiusFilter<T> {
    pub fn new(label: &'static str, catalog: Catalog<T>) -> Self {
        Self::with_state(label, catalog, FilterState::new())
    }

    pub fn with_state(label: &'static str, catalog: Catalog<T>, state: FilterState) -> Self {
        let mut filter = Self {
            label,
            catalog,
            state,
        };
        filter.state.reconcile(filter.catalog.items());
        debug!(
            screen = filter.label,
            radius_km = filter.state.radius_km(),
            phase = ?filter.phase(),
            "radius filter ready"
        );
        filter
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    #[cfg(test)]
    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn visible(&self) -> Vec<&T> {
        compute_visible(self.catalog.items(), self.state.radius_km())
    }

    pub fn show_prompt(&self) -> bool {
        self.state.should_prompt_expand(self.catalog.items())
    }

    pub fn phase(&self) -> FilterPhase {
        if self.show_prompt() {
            FilterPhase::PromptingExpand
        } else {
            FilterPhase::Filtered
        }
    }

    pub fn view(&self) -> FilterView<'_, T> {
        FilterView {
            visible_items: self.visible(),
            radius_km: self.state.radius_km(),
            show_prompt: self.show_prompt(),
        }
    }

    pub fn increment(&mut self) {
        self.apply("increment", |state, _| state.increment());
    }

    pub fn decrement(&mut self) {
        self.apply("decrement", |state, _| state.decrement());
    }

    pub fn dismiss(&mut self) {
        self.apply("dismiss", |state, _| state.dismiss());
    }

    pub fn expand(&mut self) {
        self.apply("expand", |state, items| state.expand(items));
    }

    fn apply(&mut self, action: &'static str, mutate: impl FnOnce(&mut FilterState, &[T])) {
        let before = self.phase();
        let previous_radius = self.state.radius_km();

        let mut next = self.state;
        mutate(&mut next, self.catalog.items());
        next.reconcile(self.catalog.items());
        self.state = next;

        if previous_radius != self.state.radius_km() {
            debug!(
                screen = self.label,
                action,
                from = previous_radius,
                to = self.state.radius_km(),
                "radius changed"
            );
        }

        let after = self.phase();
        if before != after {
            debug!(
                screen = self.label,
                action,
                ?before,
                ?after,
                dismissed_radius = ?self.state.dismissed_radius(),
                "filter phase changed"
            );
        }
    }
}
