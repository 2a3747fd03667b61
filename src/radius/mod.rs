mod binding;

pub use binding::RadiusFilter;

pub const MIN_RADIUS_KM: u32 = 1;
pub const MAX_RADIUS_KM: u32 = 99;
pub const DEFAULT_RADIUS_KM: u32 = 10;
pub const EXPAND_STEP_KM: u32 = 5;

pub trait Located {
    fn id(&self) -> &str;
    fn distance_km(&self) -> f64;
}

pub fn compute_visible<T: Located>(items: &[T], radius_km: u32) -> Vec<&T> {
    let radius = f64::from(radius_km);
    items
        .iter()
        .filter(|item| item.distance_km() <= radius)
        .collect()
}

pub fn nearest_distance<T: Located>(items: &[T]) -> Option<f64> {
    items.iter().map(Located::distance_km).reduce(f64::min)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterState {
    radius_km: u32,
    dismissed_radius: Option<u32>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::with_radius(DEFAULT_RADIUS_KM)
    }

    pub fn with_radius(radius_km: u32) -> Self {
        Self {
            radius_km: radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM),
            dismissed_radius: None,
        }
    }

    pub fn radius_km(&self) -> u32 {
        self.radius_km
    }

    pub fn dismissed_radius(&self) -> Option<u32> {
        self.dismissed_radius
    }

    pub fn increment(&mut self) {
        self.radius_km = (self.radius_km + 1).min(MAX_RADIUS_KM);
    }

    pub fn decrement(&mut self) {
        self.radius_km = self.radius_km.saturating_sub(1).max(MIN_RADIUS_KM);
    }

    pub fn should_prompt_expand<T: Located>(&self, items: &[T]) -> bool {
        compute_visible(items, self.radius_km).is_empty()
            && self.dismissed_radius != Some(self.radius_km)
    }

    pub fn dismiss(&mut self) {
        self.dismissed_radius = Some(self.radius_km);
    }

    pub fn expand<T: Located>(&mut self, items: &[T]) {
        let current = f64::from(self.radius_km);
        let nearest = nearest_distance(items).unwrap_or(current);
        let suggested = nearest.max(current + f64::from(EXPAND_STEP_KM));
        let capped = suggested.ceil().min(f64::from(MAX_RADIUS_KM));

        self.radius_km = (capped as u32).max(MIN_RADIUS_KM);
        self.dismissed_radius = None;
    }

    pub fn reconcile<T: Located>(&mut self, items: &[T]) {
        if !compute_visible(items, self.radius_km).is_empty() {
            self.dismissed_radius = None;
        }
    }
}

#[cfg(test)]
mod tests;
