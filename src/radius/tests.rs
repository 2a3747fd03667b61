use crate::catalog::{Catalog, Validate};

use super::binding::FilterPhase;
use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Spot {
    id: &'static str,
    distance_km: f64,
}

impl Located for Spot {
    fn id(&self) -> &str {
        self.id
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl Validate for Spot {}

fn spot(id: &'static str, distance_km: f64) -> Spot {
    Spot { id, distance_km }
}

fn two_spots() -> Vec<Spot> {
    vec![spot("a", 3.0), spot("b", 12.0)]
}

fn ids(items: &[&Spot]) -> Vec<&'static str> {
    items.iter().map(|item| item.id).collect()
}

fn filter_over(items: Vec<Spot>) -> RadiusFilter<Spot> {
    let catalog = Catalog::new(items).expect("valid test catalog");
    RadiusFilter::new("test", catalog)
}

fn state_at(radius_km: u32) -> FilterState {
    FilterState::with_radius(radius_km)
}

#[test]
fn visible_keeps_catalog_order_and_inclusive_bound() {
    let items = vec![
        spot("far", 20.0),
        spot("edge", 5.0),
        spot("near", 0.5),
        spot("just-over", 5.01),
    ];

    assert_eq!(ids(&compute_visible(&items, 5)), vec!["edge", "near"]);
    assert_eq!(ids(&compute_visible(&items, 20)), vec!["far", "edge", "near", "just-over"]);
    assert!(compute_visible(&items, 0).is_empty());
}

#[test]
fn visible_on_empty_catalog_is_empty() {
    let items: Vec<Spot> = Vec::new();
    assert!(compute_visible(&items, 99).is_empty());
}

#[test]
fn nearest_distance_picks_minimum() {
    let items = vec![spot("x", 7.0), spot("y", 0.02), spot("z", 1.5)];
    assert_eq!(nearest_distance(&items), Some(0.02));
    assert_eq!(nearest_distance::<Spot>(&[]), None);
}

#[test]
fn increment_and_decrement_clamp_at_bounds() {
    for radius in MIN_RADIUS_KM..=MAX_RADIUS_KM {
        let mut up = state_at(radius);
        up.increment();
        assert_eq!(up.radius_km(), (radius + 1).min(MAX_RADIUS_KM));

        let mut down = state_at(radius);
        down.decrement();
        assert_eq!(down.radius_km(), (radius - 1).max(MIN_RADIUS_KM));
    }

    let mut ceiling = state_at(MAX_RADIUS_KM);
    ceiling.increment();
    ceiling.increment();
    assert_eq!(ceiling.radius_km(), MAX_RADIUS_KM);

    let mut floor = state_at(MIN_RADIUS_KM);
    floor.decrement();
    floor.decrement();
    assert_eq!(floor.radius_km(), MIN_RADIUS_KM);
}

#[test]
fn with_radius_clamps_out_of_range_values() {
    assert_eq!(FilterState::with_radius(0).radius_km(), MIN_RADIUS_KM);
    assert_eq!(FilterState::with_radius(250).radius_km(), MAX_RADIUS_KM);
    assert_eq!(FilterState::new().radius_km(), DEFAULT_RADIUS_KM);
    assert_eq!(FilterState::default().dismissed_radius(), None);
}

#[test]
fn prompt_requires_empty_result_and_undismissed_radius() {
    let items = two_spots();

    assert!(!state_at(10).should_prompt_expand(&items));
    assert!(state_at(2).should_prompt_expand(&items));

    let mut dismissed = state_at(2);
    dismissed.dismiss();
    assert_eq!(dismissed.dismissed_radius(), Some(2));
    assert!(!dismissed.should_prompt_expand(&items));

    dismissed.decrement();
    assert!(dismissed.should_prompt_expand(&items));
}

#[test]
fn expand_reaches_nearest_item() {
    let items = vec![spot("far", 40.0), spot("farther", 60.0)];
    let mut state = state_at(2);
    state.dismiss();
    state.expand(&items);

    assert_eq!(state.radius_km(), 40);
    assert_eq!(state.dismissed_radius(), None);
    assert!(!compute_visible(&items, state.radius_km()).is_empty());
}

#[test]
fn expand_rounds_fractional_nearest_up() {
    let items = vec![spot("odd", 17.2)];
    let mut state = state_at(3);
    state.expand(&items);
    assert_eq!(state.radius_km(), 18);
}

#[test]
fn expand_never_exceeds_ceiling() {
    let items = vec![spot("remote", 250.0)];
    let mut state = state_at(97);
    state.expand(&items);
    assert_eq!(state.radius_km(), MAX_RADIUS_KM);
}

#[test]
fn expand_on_empty_catalog_advances_by_step() {
    let items: Vec<Spot> = Vec::new();
    let mut state = state_at(10);
    state.dismiss();
    state.expand(&items);

    assert_eq!(state.radius_km(), 10 + EXPAND_STEP_KM);
    assert_eq!(state.dismissed_radius(), None);
    assert!(state.should_prompt_expand(&items));
}

#[test]
fn reconcile_forgets_dismissal_only_when_results_exist() {
    let items = two_spots();

    let mut empty = state_at(2);
    empty.dismiss();
    empty.reconcile(&items);
    assert_eq!(empty.dismissed_radius(), Some(2));

    let mut filled = state_at(2);
    filled.dismiss();
    filled.increment();
    filled.reconcile(&items);
    assert_eq!(filled.dismissed_radius(), None);
}

#[test]
fn initial_screen_shows_nearby_items_without_prompt() {
    let filter = filter_over(two_spots());
    let view = filter.view();

    assert_eq!(view.radius_km, DEFAULT_RADIUS_KM);
    assert_eq!(ids(&view.visible_items), vec!["a"]);
    assert!(!view.show_prompt);
    assert_eq!(filter.phase(), FilterPhase::Filtered);
}

#[test]
fn dismissing_then_shrinking_prompts_again() {
    let mut filter = filter_over(two_spots());
    for _ in 0..8 {
        filter.decrement();
    }

    let view = filter.view();
    assert_eq!(view.radius_km, 2);
    assert!(view.visible_items.is_empty());
    assert!(view.show_prompt);
    assert_eq!(filter.phase(), FilterPhase::PromptingExpand);

    filter.dismiss();
    assert!(!filter.show_prompt());
    assert_eq!(filter.view().radius_km, 2);

    filter.decrement();
    let view = filter.view();
    assert_eq!(view.radius_km, 1);
    assert!(view.visible_items.is_empty());
    assert!(view.show_prompt);
}

#[test]
fn expand_from_prompt_reveals_nearest_item() {
    let mut filter = filter_over(two_spots());
    for _ in 0..8 {
        filter.decrement();
    }
    assert!(filter.show_prompt());

    filter.expand();
    let view = filter.view();
    assert_eq!(view.radius_km, 7);
    assert_eq!(ids(&view.visible_items), vec!["a"]);
    assert!(!view.show_prompt);
}

#[test]
fn returning_to_dismissed_radius_through_results_prompts_again() {
    let mut filter = filter_over(two_spots());
    for _ in 0..8 {
        filter.decrement();
    }
    filter.dismiss();
    assert_eq!(filter.state().dismissed_radius(), Some(2));

    filter.increment();
    assert_eq!(filter.view().radius_km, 3);
    assert_eq!(filter.state().dismissed_radius(), None);

    filter.decrement();
    assert!(filter.show_prompt());
}

#[test]
fn returning_to_dismissed_radius_through_empty_radius_stays_quiet() {
    let mut filter = filter_over(two_spots());
    for _ in 0..8 {
        filter.decrement();
    }
    filter.dismiss();
    filter.decrement();
    assert!(filter.show_prompt());

    filter.increment();
    assert_eq!(filter.view().radius_km, 2);
    assert!(!filter.show_prompt());
}

#[test]
fn dismissal_memory_holds_only_latest_radius() {
    let mut filter = filter_over(two_spots());
    for _ in 0..8 {
        filter.decrement();
    }
    filter.dismiss();

    filter.decrement();
    assert!(filter.show_prompt());
    filter.dismiss();
    assert!(!filter.show_prompt());
    assert_eq!(filter.state().dismissed_radius(), Some(1));

    filter.increment();
    let view = filter.view();
    assert_eq!(view.radius_km, 2);
    assert!(view.visible_items.is_empty());
    assert!(view.show_prompt);
    assert_eq!(filter.phase(), FilterPhase::PromptingExpand);
}

#[test]
fn empty_catalog_prompts_at_every_radius() {
    let mut filter = filter_over(Vec::new());
    assert!(filter.show_prompt());
    assert_eq!(filter.view().radius_km, DEFAULT_RADIUS_KM);

    filter.expand();
    assert_eq!(filter.view().radius_km, DEFAULT_RADIUS_KM + EXPAND_STEP_KM);
    assert!(filter.view().visible_items.is_empty());
    assert!(filter.show_prompt());
}

#[test]
fn with_state_starts_from_given_radius() {
    let catalog = Catalog::new(two_spots()).expect("valid test catalog");
    let filter = RadiusFilter::with_state("test", catalog, FilterState::with_radius(15));

    assert_eq!(ids(&filter.visible()), vec!["a", "b"]);
    assert_eq!(filter.catalog().len(), 2);
}
