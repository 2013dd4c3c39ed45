//! Property tests for viewport navigation.
//!
//! 1. Reset restores the default view from any navigation history.
//! 2. Zooming in then out around the same pixel restores extents and budget.
//! 3. The iteration budget never drops below the configured floor.
//! 4. Refused steps leave the viewport untouched.

use fractal_navigator::{CanvasSize, ExplorerConfig, NavigationCommand, Point, Viewport};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn canvas() -> CanvasSize {
    CanvasSize::new(1920, 1008).unwrap()
}

fn default_viewport() -> Viewport {
    Viewport::new(&ExplorerConfig::default()).unwrap()
}

fn pixel_strategy() -> impl Strategy<Value = Point> {
    (0i32..1920, 0i32..1008).prop_map(|(x, y)| Point { x, y })
}

fn command_strategy() -> impl Strategy<Value = NavigationCommand> {
    prop_oneof![
        pixel_strategy().prop_map(NavigationCommand::ZoomIn),
        pixel_strategy().prop_map(NavigationCommand::ZoomOut),
        Just(NavigationCommand::PanUp),
        Just(NavigationCommand::PanDown),
        Just(NavigationCommand::PanLeft),
        Just(NavigationCommand::PanRight),
        Just(NavigationCommand::Reset),
        (-500i64..=500).prop_map(NavigationCommand::AdjustIterations),
    ]
}

fn navigated(commands: &[NavigationCommand]) -> Viewport {
    let mut viewport = default_viewport();

    for &command in commands {
        viewport.apply(command, canvas()).unwrap();
    }

    viewport
}

// ── Reset ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reset_restores_defaults(commands in prop::collection::vec(command_strategy(), 0..30)) {
        let mut viewport = navigated(&commands);

        viewport.reset();

        prop_assert_eq!(viewport, default_viewport());
        prop_assert_eq!(viewport.max_iterations(), 100);
        prop_assert_eq!(viewport.zoom_ratio(), 1.0);
    }
}

// ── Zoom symmetry ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zoom_in_then_out_restores_extents_and_budget(
        commands in prop::collection::vec(command_strategy(), 0..20),
        pixel in pixel_strategy(),
    ) {
        let mut viewport = navigated(&commands);
        let before = viewport;

        viewport.zoom_in(pixel, canvas()).unwrap();
        viewport.zoom_out(pixel, canvas()).unwrap();

        prop_assert_eq!(viewport.width(), before.width());
        prop_assert_eq!(viewport.height(), before.height());
        prop_assert_eq!(viewport.max_iterations(), before.max_iterations());
    }
}

// ── Budget floor ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn budget_never_drops_below_floor(deltas in prop::collection::vec(-1000i64..=1000, 0..50)) {
        let mut viewport = default_viewport();

        for delta in deltas {
            viewport.adjust_iterations(delta);
            prop_assert!(viewport.max_iterations() >= 100);
        }
    }

    #[test]
    fn navigation_keeps_extents_positive(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let viewport = navigated(&commands);

        prop_assert!(viewport.width() > 0.0);
        prop_assert!(viewport.height() > 0.0);
        prop_assert!(viewport.max_iterations() >= 100);
    }
}

// ── Refused steps ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zoom_outside_canvas_is_refused(x in 1920i32..4000, y in 0i32..1008) {
        let mut viewport = default_viewport();
        let before = viewport;

        let point = Point { x, y };
        prop_assert!(viewport.zoom_in(point, canvas()).is_err());
        prop_assert_eq!(viewport, before);
    }
}
