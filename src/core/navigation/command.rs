use crate::core::data::point::Point;

/// A single user intent against the viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    ZoomIn(Point),
    ZoomOut(Point),
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    Reset,
    AdjustIterations(i64),
}
