/// Result of iterating a single plane point.
///
/// `smooth_index` is only meaningful when `escaped` is true. Bounded points
/// carry their iteration count there so the value is never uninitialised.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeOutcome {
    pub iteration_count: u32,
    pub escaped: bool,
    pub smooth_index: f64,
}

impl EscapeOutcome {
    #[must_use]
    pub fn escaped(iteration_count: u32, smooth_index: f64) -> Self {
        Self {
            iteration_count,
            escaped: true,
            smooth_index,
        }
    }

    #[must_use]
    pub fn bounded(iteration_count: u32) -> Self {
        Self {
            iteration_count,
            escaped: false,
            smooth_index: f64::from(iteration_count),
        }
    }
}
