use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven by the generators. Implementations hold
/// whatever snapshot they need to turn a canvas pixel into a value.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
