//! Points in polar coordinates, their cartesian conversions, and measurements
//! derived from them: arc length, sector area, distance, tangent slope,
//! curvature and curve membership.

pub mod point;
pub mod polar;

pub use point::*;
pub use polar::*;
