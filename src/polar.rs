use crate::{PointF32, PointF64};
use flo_curves::Coordinate2D;
use std::f64::{NAN, consts::PI};

/// Tolerance used by [`PolarPoint::is_on_curve_default`]
pub const DEFAULT_CURVE_TOLERANCE: f64 = 1e-10;

const TWO_PI: f64 = 2.0 * PI;

/// A point in 2D space given by its distance from the origin and its angle
/// (in radians) from the positive x-axis.
///
/// Neither field is validated or normalized on construction. Operations that
/// cannot produce a meaningful value return `NAN` (or `None` for conversions)
/// instead of panicking.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub radius: f64,
    pub theta: f64,
}

impl PolarPoint {
    #[inline]
    pub const fn new(radius: f64, theta: f64) -> Self {
        Self { radius, theta }
    }

    /// Converts a single precision cartesian point. Returns `None` if either
    /// coordinate is NaN.
    pub fn from_cartesian(point: PointF32) -> Option<Self> {
        Self::from_point(point.to_point_f64())
    }

    /// Same as `from_cartesian`, at double precision.
    /// `theta` lies in (-PI, PI] following `atan2`.
    pub fn from_point(point: PointF64) -> Option<Self> {
        if point.is_nan() {
            log::trace!("no polar point for NaN coordinate ({}, {})", point.x, point.y);
            return None;
        }
        Some(Self {
            radius: (point.x * point.x + point.y * point.y).sqrt(),
            theta: point.y.atan2(point.x),
        })
    }

    /// Converts any `flo_curves` 2D coordinate
    pub fn from_coordinate<C: Coordinate2D>(coordinate: &C) -> Option<Self> {
        Self::from_point(PointF64::new(coordinate.x(), coordinate.y()))
    }

    /// The cartesian point, narrowed to single precision.
    /// Use [`PolarPoint::to_point`] to keep full precision.
    pub fn to_cartesian(&self) -> PointF32 {
        self.to_point().to_point_f32()
    }

    pub fn to_point(&self) -> PointF64 {
        PointF64 {
            x: self.radius * self.theta.cos(),
            y: self.radius * self.theta.sin(),
        }
    }

    /// A copy of this point with `theta` mapped into [0, 2*PI)
    pub fn normalized(&self) -> Self {
        Self {
            radius: self.radius,
            theta: normalize_angle(self.theta),
        }
    }

    /// Slope `-x / y` of the line perpendicular to the radius vector, computed
    /// on the single precision cartesian point.
    ///
    /// Returns `NAN` if `|x|` is below machine epsilon. Note the guard tests `x`
    /// while the division is by `y`; `y == 0` with `x != 0` yields an infinity.
    pub fn tangent_slope(&self) -> f64 {
        let point = self.to_cartesian().to_point_f64();
        if point.x.abs() < f64::EPSILON {
            log::trace!("tangent slope undefined at x = {}", point.x);
            return NAN;
        }
        -point.x / point.y
    }

    /// Curvature of the circle through this point centered at the origin
    pub fn curvature(&self) -> f64 {
        if self.radius < f64::EPSILON {
            log::trace!("curvature undefined for radius {}", self.radius);
            return NAN;
        }
        1.0 / self.radius
    }

    /// Stands in for dr/dθ. There is no derivative information stored in a
    /// single point, so this is simply the radius.
    #[inline]
    pub fn polar_slope(&self) -> f64 {
        self.radius
    }

    /// True if `|radius - radius_function(theta)| < tolerance`
    pub fn is_on_curve<F>(&self, radius_function: F, tolerance: f64) -> bool
    where
        F: Fn(f64) -> f64,
    {
        let expected = radius_function(self.theta);
        (self.radius - expected).abs() < tolerance
    }

    #[inline]
    pub fn is_on_curve_default<F>(&self, radius_function: F) -> bool
    where
        F: Fn(f64) -> f64,
    {
        self.is_on_curve(radius_function, DEFAULT_CURVE_TOLERANCE)
    }
}

impl From<PolarPoint> for PointF64 {
    fn from(p: PolarPoint) -> Self {
        p.to_point()
    }
}

/// Length of the arc of radius `radius` swept from `start_theta` to `end_theta`.
/// The angles are not normalized. Returns `NAN` for a negative radius.
pub fn arc_length(radius: f64, start_theta: f64, end_theta: f64) -> f64 {
    if radius < 0.0 {
        log::trace!("arc length undefined for radius {}", radius);
        return NAN;
    }
    radius * (end_theta - start_theta).abs()
}

/// Area of the sector of radius `radius` swept from `start_theta` to `end_theta`.
/// Returns `NAN` for a negative radius.
pub fn sector_area(radius: f64, start_theta: f64, end_theta: f64) -> f64 {
    if radius < 0.0 {
        log::trace!("sector area undefined for radius {}", radius);
        return NAN;
    }
    0.5 * radius * radius * (end_theta - start_theta).abs()
}

/// Euclidean distance between two polar points, or `NAN` if either is absent
pub fn distance(p1: Option<&PolarPoint>, p2: Option<&PolarPoint>) -> f64 {
    match (p1, p2) {
        (Some(p1), Some(p2)) => p1.to_point().distance_to(p2.to_point()),
        _ => NAN,
    }
}

/// Maps any angle into [0, 2*PI)
pub fn normalize_angle(theta: f64) -> f64 {
    let theta = theta % TWO_PI;
    if theta < 0.0 {
        let wrapped = theta + TWO_PI;
        // a tiny negative remainder rounds up to exactly 2*PI
        if wrapped >= TWO_PI { 0.0 } else { wrapped }
    } else {
        theta
    }
}
