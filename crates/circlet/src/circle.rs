//! The circle value type.
//!
//! ## Rust Lesson #2: Private fields
//!
//! In JS any code can write `circle.radius = 5` and leave the area stale.
//! Here the fields are private to this module, so the only way to change a
//! circle is through the `apply_*` methods, which always rewrite all three.
//! Outside code can read the values but never break the relationship
//! `circumference = 2πr`, `area = πr²`.

use std::f64::consts::PI;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// One of the three quantities a circle can be derived from.
///
/// Deserializes from a single-key object such as `{"radius": 2.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Radius(f64),
    Circumference(f64),
    Area(f64),
}

/// A circle holding its radius, circumference and area.
///
/// Inputs are not validated. A negative radius keeps its sign (negative
/// circumference, positive area) and a negative area yields a NaN radius.
///
/// ## Rust Lesson #3: `#[serde(from = ...)]`
///
/// Serializing writes all three fields. Deserializing goes through a
/// private `CircleRepr` and `From<CircleRepr>`, so a circle read from JSON
/// is always re-derived from one value and can't arrive inconsistent.
/// Both the written form (re-derived from `radius`) and a single
/// [`Measure`] are accepted.
///
/// # Example
/// ```
/// use circlet::Circle;
///
/// let mut c = Circle::new(1.0);
/// c.apply_circumference(20.0);
/// assert!((c.radius() - 20.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CircleRepr")]
pub struct Circle {
    radius: f64,
    circumference: f64,
    area: f64,
}

impl Circle {
    /// Create a circle from its radius.
    pub fn new(radius: f64) -> Self {
        let mut circle = Self::default();
        circle.apply_radius(radius);
        circle
    }

    /// Create a circle from its circumference.
    pub fn from_circumference(circumference: f64) -> Self {
        let mut circle = Self::default();
        circle.apply_circumference(circumference);
        circle
    }

    /// Create a circle from its area.
    pub fn from_area(area: f64) -> Self {
        let mut circle = Self::default();
        circle.apply_area(area);
        circle
    }

    /// Create a circle from whichever measure is given.
    pub fn from_measure(measure: Measure) -> Self {
        let mut circle = Self::default();
        circle.apply(measure);
        circle
    }

    /// Set the radius and re-derive circumference and area.
    pub fn apply_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.circumference = 2.0 * PI * radius;
        self.area = PI * radius * radius;
    }

    /// Set the circumference and re-derive radius and area.
    pub fn apply_circumference(&mut self, circumference: f64) {
        self.circumference = circumference;
        self.radius = circumference / (2.0 * PI);
        self.area = PI * self.radius * self.radius;
    }

    /// Set the area and re-derive radius and circumference.
    ///
    /// A negative area gives NaN for the other two fields.
    pub fn apply_area(&mut self, area: f64) {
        self.area = area;
        self.radius = (area / PI).sqrt();
        self.circumference = 2.0 * PI * self.radius;
    }

    /// Dispatch to the matching `apply_*` method.
    ///
    /// ## Rust Lesson #4: Exhaustive match
    ///
    /// Adding a fourth `Measure` variant makes this a compile error until
    /// it is handled here. A JS `switch` would silently fall through.
    pub fn apply(&mut self, measure: Measure) {
        match measure {
            Measure::Radius(r) => self.apply_radius(r),
            Measure::Circumference(c) => self.apply_circumference(c),
            Measure::Area(s) => self.apply_area(s),
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
}

impl From<Measure> for Circle {
    fn from(measure: Measure) -> Self {
        Self::from_measure(measure)
    }
}

/// Accepted input shapes when deserializing a [`Circle`].
///
/// `Stored` is what `Serialize` writes. Only `radius` is read from it and
/// the other fields are ignored, then re-derived.
#[derive(Deserialize)]
#[serde(untagged)]
enum CircleRepr {
    Stored { radius: f64 },
    One(Measure),
}

impl From<CircleRepr> for Circle {
    fn from(repr: CircleRepr) -> Self {
        match repr {
            CircleRepr::Stored { radius } => Self::new(radius),
            CircleRepr::One(measure) => Self::from_measure(measure),
        }
    }
}

// ============================================================================
// APPROXIMATE EQUALITY
// ============================================================================
//
// Component-wise over all three fields. Lets tests write
// `assert_abs_diff_eq!(a, b, epsilon = 1e-9)` on whole circles.

impl AbsDiffEq for Circle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.radius, &other.radius, epsilon)
            && f64::abs_diff_eq(&self.circumference, &other.circumference, epsilon)
            && f64::abs_diff_eq(&self.area, &other.area, epsilon)
    }
}

impl RelativeEq for Circle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let eq = |a: &f64, b: &f64| f64::relative_eq(a, b, epsilon, max_relative);
        eq(&self.radius, &other.radius)
            && eq(&self.circumference, &other.circumference)
            && eq(&self.area, &other.area)
    }
}
