//! Two worked problems built on [`Circle`].
//!
//! - **Rope clearance**: a rope hugs the equator and is lengthened by one
//!   metre. How high does it float off the ground all the way round?
//! - **Pool expenses**: a round pool gets a concrete walkway ring and a
//!   fence along the walkway's outer edge. What do both cost?
//!
//! Each problem has a zero-argument form with the classic inputs and a
//! `_for` form taking the inputs explicitly. The zero-argument forms just
//! delegate, so both give identical results for the same numbers.

use serde::Serialize;

use crate::circle::Circle;

/// Earth's equatorial radius in metres (6378.1 km).
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;
/// How much the rope is lengthened, in metres.
pub const ROPE_EXTENSION_M: f64 = 1.0;

pub const POOL_RADIUS: f64 = 3.0;
pub const WALKWAY_WIDTH: f64 = 1.0;
/// Price of concrete per unit of area.
pub const CONCRETE_PRICE: f64 = 1000.0;
/// Price of fence per unit of length.
pub const FENCE_PRICE: f64 = 2000.0;

/// Rope clearance for the Earth and a one-metre extension.
///
/// Works out to `1 / 2π` metres (about 16 cm), whatever the planet's size.
///
/// # Example
/// ```
/// let gap = circlet::rope_clearance();
/// assert!((gap - 1.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-5);
/// ```
pub fn rope_clearance() -> f64 {
    rope_clearance_for(EARTH_RADIUS_M, ROPE_EXTENSION_M)
}

/// Clearance gained when a rope around a circle of `planet_radius` is
/// lengthened by `extra_length`.
///
/// Both inputs and the result share one unit. Pass the radius in metres
/// for a one-metre extension, not kilometres.
///
/// Both circles are built explicitly rather than using `Δr = Δc / 2π`.
pub fn rope_clearance_for(planet_radius: f64, extra_length: f64) -> f64 {
    let planet = Circle::new(planet_radius);

    let mut rope = planet;
    rope.apply_circumference(planet.circumference() + extra_length);

    let clearance = rope.radius() - planet.radius();
    log::debug!("rope clearance: radius={planet_radius}, extra={extra_length} -> {clearance}");
    clearance
}

/// Inputs to the pool problem.
///
/// `Default` gives the classic numbers: a 3 m pool, 1 m walkway,
/// concrete at 1000 and fence at 2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSite {
    /// Radius of the water surface
    pub pool_radius: f64,
    /// Width of the concrete ring around the pool
    pub walkway_width: f64,
    /// Cost per unit area of walkway
    pub concrete_price: f64,
    /// Cost per unit length of fence
    pub fence_price: f64,
}

impl Default for PoolSite {
    fn default() -> Self {
        Self {
            pool_radius: POOL_RADIUS,
            walkway_width: WALKWAY_WIDTH,
            concrete_price: CONCRETE_PRICE,
            fence_price: FENCE_PRICE,
        }
    }
}

/// What the walkway and fence cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolExpenses {
    pub concrete: f64,
    pub fence: f64,
}

impl PoolExpenses {
    #[inline]
    pub fn total(&self) -> f64 {
        self.concrete + self.fence
    }
}

/// Pool expenses for the default [`PoolSite`].
pub fn pool_expenses() -> PoolExpenses {
    pool_expenses_for(&PoolSite::default())
}

/// Concrete covers the ring between the pool and the walkway's outer
/// edge. The fence runs along that outer edge.
pub fn pool_expenses_for(site: &PoolSite) -> PoolExpenses {
    let pool = Circle::new(site.pool_radius);
    let outer = Circle::new(site.pool_radius + site.walkway_width);

    let ring_area = outer.area() - pool.area();
    let expenses = PoolExpenses {
        concrete: ring_area * site.concrete_price,
        fence: outer.circumference() * site.fence_price,
    };

    log::debug!("pool expenses: {site:?} -> {expenses:?}");
    expenses
}
