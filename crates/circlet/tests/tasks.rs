//! Integration tests for the public task surface.
//!
//! These only touch public items, the way a downstream caller would.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use circlet::Circle;
use circlet::tasks::{
    EARTH_RADIUS_M, PoolSite, ROPE_EXTENSION_M, pool_expenses, pool_expenses_for, rope_clearance,
    rope_clearance_for,
};

#[test]
fn rope_clearance_larger_extension() {
    let expected = 100.0 / (2.0 * PI);
    assert_abs_diff_eq!(rope_clearance_for(5000.0, 100.0), expected, epsilon = 1e-6);
}

#[test]
fn rope_clearance_fixed_inputs_match_parameterized() {
    let fixed = rope_clearance_for(EARTH_RADIUS_M, ROPE_EXTENSION_M);
    assert_eq!(rope_clearance(), fixed);
}

#[test]
fn pool_expenses_fixed_inputs_match_parameterized() {
    assert_eq!(pool_expenses(), pool_expenses_for(&PoolSite::default()));
}

#[test]
fn pool_expenses_other_sites() {
    let sites = [
        PoolSite {
            pool_radius: 4.0,
            walkway_width: 2.0,
            concrete_price: 1200.0,
            fence_price: 2500.0,
        },
        PoolSite {
            pool_radius: 1.0,
            walkway_width: 0.5,
            concrete_price: 800.0,
            fence_price: 1500.0,
        },
    ];

    for site in sites {
        let inner = Circle::new(site.pool_radius);
        let outer = Circle::new(site.pool_radius + site.walkway_width);
        let e = pool_expenses_for(&site);

        let concrete = (outer.area() - inner.area()) * site.concrete_price;
        let fence = outer.circumference() * site.fence_price;
        assert_abs_diff_eq!(e.concrete, concrete, epsilon = 1e-6);
        assert_abs_diff_eq!(e.fence, fence, epsilon = 1e-6);
    }
}

#[test]
fn pool_expenses_serialize() {
    let json = serde_json::to_value(pool_expenses()).unwrap();
    let concrete = json["concrete"].as_f64().unwrap();
    let fence = json["fence"].as_f64().unwrap();
    assert_abs_diff_eq!(concrete, 7000.0 * PI, epsilon = 1e-2);
    assert_abs_diff_eq!(fence, 16000.0 * PI, epsilon = 1e-2);
}
