//! Angle wrapping helpers.

use super::Real;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Wrap an angle into `(-π, π]`.
pub fn bound_pi(angle: Real) -> Real {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Wrap an angle into `(-π/2, π/2]`, treating `θ` and `θ + π` as equal.
///
/// Used for undirected quantities such as an ellipse's major axis.
pub fn bound_half_pi(angle: Real) -> Real {
    let mut a = angle % PI;
    if a <= -FRAC_PI_2 {
        a += PI;
    } else if a > FRAC_PI_2 {
        a -= PI;
    }
    a
}

/// Signed smallest difference `a - b`, wrapped into `(-π, π]`.
pub fn angle_minus(a: Real, b: Real) -> Real {
    bound_pi(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_pi_range() {
        assert!((bound_pi(3.0 * PI - 0.5) - (PI - 0.5)).abs() < 1e-12);
        assert!((bound_pi(-PI) - PI).abs() < 1e-12);
        assert!((bound_pi(0.5) - 0.5).abs() < 1e-12);
        assert!((bound_pi(-7.0) - (-7.0 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn wraps_into_half_pi_range() {
        assert!((bound_half_pi(PI - 0.1) + 0.1).abs() < 1e-12);
        assert!((bound_half_pi(-FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((bound_half_pi(0.3 + 2.0 * PI) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn minus_takes_short_way_round() {
        let d = angle_minus(PI - 0.1, -PI + 0.1);
        assert!((d + 0.2).abs() < 1e-12);
    }
}
