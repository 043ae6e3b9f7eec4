//! Frame-rate independent exponential smoothing.
//!
//! Each call moves a value a fraction `1 - 2^(-rate * dt)` of the remaining
//! distance toward its target, so the remaining distance halves every
//! `1 / rate` seconds regardless of how time is sliced into frames. The
//! factor stays in `[0, 1)` for non-negative inputs, so values never
//! overshoot.

use glam::Vec2;

/// Distance below which a value snaps onto its target.
pub const SNAP_TOLERANCE: f32 = 0.001;

/// Fraction of the remaining distance covered after `dt` seconds.
pub fn decay_factor(rate: f32, dt: f32) -> f32 {
    1.0 - 2.0_f32.powf(-rate * dt)
}

/// Move `value` toward `target`. Returns `true` once the value has snapped
/// exactly onto the target.
pub fn animate_towards(value: &mut f32, target: f32, dt: f32, rate: f32) -> bool {
    *value += (target - *value) * decay_factor(rate, dt);
    if (*value - target).abs() < SNAP_TOLERANCE {
        *value = target;
        return true;
    }
    false
}

/// Per-axis [`animate_towards`]. Returns `true` when both axes have
/// converged.
pub fn animate_vec2_towards(value: &mut Vec2, target: Vec2, dt: f32, rate: f32) -> bool {
    let x_done = animate_towards(&mut value.x, target.x, dt, rate);
    let y_done = animate_towards(&mut value.y, target.y, dt, rate);
    x_done && y_done
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_delta_leaves_value_unchanged() {
        let mut v = 10.0;
        assert!(!animate_towards(&mut v, 50.0, 0.0, 3.0));
        assert_eq!(v, 10.0);
    }

    #[test]
    fn one_half_life_covers_half_the_distance() {
        let mut v = 0.0;
        animate_towards(&mut v, 100.0, 1.0 / 3.0, 3.0);
        assert_relative_eq!(v, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn snaps_inside_tolerance() {
        let mut v = 4.9995;
        assert!(animate_towards(&mut v, 5.0, 0.0, 3.0));
        assert_eq!(v, 5.0);
    }

    #[test]
    fn does_not_snap_outside_tolerance() {
        let mut v = 4.99;
        assert!(!animate_towards(&mut v, 5.0, 0.0, 3.0));
        assert_eq!(v, 4.99);
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        for &(start, target) in &[(0.0_f32, 100.0_f32), (250.0, -40.0), (-3.0, -2.0)] {
            let mut v = start;
            let mut prev_dist = (target - v).abs();
            let mut converged = false;
            for _ in 0..10_000 {
                converged = animate_towards(&mut v, target, 1.0 / 60.0, 3.0);
                let dist = (target - v).abs();
                // Same side of the target as the start.
                assert!((v - target) * (start - target) >= 0.0);
                if converged {
                    break;
                }
                assert!(dist < prev_dist, "distance must shrink: {dist} vs {prev_dist}");
                prev_dist = dist;
            }
            assert!(converged);
            assert_eq!(v, target);
        }
    }

    #[test]
    fn frame_rate_independent() {
        let mut coarse = 0.0;
        animate_towards(&mut coarse, 100.0, 0.5, 2.0);

        let mut fine = 0.0;
        for _ in 0..50 {
            animate_towards(&mut fine, 100.0, 0.01, 2.0);
        }
        assert_relative_eq!(coarse, fine, epsilon = 1e-2);
    }

    #[test]
    fn vec2_reports_combined_convergence() {
        let mut v = Vec2::new(0.0, 9.9999);
        let done = animate_vec2_towards(&mut v, Vec2::new(100.0, 10.0), 0.1, 3.0);
        assert!(!done);
        // y snapped even though x has not.
        assert_eq!(v.y, 10.0);
        assert!(v.x > 0.0 && v.x < 100.0);

        let mut w = Vec2::new(1.0, 2.0);
        assert!(animate_vec2_towards(&mut w, Vec2::new(1.0, 2.0), 0.1, 3.0));
    }
}
