use glam::Vec2;

/// Step `position` straight toward `target` by exactly `speed * dt`.
///
/// The step length does not depend on the remaining distance, so a pursuer
/// that is closer than one step passes through the target and turns around
/// next frame. A pursuer sitting exactly on its target stays put.
pub fn pursue(position: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    let direction = (target - position).normalize_or_zero();
    position + direction * (speed * dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn moves_exactly_speed_times_dt() {
        let start = Vec2::new(300.0, 0.0);
        let next = pursue(start, Vec2::ZERO, 25.0, 0.1);
        assert_relative_eq!(start.distance(next), 2.5, epsilon = 1e-5);
    }

    #[test]
    fn heads_toward_target() {
        let start = Vec2::new(-10.0, 40.0);
        let target = Vec2::new(20.0, 0.0);
        let next = pursue(start, target, 25.0, 0.5);
        let moved = (next - start).normalize();
        let wanted = (target - start).normalize();
        assert_relative_eq!(moved.x, wanted.x, epsilon = 1e-5);
        assert_relative_eq!(moved.y, wanted.y, epsilon = 1e-5);
    }

    #[test]
    fn step_length_ignores_distance() {
        let near = pursue(Vec2::new(1000.0, 0.0), Vec2::ZERO, 25.0, 0.2);
        let far = pursue(Vec2::new(10.0, 0.0), Vec2::ZERO, 25.0, 0.2);
        assert_relative_eq!(near.x, 995.0, epsilon = 1e-3);
        assert_relative_eq!(far.x, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn overshoots_when_closer_than_one_step() {
        let next = pursue(Vec2::new(1.0, 0.0), Vec2::ZERO, 25.0, 0.2);
        assert_relative_eq!(next.x, -4.0, epsilon = 1e-5);
    }

    #[test]
    fn coincident_position_does_not_move() {
        let p = Vec2::new(3.0, -7.0);
        let next = pursue(p, p, 25.0, 0.1);
        assert_eq!(next, p);
        assert!(next.is_finite());
    }

    #[test]
    fn zero_dt_does_not_move() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(pursue(p, Vec2::ZERO, 25.0, 0.0), p);
    }
}
