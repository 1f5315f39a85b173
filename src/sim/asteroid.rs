//! Asteroids: circular bodies that bounce off the play field edges
//!
//! Area stands in for mass, so kinetic energy is `½·area·|v|²`. Both feed the
//! fragmentation pass in the director.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::rect::Rect;

/// A live asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: KinematicBody,
    radius: f32,
    area: f32,
    energy: f32,
    /// Set once the asteroid has been fully inside the field; never cleared
    active: bool,
    /// Spawned by the level scheduler (fragments are not)
    primary: bool,
    field: Rect,
}

impl Asteroid {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, diameter: f32, field: Rect, primary: bool) -> Self {
        let radius = (diameter / 2.0).max(0.0);
        let area = std::f32::consts::PI * radius * radius;
        Self::build(id, pos, vel, radius, area, field, primary)
    }

    /// Fragment of `parent` with the given area, starting at the parent's position
    ///
    /// Fragments take the parent's activity so they bounce straight away.
    pub fn fragment_of(id: u32, parent: &Asteroid, vel: Vec2, area: f32) -> Self {
        let radius = (area.max(0.0) / std::f32::consts::PI).sqrt();
        let mut child = Self::build(id, parent.body.pos, vel, radius, area, parent.field, false);
        child.active = parent.active;
        child
    }

    fn build(id: u32, pos: Vec2, vel: Vec2, radius: f32, area: f32, field: Rect, primary: bool) -> Self {
        let energy = 0.5 * area * vel.length_squared();
        debug_assert!(area >= 0.0 && energy >= 0.0, "negative area {area} or energy {energy}");
        let direction = crate::vector_heading(vel);
        Self {
            id,
            body: KinematicBody::new(pos, vel, direction, Vec2::splat(radius * 2.0)),
            radius,
            area,
            energy,
            active: false,
            primary,
            field,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.area
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        self.body.rect()
    }

    /// Integrate, then apply the edge state machine
    ///
    /// Inactive asteroids are still entering the field and never reflect, so
    /// the trailing edge cannot bounce them back out on arrival. Active ones
    /// reflect once their rect reaches an edge and are pulled back inside, so
    /// no frame time can carry them out of the field.
    pub fn update(&mut self, dt_ms: f32) {
        self.body.integrate(dt_ms);

        if self.active {
            let field = self.field;
            let rect = *self.body.rect();
            let vel = &mut self.body.vel;
            // +up velocity: positive heads for the top edge
            if (rect.top <= field.top && vel.y > 0.0) || (rect.bottom() >= field.bottom() && vel.y < 0.0) {
                vel.y = -vel.y;
            }
            if (rect.left <= field.left && vel.x < 0.0) || (rect.right() >= field.right() && vel.x > 0.0) {
                vel.x = -vel.x;
            }
            self.body.direction = crate::vector_heading(self.body.vel);
            self.keep_inside();
        } else if self.field.contains(self.body.rect()) {
            self.active = true;
        }
    }

    fn keep_inside(&mut self) {
        let field = self.field;
        let r = self.radius.min(field.width / 2.0).min(field.height / 2.0);
        let pos = self.body.pos;
        let clamped = Vec2::new(
            pos.x.clamp(field.left + r, field.right() - r),
            pos.y.clamp(field.top + r, field.bottom() - r),
        );
        if clamped != pos {
            self.body.set_position(clamped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_area_and_energy() {
        let a = Asteroid::new(1, Vec2::new(100.0, 100.0), Vec2::new(3.0, 4.0), 20.0, field(), true);
        let expected_area = std::f32::consts::PI * 100.0;
        assert!((a.area() - expected_area).abs() < 1e-3);
        assert!((a.energy() - 0.5 * expected_area * 25.0).abs() < 1e-2);
        assert!(a.is_primary());
        assert!(!a.is_active());
    }

    #[test]
    fn test_activates_once_fully_inside() {
        // Entering from the left edge, moving right
        let mut a = Asteroid::new(1, Vec2::new(-10.0, 300.0), Vec2::new(100.0, 0.0), 20.0, field(), true);
        a.update(100.0); // x = 0, straddling
        assert!(!a.is_active());
        // No reflection while inactive even though the left strip is touched
        assert!(a.body.vel.x > 0.0);
        a.update(150.0); // x = 15, rect [5, 25]
        assert!(a.is_active());
        a.update(1000.0);
        assert!(a.is_active());
    }

    #[test]
    fn test_active_reflects_off_edges() {
        let mut a = Asteroid::new(1, Vec2::new(400.0, 300.0), Vec2::new(200.0, 200.0), 20.0, field(), true);
        a.update(0.0);
        assert!(a.is_active());

        // Push it against the right edge
        a.body.set_position(Vec2::new(795.0, 300.0));
        a.update(0.0);
        assert!(a.body.vel.x < 0.0);
        // Still touching the strip next frame, but already heading away
        a.update(0.0);
        assert!(a.body.vel.x < 0.0);

        // Top edge with +up velocity
        a.body.set_position(Vec2::new(400.0, 5.0));
        a.update(0.0);
        assert!(a.body.vel.y < 0.0);
    }

    #[test]
    fn test_fast_fragment_stays_in_field() {
        // 1600 px/s moves 25.6 px per frame, more than the fragment's own size
        let mut a = Asteroid::new(1, Vec2::new(780.0, 300.0), Vec2::new(1600.0, 700.0), 10.0, field(), false);
        a.update(0.0);
        assert!(a.is_active());
        for frame in 0..10_000 {
            a.update(16.0);
            assert!(field().contains(a.rect()), "frame {frame}: escaped to {:?}", a.center());
        }
        // Still moving at full speed
        assert!((a.body.speed() - Vec2::new(1600.0, 700.0).length()).abs() < 1e-2);
    }

    #[test]
    fn test_long_frame_reflects_from_past_the_edge() {
        let mut a = Asteroid::new(1, Vec2::new(400.0, 300.0), Vec2::new(-300.0, 0.0), 20.0, field(), true);
        a.update(0.0);
        // 2 s jumps 600 px left, far past the left edge
        a.update(2000.0);
        assert!(a.body.vel.x > 0.0);
        assert_eq!(a.center(), Vec2::new(10.0, 300.0));
    }

    #[test]
    fn test_fragment_inherits_activity() {
        let mut parent = Asteroid::new(1, Vec2::new(400.0, 300.0), Vec2::new(10.0, 0.0), 40.0, field(), true);
        parent.update(0.0);
        let child = Asteroid::fragment_of(2, &parent, Vec2::new(0.0, 5.0), 120.0);
        assert!(child.is_active());
        assert!(!child.is_primary());
        assert_eq!(child.center(), parent.center());
        assert_eq!(child.area(), 120.0);
        assert!((child.radius() - (120.0 / std::f32::consts::PI).sqrt()).abs() < 1e-5);
    }
}
