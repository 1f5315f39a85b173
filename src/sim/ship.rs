//! The player's ship
//!
//! Inertial flight (velocity persists, no top speed), first-key-wins control
//! arbitration, toroidal wrap through a ghost body, and the gun.
//!
//! Wrapping: while the ship's rect crosses a field edge, a ghost copy sits one
//! field width/height away on the opposite side. Once the ghost is fully on
//! screen the ship jumps to it and the ghost goes away.

use glam::Vec2;

use super::body::KinematicBody;
use super::bullet::Bullet;
use super::draw::{DrawGroup, Sprite, SpriteKind};
use super::input::{AxisControl, FrameInput, Key, KeyAction};
use super::rect::Rect;
use crate::consts::*;
use crate::heading_vector;

/// Bounding box of the ship sprite rotated by `rotation` degrees
pub fn rotated_size(rotation: f32) -> Vec2 {
    let rad = rotation.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    Vec2::new(
        SHIP_WIDTH * cos + SHIP_HEIGHT * sin,
        SHIP_WIDTH * sin + SHIP_HEIGHT * cos,
    )
}

/// Tap-to-fire with an automatic mode after a long hold
#[derive(Debug, Clone, Default)]
struct FireControl {
    /// Fire key went down this frame
    triggered: bool,
    /// How long the fire key has been held (ms), if it is down
    held_ms: Option<f32>,
    /// Held past `AUTOMATIC_FIRE_THRESHOLD`
    automatic: bool,
    /// Time since the last automatic shot (ms)
    since_auto_shot: f32,
}

impl FireControl {
    fn process(&mut self, input: &FrameInput, dt_ms: f32) {
        if let Some(held) = self.held_ms.as_mut() {
            *held += dt_ms;
        }
        self.triggered = false;
        for event in input.events.iter().filter(|e| e.key == Key::Fire) {
            match event.action {
                KeyAction::Press => {
                    self.triggered = true;
                    self.held_ms = Some(0.0);
                }
                KeyAction::Release => self.held_ms = None,
            }
        }
        self.automatic = self.held_ms.is_some_and(|h| h > AUTOMATIC_FIRE_THRESHOLD);
        if !self.automatic {
            self.since_auto_shot = 0.0;
        }
    }
}

/// Ship controller: body, wrap ghost, controls and bullets
#[derive(Debug, Clone)]
pub struct Ship {
    field: Rect,
    body: KinematicBody,
    /// Present only while the body straddles a field edge
    ghost: Option<KinematicBody>,
    thrust: AxisControl,
    turn: AxisControl,
    fire: FireControl,
    automatic_fire_enabled: bool,
    bullets: Vec<Bullet>,
    next_bullet_id: u32,
}

impl Ship {
    /// Ship at rest in the middle of the field, pointing up
    pub fn new(field: Rect, automatic_fire_enabled: bool) -> Self {
        let body = KinematicBody::new(field.center(), Vec2::ZERO, 0.0, rotated_size(0.0));
        Self {
            field,
            body,
            ghost: None,
            thrust: AxisControl::Neutral,
            turn: AxisControl::Neutral,
            fire: FireControl::default(),
            automatic_fire_enabled,
            bullets: Vec::new(),
            next_bullet_id: 1,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    /// Velocity (+up), pixels/second
    pub fn velocity(&self) -> Vec2 {
        self.body.vel
    }

    /// Heading in degrees, (-180, 180]
    pub fn rotation(&self) -> f32 {
        self.body.direction
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn ghost(&self) -> Option<&KinematicBody> {
        self.ghost.as_ref()
    }

    pub fn is_wrapped(&self) -> bool {
        self.ghost.is_some()
    }

    pub fn thrust(&self) -> AxisControl {
        self.thrust
    }

    pub fn turn(&self) -> AxisControl {
        self.turn
    }

    pub fn is_automatic_fire(&self) -> bool {
        self.fire.automatic
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullet(&self, id: u32) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.id == id)
    }

    /// Take a bullet out of play
    pub fn remove_bullet(&mut self, id: u32) -> Option<Bullet> {
        let idx = self.bullets.iter().position(|b| b.id == id)?;
        Some(self.bullets.remove(idx))
    }

    /// Place the ship (re-evaluates the wrap ghost)
    pub fn set_position(&mut self, pos: Vec2) {
        self.body.set_position(pos);
        self.check_wrapped();
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        self.body.vel = vel;
    }

    /// Rects that count for collisions
    ///
    /// While wrapped, both the ship's and the ghost's collision rects are
    /// clipped to the field; empty clips are left out.
    pub fn collision_rects(&self) -> Vec<Rect> {
        match &self.ghost {
            Some(ghost) => [collision_rect(self.body.pos), collision_rect(ghost.pos)]
                .iter()
                .map(|r| r.clip(&self.field))
                .filter(|r| !r.is_empty())
                .collect(),
            None => vec![collision_rect(self.body.pos)],
        }
    }

    /// One frame: controls, motion, wrap, gun, then bullet motion
    pub fn update(&mut self, dt_ms: f32, input: &FrameInput) {
        self.process_keys(input, dt_ms);
        self.update_rotation(dt_ms);
        self.update_velocity(dt_ms);
        self.body.integrate(dt_ms);
        self.check_wrapped();
        self.fire_gun(dt_ms);

        for bullet in &mut self.bullets {
            bullet.integrate(dt_ms);
        }
        self.bullets.retain(Bullet::is_live);
    }

    fn process_keys(&mut self, input: &FrameInput, dt_ms: f32) {
        let held = input.held;
        self.thrust = self.thrust.next(held.up, held.down);
        self.turn = self.turn.next(held.right, held.left);
        self.fire.process(input, dt_ms);
    }

    /// At most 180° of rotation per frame
    fn update_rotation(&mut self, dt_ms: f32) {
        let mut rotation = self.body.direction;
        match self.turn {
            AxisControl::Neutral => return,
            AxisControl::HeldPositive => {
                rotation += ROTATION_RATE * dt_ms;
                if rotation > 180.0 {
                    rotation -= 360.0;
                }
            }
            AxisControl::HeldNegative => {
                rotation -= ROTATION_RATE * dt_ms;
                if rotation <= -180.0 {
                    rotation += 360.0;
                }
            }
        }
        debug_assert!(rotation > -180.0 && rotation <= 180.0, "rotation {rotation}");
        self.body.direction = rotation;
        self.body.resize(rotated_size(rotation));
    }

    /// Unbounded: no top speed
    fn update_velocity(&mut self, dt_ms: f32) {
        let sign = self.thrust.sign();
        if sign != 0.0 {
            self.body.vel += heading_vector(self.body.direction) * (ACCELERATION * dt_ms * sign);
        }
    }

    fn check_wrapped(&mut self) {
        let field = self.field;
        if !field.intersects(self.body.rect()) {
            // A long frame can carry the ship more than a whole field past an edge
            let pos = self.body.pos;
            let folded = Vec2::new(
                field.left + (pos.x - field.left).rem_euclid(field.width),
                field.top + (pos.y - field.top).rem_euclid(field.height),
            );
            log::debug!(
                "Ship folded ({:.0}, {:.0}) -> ({:.0}, {:.0})",
                pos.x,
                pos.y,
                folded.x,
                folded.y
            );
            self.body.set_position(folded);
        }

        let rect = *self.body.rect();
        if field.contains(&rect) {
            self.ghost = None;
            return;
        }

        let mut wrapped = self.body.pos;
        if rect.left < field.left {
            wrapped.x += field.width;
        } else if rect.right() > field.right() {
            wrapped.x -= field.width;
        }
        if rect.top < field.top {
            wrapped.y += field.height;
        } else if rect.bottom() > field.bottom() {
            wrapped.y -= field.height;
        }

        let ghost = KinematicBody::new(wrapped, self.body.vel, self.body.direction, rect.size());
        if field.contains(ghost.rect()) {
            log::debug!(
                "Ship wrapped ({:.0}, {:.0}) -> ({:.0}, {:.0})",
                self.body.pos.x,
                self.body.pos.y,
                wrapped.x,
                wrapped.y
            );
            self.body.set_position(wrapped);
            self.ghost = None;
        } else {
            debug_assert!(
                field.intersects(&rect) && !field.contains(&rect),
                "ghost without a straddling ship at {:?}",
                self.body.pos
            );
            self.ghost = Some(ghost);
        }
    }

    fn fire_gun(&mut self, dt_ms: f32) {
        if self.fire.triggered && !self.fire.automatic {
            self.create_bullet();
        }

        if self.automatic_fire_enabled && self.fire.automatic {
            self.fire.since_auto_shot += dt_ms;
            if self.fire.since_auto_shot > AUTOMATIC_FIRE_PERIOD {
                self.create_bullet();
                self.fire.since_auto_shot = 0.0;
            }
        }
    }

    /// Bullet starts just ahead of whichever nose is on screen
    fn create_bullet(&mut self) {
        let rotation = self.body.direction;
        let mut firing = self.body.pos;
        if !self.field.contains_point(gun_point(firing, rotation)) {
            if let Some(ghost) = &self.ghost {
                firing = ghost.pos;
            }
        }
        let center = muzzle_point(firing, rotation);

        let id = self.next_bullet_id;
        self.next_bullet_id += 1;
        log::debug!("Bullet {} fired from ({:.0}, {:.0})", id, center.x, center.y);
        self.bullets
            .push(Bullet::new(id, center, self.body.vel, rotation, self.field));
    }

    /// Enqueue bullets, then the ship and its ghost
    pub fn draw<G: DrawGroup>(&self, group: &mut G) {
        for bullet in &self.bullets {
            group.add(Sprite {
                kind: SpriteKind::Bullet,
                center: bullet.body.pos,
                rotation: bullet.body.direction,
                size: Vec2::splat(BULLET_DIAMETER),
            });
        }
        let ship_size = Vec2::new(SHIP_WIDTH, SHIP_HEIGHT);
        group.add(Sprite {
            kind: SpriteKind::Ship,
            center: self.body.pos,
            rotation: self.body.direction,
            size: ship_size,
        });
        if let Some(ghost) = &self.ghost {
            group.add(Sprite {
                kind: SpriteKind::ShipGhost,
                center: ghost.pos,
                rotation: ghost.direction,
                size: ship_size,
            });
        }
    }
}

/// Unrotated hit box, trimmed at the gun and tail
fn collision_rect(center: Vec2) -> Rect {
    Rect::from_center(
        center + Vec2::new(0.0, COLLISION_VERTICAL_OFFSET),
        Vec2::new(SHIP_WIDTH, SHIP_HEIGHT - COLLISION_HEIGHT_TRIM),
    )
}

/// Nose of a ship centered at `center` (screen space)
fn gun_point(center: Vec2, rotation: f32) -> Vec2 {
    let heading = heading_vector(rotation);
    center + Vec2::new(heading.x, -heading.y) * (SHIP_HEIGHT / 2.0)
}

/// Where a new bullet starts for a ship centered at `center`
///
/// Normally just ahead of the nose. Headings that point through the hit box
/// (tail-first, diagonals) push the bullet out until it clears it, so a shot
/// never overlaps the ship that fired it.
fn muzzle_point(center: Vec2, rotation: f32) -> Vec2 {
    let heading = heading_vector(rotation);
    let dir = Vec2::new(heading.x, -heading.y);
    let reach = ((SHIP_HEIGHT + BULLET_DIAMETER) / 2.0).max(hit_box_clearance(dir) + 0.01);
    center + dir * reach
}

/// Distance along `dir` (screen space, unit length) from the ship center to
/// where a bullet stops overlapping the collision rect
fn hit_box_clearance(dir: Vec2) -> f32 {
    let half_w = SHIP_WIDTH / 2.0 + BULLET_DIAMETER / 2.0;
    let half_h = (SHIP_HEIGHT - COLLISION_HEIGHT_TRIM) / 2.0 + BULLET_DIAMETER / 2.0;
    let along_x = if dir.x.abs() > f32::EPSILON {
        half_w / dir.x.abs()
    } else {
        f32::INFINITY
    };
    // The hit box sits below the center
    let along_y = if dir.y > f32::EPSILON {
        (half_h + COLLISION_VERTICAL_OFFSET) / dir.y
    } else if dir.y < -f32::EPSILON {
        (half_h - COLLISION_VERTICAL_OFFSET) / -dir.y
    } else {
        f32::INFINITY
    };
    along_x.min(along_y)
}
