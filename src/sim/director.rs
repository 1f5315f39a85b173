//! Asteroid director: level scheduling, spawning and fragmentation
//!
//! Level `n` spawns `n` primary asteroids, one per generation period, with the
//! period shrinking linearly from 60 s at level 1 toward 5 s at `MAX_LEVEL`.
//! A level ends once its quota has spawned and nothing is left alive.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::draw::{DrawGroup, Sprite, SpriteKind};
use super::rect::Rect;
use crate::consts::*;
use crate::{heading_vector, vector_heading};

/// Uniform draw in `[lo, hi]`, collapsing an empty range to `lo`
fn uniform(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Generation period for a level (ms)
pub fn generation_period(level: u32) -> f32 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    let step = (MAX_GENERATION_PERIOD - MIN_GENERATION_PERIOD) / MAX_LEVEL as f32;
    MAX_GENERATION_PERIOD - step * (level - 1) as f32
}

/// Owns every live asteroid and the level bookkeeping
#[derive(Debug, Clone)]
pub struct AsteroidDirector {
    field: Rect,
    rng: Pcg32,
    level: u32,
    level_generation_period: f32,
    /// Primary asteroids spawned this level
    asteroid_level_count: u32,
    asteroids_destroyed_level_count: u32,
    asteroids_destroyed_total_count: u32,
    /// Time since the last spawn (ms)
    elapsed: f32,
    /// Live asteroids, in spawn order
    asteroids: Vec<Asteroid>,
    next_id: u32,
}

impl AsteroidDirector {
    /// Level 0 with nothing spawned; the first `update` starts level 1
    pub fn new(field: Rect, rng: Pcg32) -> Self {
        Self {
            field,
            rng,
            level: 0,
            level_generation_period: 0.0,
            asteroid_level_count: 0,
            asteroids_destroyed_level_count: 0,
            asteroids_destroyed_total_count: 0,
            elapsed: 0.0,
            asteroids: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_seed(field: Rect, seed: u64) -> Self {
        Self::new(field, Pcg32::seed_from_u64(seed))
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_generation_period(&self) -> f32 {
        self.level_generation_period
    }

    pub fn asteroid_level_count(&self) -> u32 {
        self.asteroid_level_count
    }

    pub fn asteroids_destroyed_level_count(&self) -> u32 {
        self.asteroids_destroyed_level_count
    }

    pub fn asteroids_destroyed_total_count(&self) -> u32 {
        self.asteroids_destroyed_total_count
    }

    /// Milliseconds until the next timed spawn (negative when overdue)
    pub fn time_to_next_generation(&self) -> f32 {
        self.level_generation_period - self.elapsed
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroid(&self, id: u32) -> Option<&Asteroid> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    /// Advance the level scheduler by `dt_ms`
    pub fn update(&mut self, dt_ms: f32) {
        self.elapsed += dt_ms;

        if self.asteroid_level_count == self.level && self.asteroids.is_empty() {
            self.level += 1;
            self.level_generation_period = generation_period(self.level);
            log::info!(
                "Level {} (generation period {:.0} ms)",
                self.level,
                self.level_generation_period
            );
            self.generate();
            self.elapsed = 0.0;
            self.asteroid_level_count = 1;
            self.asteroids_destroyed_level_count = 0;
        } else if (self.elapsed > self.level_generation_period || self.asteroids.is_empty())
            && self.asteroid_level_count < self.level
        {
            self.generate();
            self.elapsed = 0.0;
            self.asteroid_level_count += 1;
        }
    }

    /// Move every asteroid and run its edge behavior
    pub fn integrate(&mut self, dt_ms: f32) {
        for asteroid in &mut self.asteroids {
            asteroid.update(dt_ms);
        }
    }

    /// Spawn one primary asteroid just outside a random edge, aimed across the field
    ///
    /// Returns the new asteroid's id.
    pub fn generate(&mut self) -> u32 {
        let field = self.field;
        let diameter = uniform(&mut self.rng, MIN_DIAMETER, MAX_DIAMETER);
        let half = diameter / 2.0;

        // top=0, right=1, bottom=2, left=3
        let pos = match self.rng.random_range(0..4u8) {
            0 => Vec2::new(
                field.left + uniform(&mut self.rng, 0.0, field.width + diameter * 2.0) - diameter,
                field.top - half,
            ),
            1 => Vec2::new(
                field.right() + half,
                field.top + uniform(&mut self.rng, 0.0, field.height + diameter * 2.0) - diameter,
            ),
            2 => Vec2::new(
                field.left + uniform(&mut self.rng, 0.0, field.width + diameter * 2.0) - diameter,
                field.bottom() + half,
            ),
            _ => Vec2::new(
                field.left - half,
                field.top + uniform(&mut self.rng, 0.0, field.height + diameter * 2.0) - diameter,
            ),
        };

        // Any target inside the inset rect makes the path fully cross the field
        let inner = field.inflate(-diameter * 2.0, -diameter * 2.0);
        let target = Vec2::new(
            uniform(&mut self.rng, inner.left, inner.right()),
            uniform(&mut self.rng, inner.top, inner.bottom()),
        );

        // +up targeting vector
        let targeting = Vec2::new(target.x - pos.x, pos.y - target.y);
        let heading = vector_heading(targeting);
        let speed = uniform(&mut self.rng, MIN_SPEED, MAX_SPEED);
        let vel = heading_vector(heading) * speed;

        let id = self.next_entity_id();
        log::debug!(
            "Spawned asteroid {} d={:.1} at ({:.0}, {:.0}) heading {:.1} speed {:.0}",
            id,
            diameter,
            pos.x,
            pos.y,
            heading,
            speed
        );
        self.asteroids
            .push(Asteroid::new(id, pos, vel, diameter, field, true));
        id
    }

    /// Drop an asteroid from the live set, crediting primaries to the tallies
    pub fn remove(&mut self, id: u32) -> Option<Asteroid> {
        let idx = self.asteroids.iter().position(|a| a.id == id)?;
        let asteroid = self.asteroids.remove(idx);
        if asteroid.is_primary() {
            self.asteroids_destroyed_level_count += 1;
            self.asteroids_destroyed_total_count += 1;
        }
        Some(asteroid)
    }

    /// Break a destroyed asteroid into smaller fragments
    ///
    /// Each child takes up to 80% of the area and energy still unassigned, so
    /// children never exceed the parent and the loop ends once the remainder
    /// drops to `1.25 × MIN_AREA`. Returns the number of fragments spawned.
    pub fn fragment(&mut self, parent: &Asteroid) -> usize {
        let mut remaining_area = parent.area();
        let mut remaining_energy = parent.energy();
        let mut spawned = 0;

        while remaining_area > FRAGMENT_AREA_FLOOR * MIN_AREA {
            let area = uniform(&mut self.rng, MIN_AREA, FRAGMENT_SHARE * remaining_area);
            remaining_area -= area;
            let energy = uniform(&mut self.rng, 0.0, FRAGMENT_SHARE * remaining_energy);
            remaining_energy = (remaining_energy - energy).max(0.0);
            debug_assert!(area >= MIN_AREA);

            // energy = ½·area·speed²
            let speed = (2.0 * energy / area).max(0.0).sqrt();
            let heading = uniform(&mut self.rng, -180.0, 180.0);
            let vel = heading_vector(heading) * speed;

            let id = self.next_entity_id();
            self.asteroids.push(Asteroid::fragment_of(id, parent, vel, area));
            spawned += 1;
        }

        log::debug!(
            "Asteroid {} (area {:.0}) broke into {} fragments",
            parent.id,
            parent.area(),
            spawned
        );
        spawned
    }

    /// Enqueue a sprite per asteroid
    pub fn draw<G: DrawGroup>(&self, group: &mut G) {
        for asteroid in &self.asteroids {
            group.add(Sprite {
                kind: SpriteKind::Asteroid,
                center: asteroid.center(),
                rotation: asteroid.body.direction,
                size: asteroid.rect().size(),
            });
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a hand-built asteroid (outside the level bookkeeping)
    #[cfg(test)]
    pub(crate) fn insert(&mut self, asteroid: Asteroid) {
        self.next_id = self.next_id.max(asteroid.id + 1);
        self.asteroids.push(asteroid);
    }
}
