use dothack_common::Arena;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::pursuit::pursue;
use crate::smoothing::animate_vec2_towards;

/// The player-controlled circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
}

/// An enemy homing in on the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec2,
    /// Stored for a future combat system; nothing reads it during play.
    pub health: i32,
}

/// All simulation state for one session.
///
/// The loop driver owns the world and passes it by reference into update and
/// render code. Enemies live in a fixed-capacity arena sized to
/// `SimConfig::enemy_count`, so the slot layout never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    config: SimConfig,
    tick: u64,
    camera_target: Vec2,
    player: Option<Player>,
    enemies: Arena<Enemy>,
}

impl World {
    /// Create a world with the player at the origin and enemies spread evenly
    /// on a circle around it.
    pub fn new(config: SimConfig) -> Self {
        let player = Player {
            position: Vec2::ZERO,
        };
        let mut enemies = Arena::with_capacity(config.enemy_count);
        for position in spawn_ring(player.position, config.enemy_count, config.enemy_spawn_radius) {
            let enemy = Enemy {
                position,
                health: config.enemy_initial_health,
            };
            if let Err(e) = enemies.insert(enemy) {
                tracing::warn!("dropping enemy spawn: {e}");
            }
        }
        tracing::debug!(
            enemies = enemies.len(),
            radius = config.enemy_spawn_radius,
            "world created"
        );

        Self {
            config,
            tick: 0,
            camera_target: Vec2::ZERO,
            player: Some(player),
            enemies,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Point the camera is looking at.
    pub fn camera_target(&self) -> Vec2 {
        self.camera_target
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn enemies(&self) -> &Arena<Enemy> {
        &self.enemies
    }

    /// Advance one frame: move the player, ease the camera toward it, then
    /// let every enemy pursue the player's new position.
    pub fn step(&mut self, movement: Vec2, dt: f32) {
        self.move_player(movement, dt);
        self.follow_camera(dt);
        self.pursue_player(dt);
        self.tick += 1;
    }

    /// Move the player by `movement * player_speed * dt`.
    pub fn move_player(&mut self, movement: Vec2, dt: f32) {
        let speed = self.config.player_speed;
        if let Some(player) = self.player.as_mut() {
            player.position += movement * speed * dt;
        }
    }

    /// Smooth the camera target toward the player.
    pub fn follow_camera(&mut self, dt: f32) {
        let Some(player) = self.player else {
            return;
        };
        animate_vec2_towards(
            &mut self.camera_target,
            player.position,
            dt,
            self.config.camera_follow_rate,
        );
    }

    /// Step every enemy toward the player at constant speed.
    pub fn pursue_player(&mut self, dt: f32) {
        let Some(player) = self.player else {
            return;
        };
        let speed = self.config.enemy_speed;
        for (_, enemy) in self.enemies.iter_mut() {
            enemy.position = pursue(enemy.position, player.position, speed, dt);
        }
    }

    /// Read-only summary for tooling.
    pub fn summary(&self) -> WorldSummary {
        WorldSummary {
            tick: self.tick,
            player: self.player.map(|p| p.position),
            camera_target: self.camera_target,
            enemy_count: self.enemies.len(),
            enemy_capacity: self.enemies.capacity(),
        }
    }

    /// Deterministic hash of the simulation state. Two worlds fed the same
    /// movement and frame deltas hash identically.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= u64::from(b);
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec2 = |h: &mut u64, v: Vec2| {
            mix(h, &v.x.to_le_bytes());
            mix(h, &v.y.to_le_bytes());
        };

        mix(&mut h, &self.tick.to_le_bytes());
        mix_vec2(&mut h, self.camera_target);
        match self.player {
            Some(p) => {
                mix(&mut h, &[1]);
                mix_vec2(&mut h, p.position);
            }
            None => mix(&mut h, &[0]),
        }
        for (id, enemy) in self.enemies.iter() {
            mix(&mut h, &id.0.to_le_bytes());
            mix_vec2(&mut h, enemy.position);
            mix(&mut h, &enemy.health.to_le_bytes());
        }
        h
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// `count` points evenly spaced on a circle of `radius` around `center`,
/// starting on the +x axis and turning toward +y.
pub fn spawn_ring(center: Vec2, count: usize, radius: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = std::f32::consts::TAU / count as f32;
    (0..count)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect()
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSummary {
    pub tick: u64,
    pub player: Option<Vec2>,
    pub camera_target: Vec2,
    pub enemy_count: usize,
    pub enemy_capacity: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "World: tick={} ", self.tick)?;
        match self.player {
            Some(p) => write!(f, "player=({:.2}, {:.2}) ", p.x, p.y)?,
            None => write!(f, "player=none ")?,
        }
        write!(
            f,
            "camera=({:.2}, {:.2}) enemies={}/{}",
            self.camera_target.x, self.camera_target.y, self.enemy_count, self.enemy_capacity
        )
    }
}
