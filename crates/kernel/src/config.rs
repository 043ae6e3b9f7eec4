use serde::{Deserialize, Serialize};

/// Compile profile the binary was built with, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Mode of the running binary.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// On-screen label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "This is a debug build",
            Self::Release => "This is a release build",
        }
    }
}

/// Simulation tuning. `Default` holds the shipped values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Player speed per axis, world units per second.
    pub player_speed: f32,
    /// Enemy pursuit speed, world units per second.
    pub enemy_speed: f32,
    pub enemy_count: usize,
    /// Distance from the player at which enemies spawn.
    pub enemy_spawn_radius: f32,
    pub enemy_initial_health: i32,
    /// Smoothing rate of the camera following the player.
    pub camera_follow_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_speed: 100.0,
            enemy_speed: 25.0,
            enemy_count: 3,
            enemy_spawn_radius: 300.0,
            enemy_initial_health: 100,
            camera_follow_rate: 3.0,
        }
    }
}

/// Everything the loop driver needs to know at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub sim: SimConfig,
    pub build_mode: BuildMode,
    /// Freeze the world while the exit prompt is shown.
    pub pause_on_exit_prompt: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            build_mode: BuildMode::current(),
            pause_on_exit_prompt: false,
        }
    }
}
