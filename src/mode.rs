//! Difficulty presets.
//!
//! A `Mode` is an immutable bundle of every speed, interval and consumption
//! constant the simulation uses.  It is chosen once when a session starts
//! and never mutated afterwards.

use crate::entities::EnemyKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hardcore,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hardcore => "hardcore",
        }
    }
}

/// Which effect the non-fuel power-up grants.  Chosen per session; the
/// front end exposes the toggle on the mode-select screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryPowerUp {
    /// +1 to player speed while active.
    SpeedBoost,
    /// Five-bullet angular fan with larger bullets while active.
    WeaponBoost,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mode {
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed_fast: f32,
    pub enemy_speed_tank: f32,
    pub enemy_speed_basic: f32,
    pub enemy_cooldown_fast: f32,
    pub enemy_cooldown_tank: f32,
    pub enemy_cooldown_basic: f32,
    pub power_up_speed: f32,
    /// Fuel units burned per tick.
    pub fuel_consumption: f32,
    /// Ticks between player shots while the fire button is held.
    pub shoot_interval: u64,
    pub enemy_spawn_interval: u64,
    pub power_up_spawn_interval: u64,
}

impl Mode {
    pub fn preset(difficulty: Difficulty) -> Mode {
        match difficulty {
            Difficulty::Easy => Mode {
                player_speed: 1.0,
                bullet_speed: 1.0,
                enemy_speed_fast: 1.0,
                enemy_speed_tank: 0.3,
                enemy_speed_basic: 0.5,
                enemy_cooldown_fast: 180.0,
                enemy_cooldown_tank: 120.0,
                enemy_cooldown_basic: 240.0,
                power_up_speed: 0.3,
                fuel_consumption: 0.005,
                shoot_interval: 30,
                enemy_spawn_interval: 150,
                power_up_spawn_interval: 600,
            },
            Difficulty::Medium => Mode {
                player_speed: 2.0,
                bullet_speed: 2.0,
                enemy_speed_fast: 2.0,
                enemy_speed_tank: 0.5,
                enemy_speed_basic: 1.0,
                enemy_cooldown_fast: 120.0,
                enemy_cooldown_tank: 90.0,
                enemy_cooldown_basic: 150.0,
                power_up_speed: 0.5,
                fuel_consumption: 0.01,
                shoot_interval: 20,
                enemy_spawn_interval: 100,
                power_up_spawn_interval: 400,
            },
            Difficulty::Hardcore => Mode {
                player_speed: 3.0,
                bullet_speed: 3.0,
                enemy_speed_fast: 3.0,
                enemy_speed_tank: 1.0,
                enemy_speed_basic: 2.0,
                enemy_cooldown_fast: 60.0,
                enemy_cooldown_tank: 40.0,
                enemy_cooldown_basic: 80.0,
                power_up_speed: 1.0,
                fuel_consumption: 0.02,
                shoot_interval: 10,
                enemy_spawn_interval: 50,
                power_up_spawn_interval: 200,
            },
        }
    }

    pub fn enemy_speed(&self, kind: EnemyKind) -> f32 {
        match kind {
            EnemyKind::Fast => self.enemy_speed_fast,
            EnemyKind::Tank => self.enemy_speed_tank,
            EnemyKind::Basic => self.enemy_speed_basic,
        }
    }

    pub fn enemy_cooldown(&self, kind: EnemyKind) -> f32 {
        match kind {
            EnemyKind::Fast => self.enemy_cooldown_fast,
            EnemyKind::Tank => self.enemy_cooldown_tank,
            EnemyKind::Basic => self.enemy_cooldown_basic,
        }
    }
}
