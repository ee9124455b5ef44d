//! Frame-counter-driven spawning.
//!
//! Both spawners are pure decisions over `(frame, mode)` plus injected
//! randomness: they either return a freshly placed entity or `None`, and
//! the tick loop pushes the result into its collection.

use rand::Rng;

use crate::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind};
use crate::mode::Mode;

/// Enemy-kind split: 30% fast, 30% tank, 40% basic, from one uniform draw.
fn roll_enemy_kind(rng: &mut impl Rng) -> EnemyKind {
    let r: f32 = rng.gen();
    if r < 0.30 {
        EnemyKind::Fast
    } else if r < 0.60 {
        EnemyKind::Tank
    } else {
        EnemyKind::Basic
    }
}

/// Spawn an enemy when the frame counter lands on the mode's spawn
/// interval.  Placed at a uniform horizontal position that keeps the whole
/// sprite inside the arena, just above the top edge.
pub fn maybe_spawn_enemy(
    frame: u64,
    mode: &Mode,
    arena_width: f32,
    rng: &mut impl Rng,
) -> Option<Enemy> {
    if frame % mode.enemy_spawn_interval != 0 {
        return None;
    }
    let kind = roll_enemy_kind(rng);
    let (width, _) = kind.size();
    let x = rng.gen_range(0.0..arena_width - width);
    Some(Enemy::new(kind, x, mode, rng))
}

/// Spawn a power-up on its own interval; kind is a 50/50 draw.
pub fn maybe_spawn_power_up(
    frame: u64,
    mode: &Mode,
    arena_width: f32,
    rng: &mut impl Rng,
) -> Option<PowerUp> {
    if frame % mode.power_up_spawn_interval != 0 {
        return None;
    }
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::Fuel
    } else {
        PowerUpKind::Secondary
    };
    let x = rng.gen_range(0.0..arena_width - crate::entities::POWER_UP_SIZE);
    Some(PowerUp::new(kind, x, mode))
}
