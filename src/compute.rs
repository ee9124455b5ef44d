//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! [`GameSession`] (and, where needed, an RNG handle) and returns a
//! brand-new session.  Side effects are limited to the injected RNG; the
//! discrete events each tick produces come back in the [`TickOutcome`] for
//! the presentation layer to turn into sound and narration cues.

use rand::Rng;

use crate::entities::{
    Bullet, Enemy, EnemyBullet, EnemyKind, Particle, Player, PowerUp, PowerUpKind,
    BOOSTED_BULLET_WIDTH,
};
use crate::mode::{Difficulty, Mode, SecondaryPowerUp};
use crate::spawn::{maybe_spawn_enemy, maybe_spawn_power_up};

// ── Tuning constants ─────────────────────────────────────────────────────────

/// How long a collected secondary power-up stays active:
/// 5 seconds at the 30 FPS frame cadence.
pub const BOOST_DURATION_TICKS: u32 = 150;

/// Fuel units restored by a fuel canister.
pub const FUEL_REFILL: f32 = 30.0;

/// Trajectory angles (radians) of the five-bullet boosted fan.
pub const FAN_ANGLES: [f32; 5] = [-0.4, -0.2, 0.0, 0.2, 0.4];

/// Speech lines for the narration cues.
pub const NARRATION_INTRO: &str = "Blastar Ship GO GO Enemies are on the Attack!";
pub const NARRATION_ENCOURAGE: &str = "Don't give up Blastar Ship";

// ── Session state ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfFuel,
    HitByEnemyFire,
    CollisionWithEnemy,
}

/// The five held-button signals sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Discrete cues for the presentation layer (tones, speech, overlays).
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    PlayerFired,
    EnemyFired,
    EnemyDestroyed { kind: EnemyKind },
    PowerUpCollected(PowerUpKind),
    Narration(&'static str),
    GameOver { reason: GameOverReason, score: u32 },
}

/// The entire game state.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub frame: u64,
    /// `None` until a mode has been selected; the `mode` constants are only
    /// meaningful while this is `Some`.
    pub difficulty: Option<Difficulty>,
    pub mode: Mode,
    pub status: GameStatus,
    /// Which effect the non-fuel power-up grants in this session.
    pub secondary: SecondaryPowerUp,
    /// Ticks of spread-fire boost remaining (0 = inactive).
    pub weapon_boost_ticks: u32,
    /// Ticks of +1 speed boost remaining (0 = inactive).
    pub speed_boost_ticks: u32,
    pub width: f32,
    pub height: f32,
}

/// One advanced session plus the events the tick emitted, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub session: GameSession,
    pub events: Vec<GameEvent>,
}

// ── Constructors & state machine ─────────────────────────────────────────────

/// Fresh `NotStarted` session for an arena of the given pixel dimensions.
pub fn init_state(secondary: SecondaryPowerUp, width: f32, height: f32) -> GameSession {
    GameSession {
        player: Player::new(width / 2.0, height - 50.0),
        bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        score: 0,
        frame: 0,
        difficulty: None,
        mode: Mode::preset(Difficulty::Easy),
        status: GameStatus::NotStarted,
        secondary,
        weapon_boost_ticks: 0,
        speed_boost_ticks: 0,
        width,
        height,
    }
}

/// `NotStarted → Running` with the chosen difficulty.  Ignored from any
/// other status: a running or finished session cannot switch modes.
pub fn select_mode(session: &GameSession, difficulty: Difficulty) -> GameSession {
    if session.status != GameStatus::NotStarted {
        return session.clone();
    }
    let mode = Mode::preset(difficulty);
    let mut next = session.clone();
    next.difficulty = Some(difficulty);
    next.mode = mode;
    next.player.speed = mode.player_speed;
    next.status = GameStatus::Running;
    next
}

/// Tear the session down to a fresh `NotStarted` state.  This is the only
/// teardown path; it is idempotent and clears every entity collection,
/// boost counter and the selected mode.
pub fn reset(session: &GameSession) -> GameSession {
    init_state(session.secondary, session.width, session.height)
}

fn game_over(
    mut session: GameSession,
    mut events: Vec<GameEvent>,
    reason: GameOverReason,
) -> TickOutcome {
    events.push(GameEvent::GameOver {
        reason,
        score: session.score,
    });
    session.status = GameStatus::GameOver;
    TickOutcome {
        session,
        events,
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// A session that is not `Running` comes back unchanged with no events;
/// re-entry is only through [`select_mode`] after a [`reset`].
pub fn tick(session: &GameSession, input: &InputState, rng: &mut impl Rng) -> TickOutcome {
    // ── 1. Not-started / finished guard ──────────────────────────────────────
    if session.status != GameStatus::Running {
        return TickOutcome {
            session: session.clone(),
            events: Vec::new(),
        };
    }

    let mut next = session.clone();
    let mut events: Vec<GameEvent> = Vec::new();
    next.frame += 1;

    // Boost counters are plain per-tick countdowns on the session, so a
    // reset tears them down with everything else.
    next.weapon_boost_ticks = next.weapon_boost_ticks.saturating_sub(1);
    next.speed_boost_ticks = next.speed_boost_ticks.saturating_sub(1);

    // ── 2. Fuel decay ────────────────────────────────────────────────────────
    next.player.fuel -= next.mode.fuel_consumption;
    if next.player.fuel <= 0.0 {
        next.player.fuel = 0.0;
        return game_over(next, events, GameOverReason::OutOfFuel);
    }

    // ── 3. Player motion (guard-before-move, axes independent) ───────────────
    let speed = next.mode.player_speed
        + if next.speed_boost_ticks > 0 { 1.0 } else { 0.0 };
    next.player.speed = speed;
    let half_w = next.player.width / 2.0;
    if input.right && next.player.x + half_w < next.width {
        next.player.x += speed;
    }
    if input.left && next.player.x - half_w > 0.0 {
        next.player.x -= speed;
    }
    if input.up && next.player.y > 0.0 {
        next.player.y -= speed;
    }
    if input.down && next.player.y + next.player.height < next.height {
        next.player.y += speed;
    }

    // ── 4. Firing ────────────────────────────────────────────────────────────
    if input.fire && next.frame % next.mode.shoot_interval == 0 {
        let p = &next.player;
        if next.weapon_boost_ticks > 0 {
            for angle in FAN_ANGLES {
                next.bullets.push(Bullet::spread(
                    p.x - BOOSTED_BULLET_WIDTH / 2.0,
                    p.y,
                    next.mode.bullet_speed,
                    angle,
                ));
            }
        } else {
            // One bullet from each wing tip, straight up.
            next.bullets
                .push(Bullet::new(p.x - half_w + 5.0, p.y, next.mode.bullet_speed));
            next.bullets
                .push(Bullet::new(p.x + half_w - 5.0, p.y, next.mode.bullet_speed));
        }
        events.push(GameEvent::PlayerFired);
    }

    // ── 5. Projectile pass ───────────────────────────────────────────────────
    next.bullets = next
        .bullets
        .iter()
        .filter(|b| b.y > 0.0)
        .map(|b| {
            let mut b = b.clone();
            b.advance();
            b
        })
        .collect();

    next.enemy_bullets = next
        .enemy_bullets
        .iter()
        .filter(|b| b.y < next.height)
        .map(|b| {
            let mut b = b.clone();
            b.advance();
            b
        })
        .collect();

    let player_box = next.player.aabb();
    if next
        .enemy_bullets
        .iter()
        .any(|b| b.aabb().overlaps(&player_box))
    {
        return game_over(next, events, GameOverReason::HitByEnemyFire);
    }

    // ── 6. Spawning ──────────────────────────────────────────────────────────
    if let Some(enemy) = maybe_spawn_enemy(next.frame, &next.mode, next.width, rng) {
        next.enemies.push(enemy);
    }
    if let Some(power_up) = maybe_spawn_power_up(next.frame, &next.mode, next.width, rng) {
        next.power_ups.push(power_up);
    }

    // ── 7. Enemy pass ────────────────────────────────────────────────────────
    // Advance survivors of the bottom-edge filter, consuming fire signals.
    let mut advanced: Vec<Enemy> = Vec::new();
    for enemy in next.enemies.iter().filter(|e| e.y < next.height) {
        let mut enemy = enemy.clone();
        if enemy.advance() {
            let (mx, my) = enemy.muzzle();
            next.enemy_bullets
                .push(EnemyBullet::new(mx, my, next.mode.bullet_speed));
            events.push(GameEvent::EnemyFired);
        }
        advanced.push(enemy);
    }

    // Resolve player-bullet hits; each hit consumes the bullet and one
    // point of health.  Dead enemies explode and score before removal.
    let mut survivors: Vec<Enemy> = Vec::new();
    for mut enemy in advanced {
        let enemy_box = enemy.aabb();
        next.bullets.retain(|b| {
            if enemy.health > 0 && b.aabb().overlaps(&enemy_box) {
                enemy.health -= 1;
                false
            } else {
                true
            }
        });

        if enemy.health == 0 {
            let cx = enemy.x + enemy.width / 2.0;
            let cy = enemy.y + enemy.height / 2.0;
            next.particles.extend(Particle::burst(cx, cy, rng));
            next.score += enemy.kind.score();
            events.push(GameEvent::EnemyDestroyed { kind: enemy.kind });
            if rng.gen::<f32>() < 0.1 {
                events.push(GameEvent::Narration(NARRATION_ENCOURAGE));
            }
            continue;
        }

        if enemy.aabb().overlaps(&player_box) {
            next.enemies = survivors;
            return game_over(next, events, GameOverReason::CollisionWithEnemy);
        }
        survivors.push(enemy);
    }
    next.enemies = survivors;

    // ── 8. Particle pass ─────────────────────────────────────────────────────
    next.particles = next
        .particles
        .iter()
        .filter(|p| p.life > 0)
        .map(|p| {
            let mut p = p.clone();
            p.advance();
            p
        })
        .collect();

    // ── 9. Power-up pass ─────────────────────────────────────────────────────
    let mut kept: Vec<PowerUp> = Vec::new();
    for power_up in next.power_ups.iter().filter(|p| p.y < next.height) {
        let mut power_up = power_up.clone();
        power_up.advance();
        if !power_up.aabb().overlaps(&player_box) {
            kept.push(power_up);
            continue;
        }
        match power_up.kind {
            PowerUpKind::Fuel => {
                next.player.fuel =
                    (next.player.fuel + FUEL_REFILL).min(next.player.max_fuel);
            }
            PowerUpKind::Secondary => match next.secondary {
                SecondaryPowerUp::SpeedBoost => {
                    next.speed_boost_ticks = BOOST_DURATION_TICKS;
                }
                SecondaryPowerUp::WeaponBoost => {
                    next.weapon_boost_ticks = BOOST_DURATION_TICKS;
                }
            },
        }
        events.push(GameEvent::PowerUpCollected(power_up.kind));
        if rng.gen::<f32>() < 0.5 {
            events.push(GameEvent::Narration(NARRATION_ENCOURAGE));
        }
    }
    next.power_ups = kept;

    TickOutcome {
        session: next,
        events,
    }
}
