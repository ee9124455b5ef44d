//! Game entity types.
//!
//! Each entity owns its per-tick motion in an `advance` method and exposes
//! its collision envelope through `aabb()`.  Nothing here touches the
//! session: emitting bullets, scoring and removal are the tick loop's job,
//! signalled through return values.

use rand::Rng;

use crate::geometry::Aabb;
use crate::mode::Mode;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
pub const MAX_FUEL: f32 = 100.0;

/// The player craft.  `x` is the sprite's horizontal center, `y` its top
/// edge.  Movement guards in the tick loop keep the half-extents inside the
/// arena, so no clamping happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Effective speed this tick (mode base, +1 while a speed boost is live).
    pub speed: f32,
    pub fuel: f32,
    pub max_fuel: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Player {
        Player {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: 0.0,
            fuel: MAX_FUEL,
            max_fuel: MAX_FUEL,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.x - self.width / 2.0, self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BOOSTED_BULLET_WIDTH: f32 = 6.0;
pub const BOOSTED_BULLET_HEIGHT: f32 = 14.0;

/// A player bullet.  `angle` is the trajectory in radians, 0 = straight up;
/// the spread shot fires these at small nonzero angles.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub angle: f32,
}

impl Bullet {
    /// Straight-up wing shot.
    pub fn new(x: f32, y: f32, speed: f32) -> Bullet {
        Bullet {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed,
            angle: 0.0,
        }
    }

    /// Larger bullet fired at an angle, used by the boosted fan.
    pub fn spread(x: f32, y: f32, speed: f32, angle: f32) -> Bullet {
        Bullet {
            x,
            y,
            width: BOOSTED_BULLET_WIDTH,
            height: BOOSTED_BULLET_HEIGHT,
            speed,
            angle,
        }
    }

    pub fn advance(&mut self) {
        self.x += self.speed * self.angle.sin();
        self.y -= self.speed * self.angle.cos();
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// An enemy bullet; always travels straight down.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyBullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl EnemyBullet {
    pub fn new(x: f32, y: f32, speed: f32) -> EnemyBullet {
        EnemyBullet {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Vertical spawn position for enemies and power-ups, just above the arena.
pub const SPAWN_Y: f32 = -20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
}

impl EnemyKind {
    pub fn size(&self) -> (f32, f32) {
        match self {
            EnemyKind::Tank => (40.0, 30.0),
            _ => (30.0, 20.0),
        }
    }

    pub fn health(&self) -> u32 {
        match self {
            EnemyKind::Tank => 2,
            _ => 1,
        }
    }

    /// Score awarded when destroyed.
    pub fn score(&self) -> u32 {
        match self {
            EnemyKind::Tank => 20,
            _ => 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: EnemyKind,
    pub speed: f32,
    pub health: u32,
    pub shoot_cooldown: f32,
    pub shoot_timer: f32,
}

impl Enemy {
    /// New enemy at horizontal position `x`, just above the arena.  The
    /// shoot timer starts at a random point in the cooldown so a wave of
    /// spawns does not volley in lockstep.
    pub fn new(kind: EnemyKind, x: f32, mode: &Mode, rng: &mut impl Rng) -> Enemy {
        let (width, height) = kind.size();
        let cooldown = mode.enemy_cooldown(kind);
        Enemy {
            x,
            y: SPAWN_Y,
            width,
            height,
            kind,
            speed: mode.enemy_speed(kind),
            health: kind.health(),
            shoot_cooldown: cooldown,
            shoot_timer: rng.gen_range(0.0..cooldown),
        }
    }

    /// Move one tick.  Returns `true` when the shoot timer expired this
    /// tick: the caller must push an [`EnemyBullet`] from [`Enemy::muzzle`]
    /// and surface the fired event.  The timer rearms to the full cooldown.
    pub fn advance(&mut self) -> bool {
        self.y += self.speed;
        self.shoot_timer -= 1.0;
        if self.shoot_timer <= 0.0 {
            self.shoot_timer = self.shoot_cooldown;
            return true;
        }
        false
    }

    /// Where emitted bullets appear: centered under the sprite.
    pub fn muzzle(&self) -> (f32, f32) {
        (
            self.x + self.width / 2.0 - BULLET_WIDTH / 2.0,
            self.y + self.height,
        )
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

pub const POWER_UP_SIZE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Refills 30 fuel units, clamped at the tank's capacity.
    Fuel,
    /// Arms the session's configured secondary boost for a fixed duration.
    Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, x: f32, mode: &Mode) -> PowerUp {
        PowerUp {
            x,
            y: SPAWN_Y,
            width: POWER_UP_SIZE,
            height: POWER_UP_SIZE,
            speed: mode.power_up_speed,
            kind,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

// ── Explosion particles ───────────────────────────────────────────────────────

pub const PARTICLE_LIFE: u32 = 50;
pub const EXPLOSION_PARTICLES: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Yellow,
    Orange,
    Red,
}

/// One explosion fleck.  The life counter is authoritative for removal; the
/// size decay is purely visual.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub color: ParticleColor,
}

impl Particle {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Particle {
        let color = match rng.gen_range(0u8..3) {
            0 => ParticleColor::Yellow,
            1 => ParticleColor::Orange,
            _ => ParticleColor::Red,
        };
        Particle {
            x,
            y,
            size: rng.gen_range(2.0..7.0),
            vx: rng.gen_range(-0.25..0.25),
            vy: rng.gen_range(-0.25..0.25),
            life: PARTICLE_LIFE,
            color,
        }
    }

    /// Explosion batch: exactly [`EXPLOSION_PARTICLES`] flecks jittered
    /// within ±10 of the given center.
    pub fn burst(cx: f32, cy: f32, rng: &mut impl Rng) -> Vec<Particle> {
        let mut batch = Vec::with_capacity(EXPLOSION_PARTICLES);
        for _ in 0..EXPLOSION_PARTICLES {
            let x = cx + rng.gen_range(-10.0..10.0);
            let y = cy + rng.gen_range(-10.0..10.0);
            batch.push(Particle::new(x, y, rng));
        }
        batch
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.size *= 0.99;
        self.life = self.life.saturating_sub(1);
    }
}
