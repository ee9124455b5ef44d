use blastar::entities::{EnemyKind, PowerUpKind, POWER_UP_SIZE, SPAWN_Y};
use blastar::mode::{Difficulty, Mode};
use blastar::spawn::{maybe_spawn_enemy, maybe_spawn_power_up};

use rand::rngs::StdRng;
use rand::SeedableRng;

const ARENA_WIDTH: f32 = 480.0;

#[test]
fn enemy_spawns_only_on_interval() {
    let mode = Mode::preset(Difficulty::Easy); // interval = 150
    let mut rng = StdRng::seed_from_u64(1);
    assert!(maybe_spawn_enemy(149, &mode, ARENA_WIDTH, &mut rng).is_none());
    assert!(maybe_spawn_enemy(150, &mode, ARENA_WIDTH, &mut rng).is_some());
    assert!(maybe_spawn_enemy(151, &mode, ARENA_WIDTH, &mut rng).is_none());
    assert!(maybe_spawn_enemy(300, &mode, ARENA_WIDTH, &mut rng).is_some());
}

#[test]
fn spawned_enemy_fits_inside_arena_width() {
    let mode = Mode::preset(Difficulty::Hardcore); // interval = 50
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let enemy = maybe_spawn_enemy(50, &mode, ARENA_WIDTH, &mut rng).unwrap();
        assert!(enemy.x >= 0.0);
        assert!(enemy.x + enemy.width <= ARENA_WIDTH);
        assert_eq!(enemy.y, SPAWN_Y);
    }
}

#[test]
fn enemy_kind_split_covers_all_three() {
    let mode = Mode::preset(Difficulty::Medium); // interval = 100
    let mut seen = [false; 3];
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let enemy = maybe_spawn_enemy(100, &mode, ARENA_WIDTH, &mut rng).unwrap();
        match enemy.kind {
            EnemyKind::Fast => seen[0] = true,
            EnemyKind::Tank => seen[1] = true,
            EnemyKind::Basic => seen[2] = true,
        }
    }
    assert!(seen.iter().all(|&s| s), "all kinds should appear over 200 draws");
}

#[test]
fn spawned_enemy_uses_mode_constants() {
    let mode = Mode::preset(Difficulty::Easy);
    let mut rng = StdRng::seed_from_u64(7);
    let enemy = maybe_spawn_enemy(150, &mode, ARENA_WIDTH, &mut rng).unwrap();
    assert_eq!(enemy.speed, mode.enemy_speed(enemy.kind));
    assert_eq!(enemy.shoot_cooldown, mode.enemy_cooldown(enemy.kind));
}

#[test]
fn power_up_spawns_only_on_its_own_interval() {
    let mode = Mode::preset(Difficulty::Medium); // interval = 400
    let mut rng = StdRng::seed_from_u64(1);
    assert!(maybe_spawn_power_up(100, &mode, ARENA_WIDTH, &mut rng).is_none());
    assert!(maybe_spawn_power_up(399, &mode, ARENA_WIDTH, &mut rng).is_none());
    assert!(maybe_spawn_power_up(400, &mode, ARENA_WIDTH, &mut rng).is_some());
    assert!(maybe_spawn_power_up(800, &mode, ARENA_WIDTH, &mut rng).is_some());
}

#[test]
fn power_up_kind_is_a_fair_coin() {
    let mode = Mode::preset(Difficulty::Easy); // interval = 600
    let mut fuel = 0;
    let mut secondary = 0;
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let power_up = maybe_spawn_power_up(600, &mode, ARENA_WIDTH, &mut rng).unwrap();
        match power_up.kind {
            PowerUpKind::Fuel => fuel += 1,
            PowerUpKind::Secondary => secondary += 1,
        }
    }
    assert!(fuel > 0 && secondary > 0);
}

#[test]
fn spawned_power_up_fits_inside_arena_width() {
    let mode = Mode::preset(Difficulty::Hardcore); // interval = 200
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let power_up = maybe_spawn_power_up(200, &mode, ARENA_WIDTH, &mut rng).unwrap();
        assert!(power_up.x >= 0.0);
        assert!(power_up.x + POWER_UP_SIZE <= ARENA_WIDTH);
        assert_eq!(power_up.y, SPAWN_Y);
        assert_eq!(power_up.speed, mode.power_up_speed);
    }
}
