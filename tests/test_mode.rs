use blastar::entities::EnemyKind;
use blastar::mode::{Difficulty, Mode};

fn presets() -> (Mode, Mode, Mode) {
    (
        Mode::preset(Difficulty::Easy),
        Mode::preset(Difficulty::Medium),
        Mode::preset(Difficulty::Hardcore),
    )
}

#[test]
fn fuel_consumption_strictly_increasing() {
    let (easy, medium, hardcore) = presets();
    assert!(hardcore.fuel_consumption > medium.fuel_consumption);
    assert!(medium.fuel_consumption > easy.fuel_consumption);
}

#[test]
fn speeds_strictly_increasing() {
    let (easy, medium, hardcore) = presets();
    assert!(hardcore.player_speed > medium.player_speed);
    assert!(medium.player_speed > easy.player_speed);
    assert!(hardcore.bullet_speed > medium.bullet_speed);
    assert!(medium.bullet_speed > easy.bullet_speed);
    assert!(hardcore.power_up_speed > medium.power_up_speed);
    assert!(medium.power_up_speed > easy.power_up_speed);
}

#[test]
fn intervals_strictly_decreasing() {
    let (easy, medium, hardcore) = presets();
    assert!(hardcore.shoot_interval < medium.shoot_interval);
    assert!(medium.shoot_interval < easy.shoot_interval);
    assert!(hardcore.enemy_spawn_interval < medium.enemy_spawn_interval);
    assert!(medium.enemy_spawn_interval < easy.enemy_spawn_interval);
    assert!(hardcore.power_up_spawn_interval < medium.power_up_spawn_interval);
    assert!(medium.power_up_spawn_interval < easy.power_up_spawn_interval);
}

#[test]
fn enemy_cooldowns_shrink_with_difficulty() {
    let (easy, medium, hardcore) = presets();
    for kind in [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Tank] {
        assert!(hardcore.enemy_cooldown(kind) < medium.enemy_cooldown(kind));
        assert!(medium.enemy_cooldown(kind) < easy.enemy_cooldown(kind));
    }
}

#[test]
fn per_kind_lookup_matches_table() {
    let easy = Mode::preset(Difficulty::Easy);
    assert_eq!(easy.enemy_speed(EnemyKind::Fast), 1.0);
    assert_eq!(easy.enemy_speed(EnemyKind::Tank), 0.3);
    assert_eq!(easy.enemy_speed(EnemyKind::Basic), 0.5);
    assert_eq!(easy.enemy_cooldown(EnemyKind::Fast), 180.0);
    assert_eq!(easy.enemy_cooldown(EnemyKind::Tank), 120.0);
    assert_eq!(easy.enemy_cooldown(EnemyKind::Basic), 240.0);
}

#[test]
fn fast_outruns_basic_outruns_tank() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hardcore] {
        let mode = Mode::preset(difficulty);
        assert!(mode.enemy_speed(EnemyKind::Fast) > mode.enemy_speed(EnemyKind::Basic));
        assert!(mode.enemy_speed(EnemyKind::Basic) > mode.enemy_speed(EnemyKind::Tank));
    }
}
