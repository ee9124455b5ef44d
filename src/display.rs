//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! game session.  No game logic is performed; this module only translates
//! state into terminal commands.  The simulation runs in arena pixels; the
//! renderer maps those onto character cells at a fixed scale.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use blastar::compute::{GameOverReason, GameSession, GameStatus};
use blastar::entities::{Enemy, EnemyKind, ParticleColor, PowerUpKind};
use blastar::mode::Difficulty;

/// Arena pixels per character cell.
pub const CELL_W: f32 = 8.0;
pub const CELL_H: f32 = 16.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_FUEL: Color = Color::Green;
const C_HUD_FUEL_LOW: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_BASIC: Color = Color::Cyan;
const C_ENEMY_FAST: Color = Color::Red;
const C_ENEMY_TANK: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_POWER_UP_FUEL: Color = Color::Yellow;
const C_POWER_UP_SECONDARY: Color = Color::Magenta;
const C_NARRATION: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Play area starts below the HUD row and the top border.
const PLAY_TOP: u16 = 2;
const PLAY_LEFT: u16 = 1;

fn cell(x: f32, y: f32) -> (i32, i32) {
    (
        PLAY_LEFT as i32 + (x / CELL_W).round() as i32,
        PLAY_TOP as i32 + (y / CELL_H).round() as i32,
    )
}

/// Clipping canvas for the play area: sprites that stray over a border
/// (spawning above the arena, sliding past the bottom) are simply not drawn.
struct Canvas {
    width: u16,
    height: u16,
}

impl Canvas {
    fn put<W: Write>(&self, out: &mut W, col: i32, row: i32, glyph: &str) -> std::io::Result<()> {
        if col < PLAY_LEFT as i32
            || row < PLAY_TOP as i32
            || col >= i32::from(self.width.saturating_sub(1))
            || row >= i32::from(self.height.saturating_sub(2))
        {
            return Ok(());
        }
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(glyph))?;
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `narration` is the most recent speech cue,
/// shown on the message line until it ages out.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    term_width: u16,
    term_height: u16,
    narration: Option<&str>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term_width, term_height)?;
    draw_hud(out, session, term_width)?;

    let canvas = Canvas {
        width: term_width,
        height: term_height,
    };

    if session.status == GameStatus::NotStarted {
        draw_mode_prompt(out, term_width, term_height)?;
    } else {
        for particle in &session.particles {
            draw_particle(out, &canvas, particle.x, particle.y, particle.color)?;
        }
        for power_up in &session.power_ups {
            draw_power_up(out, &canvas, power_up.x, power_up.y, power_up.kind)?;
        }
        for enemy in &session.enemies {
            draw_enemy(out, &canvas, enemy)?;
        }
        for bullet in &session.bullets {
            let (col, row) = cell(bullet.x, bullet.y);
            out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
            canvas.put(out, col, row, "║")?;
        }
        for bullet in &session.enemy_bullets {
            let (col, row) = cell(bullet.x, bullet.y);
            out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
            canvas.put(out, col, row, "↓")?;
        }
        draw_player(out, &canvas, session)?;

        if let Some(line) = narration {
            draw_narration(out, line, term_width, term_height)?;
        }
    }

    draw_controls_hint(out, term_height)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &GameSession, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", session.score)))?;

    // Mode — centre
    let mode_str = match session.difficulty {
        Some(Difficulty::Easy) => "[ EASY ]",
        Some(Difficulty::Medium) => "[ MEDIUM ]",
        Some(Difficulty::Hardcore) => "[ HARDCORE ]",
        None => "[ SELECT MODE ]",
    };
    let mode_color = match session.difficulty {
        Some(Difficulty::Easy) => Color::Green,
        Some(Difficulty::Medium) => Color::Yellow,
        Some(Difficulty::Hardcore) => Color::Red,
        None => Color::White,
    };
    let mx = (width / 2).saturating_sub(mode_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(mx, 0))?;
    out.queue(style::SetForegroundColor(mode_color))?;
    out.queue(Print(mode_str))?;

    // Fuel gauge — right
    let fuel = session.player.fuel;
    let frac = (fuel / session.player.max_fuel).clamp(0.0, 1.0);
    let filled = (frac * 10.0).round() as usize;
    let gauge = format!(
        "Fuel [{}{}] {:>3.0}",
        "█".repeat(filled),
        "░".repeat(10 - filled),
        fuel.floor()
    );
    let rx = width.saturating_sub(gauge.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(if frac < 0.25 {
        C_HUD_FUEL_LOW
    } else {
        C_HUD_FUEL
    }))?;
    out.queue(Print(&gauge))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, canvas: &Canvas, session: &GameSession) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← nose
    //  /█\      ← wings
    let p = &session.player;
    let (col, row) = cell(p.x, p.y);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    canvas.put(out, col, row, "▲")?;
    canvas.put(out, col - 1, row + 1, "/█\\")?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, canvas: &Canvas, enemy: &Enemy) -> std::io::Result<()> {
    let (col, row) = cell(enemy.x, enemy.y);
    match enemy.kind {
        EnemyKind::Basic => {
            out.queue(style::SetForegroundColor(C_ENEMY_BASIC))?;
            canvas.put(out, col, row, "<▼>")?;
        }
        EnemyKind::Fast => {
            out.queue(style::SetForegroundColor(C_ENEMY_FAST))?;
            canvas.put(out, col, row, "}▼{")?;
        }
        EnemyKind::Tank => {
            out.queue(style::SetForegroundColor(C_ENEMY_TANK))?;
            let sprite = if enemy.health < 2 { "[──]" } else { "[◘◘]" };
            canvas.put(out, col, row, sprite)?;
        }
    }
    Ok(())
}

fn draw_power_up<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    x: f32,
    y: f32,
    kind: PowerUpKind,
) -> std::io::Result<()> {
    let (col, row) = cell(x, y);
    match kind {
        PowerUpKind::Fuel => {
            out.queue(style::SetForegroundColor(C_POWER_UP_FUEL))?;
            canvas.put(out, col, row, "(F)")?;
        }
        PowerUpKind::Secondary => {
            out.queue(style::SetForegroundColor(C_POWER_UP_SECONDARY))?;
            canvas.put(out, col, row, "(◆)")?;
        }
    }
    Ok(())
}

fn draw_particle<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    x: f32,
    y: f32,
    color: ParticleColor,
) -> std::io::Result<()> {
    let (col, row) = cell(x, y);
    let c = match color {
        ParticleColor::Yellow => Color::Yellow,
        ParticleColor::Orange => Color::DarkYellow,
        ParticleColor::Red => Color::Red,
    };
    out.queue(style::SetForegroundColor(c))?;
    canvas.put(out, col, row, "·")?;
    Ok(())
}

// ── Narration line ────────────────────────────────────────────────────────────

fn draw_narration<W: Write>(
    out: &mut W,
    line: &str,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, height.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(C_NARRATION))?;
    out.queue(Print(format!("» {} «", line)))?;
    Ok(())
}

// ── Mode-select prompt ────────────────────────────────────────────────────────

fn draw_mode_prompt<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let cx = width / 2;
    let cy = height / 2;

    let lines: &[(&str, Color)] = &[
        ("★  B L A S T A R  ★", Color::Cyan),
        ("", Color::White),
        ("Select Mode:", Color::White),
        ("1 - Easy", Color::Green),
        ("2 - Medium", Color::Yellow),
        ("3 - Hardcore", Color::Red),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(4) + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → ↑ ↓ : Move   SPACE : Fire   V : Power-up variant   Q : Quit",
    ))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

pub fn draw_game_over<W: Write>(
    out: &mut W,
    reason: GameOverReason,
    score: u32,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let reason_line = match reason {
        GameOverReason::OutOfFuel => "Out of fuel",
        GameOverReason::HitByEnemyFire => "Hit by enemy fire",
        GameOverReason::CollisionWithEnemy => "Rammed by an enemy",
    };
    let score_line = format!("Final Score: {}", score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (reason_line, Color::White),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
