mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use blastar::compute::{
    init_state, reset, select_mode, tick, GameEvent, GameOverReason, GameStatus, InputState,
    NARRATION_INTRO,
};
use blastar::mode::{Difficulty, SecondaryPowerUp};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// How long a narration line stays on the message row (≈3 s).
const NARRATION_TTL: u32 = 90;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Sample the five held-button signals for this frame.
fn sample_input(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputState {
    InputState {
        left: is_held(key_frame, &KeyCode::Left, frame)
            || is_held(key_frame, &KeyCode::Char('a'), frame),
        right: is_held(key_frame, &KeyCode::Right, frame)
            || is_held(key_frame, &KeyCode::Char('d'), frame),
        up: is_held(key_frame, &KeyCode::Up, frame)
            || is_held(key_frame, &KeyCode::Char('w'), frame),
        down: is_held(key_frame, &KeyCode::Down, frame)
            || is_held(key_frame, &KeyCode::Char('s'), frame),
        fire: is_held(key_frame, &KeyCode::Char(' '), frame),
    }
}

// ── Main loop ─────────────────────────────────────────────────────────────────

/// Drives the simulation at a fixed cadence.  One tick runs to completion
/// per frame; mode-select keys are honored only before a session starts,
/// and a finished session blocks until R returns it to the mode prompt.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (term_width, term_height) = terminal::size()?;

    // The simulation arena is measured in pixels; carve it out of the
    // terminal at the renderer's cell scale, leaving room for HUD, borders
    // and the hint row.
    let arena_width = f32::from(term_width.saturating_sub(2)) * display::CELL_W;
    let arena_height = f32::from(term_height.saturating_sub(4)) * display::CELL_H;

    let mut session = init_state(SecondaryPowerUp::SpeedBoost, arena_width, arena_height);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut narration: Option<(&'static str, u32)> = None;
    let mut game_over: Option<(GameOverReason, u32)> = None;
    let mut intro_played = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        // One-shot mode selection, only before a run starts.
                        KeyCode::Char('1') if session.status == GameStatus::NotStarted => {
                            session = select_mode(&session, Difficulty::Easy);
                        }
                        KeyCode::Char('2') if session.status == GameStatus::NotStarted => {
                            session = select_mode(&session, Difficulty::Medium);
                        }
                        KeyCode::Char('3') if session.status == GameStatus::NotStarted => {
                            session = select_mode(&session, Difficulty::Hardcore);
                        }
                        // Toggle which effect the secondary power-up grants.
                        KeyCode::Char('v') | KeyCode::Char('V')
                            if session.status == GameStatus::NotStarted =>
                        {
                            let flipped = match session.secondary {
                                SecondaryPowerUp::SpeedBoost => SecondaryPowerUp::WeaponBoost,
                                SecondaryPowerUp::WeaponBoost => SecondaryPowerUp::SpeedBoost,
                            };
                            session = init_state(flipped, arena_width, arena_height);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if session.status == GameStatus::GameOver =>
                        {
                            session = reset(&session);
                            game_over = None;
                            narration = None;
                            intro_played = false;
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if session.status == GameStatus::Running && !intro_played {
            narration = Some((NARRATION_INTRO, NARRATION_TTL));
            intro_played = true;
        }

        // ── One simulation tick ───────────────────────────────────────────────
        if session.status == GameStatus::Running {
            let input = sample_input(&key_frame, frame);
            let outcome = tick(&session, &input, &mut rng);
            session = outcome.session;
            for event in outcome.events {
                match event {
                    GameEvent::Narration(line) => narration = Some((line, NARRATION_TTL)),
                    GameEvent::GameOver { reason, score } => {
                        game_over = Some((reason, score));
                    }
                    // Tone cues (PlayerFired, EnemyFired, …) have no audio
                    // path in the terminal; the HUD carries the feedback.
                    _ => {}
                }
            }
        }

        // Age out the narration line.
        narration = narration.and_then(|(line, ttl)| {
            let ttl = ttl.saturating_sub(1);
            (ttl > 0).then_some((line, ttl))
        });

        let shown = narration.map(|(line, _)| line);
        display::render(out, &session, term_width, term_height, shown)?;
        if let Some((reason, score)) = game_over {
            display::draw_game_over(out, reason, score, term_width, term_height)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
