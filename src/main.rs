mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use scroll_shooter::{Direction, DirectionSet, SimConfig, Simulation};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many ticks.  Covers terminals that don't emit key-release events:
/// OS key-repeat is faster than 4 ticks (160 ms), so a held key never lapses.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "scroll_shooter", about = "Vertically scrolling terminal shooter")]
struct Args {
    /// TOML file overriding simulation defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here; the terminal itself is busy with the game
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<SimConfig> {
    // `load` validates; the seed override cannot make a config invalid.
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn direction_for(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Char(' ') => Some(Direction::Fire),
        _ => None,
    }
}

/// Snapshot of every bound key seen within the last `HOLD_WINDOW` ticks.
fn held_directions(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> DirectionSet {
    key_frame
        .iter()
        .filter(|(_, last)| frame.saturating_sub(**last) <= HOLD_WINDOW)
        .filter_map(|(code, _)| direction_for(code))
        .collect()
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → start a fresh session.
///
/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map with the tick number of the last press/repeat event for
/// every key.  Each tick the still-fresh keys become one immutable
/// `DirectionSet`, so the simulation never sees input change mid-tick.
fn game_loop<W: Write>(
    out: &mut W,
    config: &SimConfig,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut sim = Simulation::new(config.clone());
    let viewport = config.viewport();
    let tick = Duration::from_millis(config.tick_ms);
    let started = Instant::now();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if sim.is_game_over() => {
                            return Ok(false);
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

        let directions = held_directions(&key_frame, frame);
        let now_ms = started.elapsed().as_millis() as u64;
        sim.update(viewport, directions, now_ms);

        display::render(out, &sim, viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = load_config(&args)?;
    log::info!("Starting with seed {:?}", config.seed);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the game loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(out: &mut W, config: &SimConfig, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut session = 1;
    loop {
        log::info!("Session {} started", session);
        if game_loop(out, config, rx)? {
            break;
        }
        session += 1;
    }
    Ok(())
}
