/// Rendering layer — all terminal I/O lives here.
///
/// Receives a mutable writer and an immutable view of the simulation.  No
/// game logic is performed; entity rectangles in viewport units are scaled
/// onto whatever terminal grid is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use scroll_shooter::entities::{EntityView, KindTag, Point, Rect};
use scroll_shooter::Simulation;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STARS: Color = Color::DarkGrey;
const C_HUD_KILLS: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_BOOM: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Star offsets inside one background tile, in viewport units.
const STARS: &[(i32, i32)] = &[
    (23, 40), (311, 95), (142, 180), (377, 260), (64, 333), (205, 410),
    (290, 488), (18, 560), (168, 641), (350, 702), (97, 790), (240, 866),
    (381, 930), (52, 1012), (199, 1090), (320, 1150),
];

// ── Screen mapping ────────────────────────────────────────────────────────────

/// Maps viewport coordinates onto the terminal rows between the HUD (row 0)
/// and the hint line (last row).
struct Screen {
    viewport: Rect,
    cols: i32,
    rows: i32,
}

impl Screen {
    fn new(viewport: Rect, cols: u16, rows: u16) -> Self {
        Self {
            viewport,
            cols: (cols as i32).max(1),
            rows: (rows as i32 - 2).max(1),
        }
    }

    /// Terminal cell for a viewport point, or `None` when off the field.
    fn cell(&self, p: Point) -> Option<(u16, u16)> {
        let vp = &self.viewport;
        if vp.width <= 0 || vp.height <= 0 {
            return None;
        }
        let col = (p.x - vp.x) * self.cols / vp.width;
        let row = (p.y - vp.y) * self.rows / vp.height;
        if p.x < vp.x || p.y < vp.y || col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col as u16, row as u16 + 1))
    }

    /// Centre of an entity, which is where its glyph goes.
    fn centre(&self, e: &EntityView) -> Option<(u16, u16)> {
        self.cell(Point::new(
            e.pos.x + e.size.width / 2,
            e.pos.y + e.size.height / 2,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, sim: &Simulation, viewport: Rect) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let screen = Screen::new(viewport, cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Store order already puts backgrounds first.
    for entity in sim.entities() {
        match entity.tag {
            KindTag::Background => draw_background(out, &screen, &entity)?,
            KindTag::Player => draw_glyph(out, &screen, &entity, "/▲\\", C_PLAYER)?,
            KindTag::Enemy => draw_glyph(out, &screen, &entity, "«▼»", C_ENEMY)?,
            KindTag::Bullet => draw_glyph(out, &screen, &entity, "║", C_BULLET_PLAYER)?,
            KindTag::EnemyBullet => draw_glyph(out, &screen, &entity, "↓", C_BULLET_ENEMY)?,
            KindTag::BoomEffect => draw_glyph(out, &screen, &entity, "✸", C_BOOM)?,
        }
    }

    draw_hud(out, sim, cols)?;
    draw_controls_hint(out, rows)?;

    if sim.is_game_over() {
        draw_game_over(out, sim, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, screen: &Screen, tile: &EntityView) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STARS))?;
    for &(dx, dy) in STARS {
        if let Some((col, row)) = screen.cell(Point::new(tile.pos.x + dx, tile.pos.y + dy)) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("."))?;
        }
    }
    Ok(())
}

/// Draw `glyph` centred on the entity.  Multi-cell glyphs are shifted left so
/// their middle cell sits on the entity centre.
fn draw_glyph<W: Write>(
    out: &mut W,
    screen: &Screen,
    entity: &EntityView,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row)) = screen.centre(entity) else {
        return Ok(());
    };
    let half = glyph.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(col.saturating_sub(half), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, sim: &Simulation, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_KILLS))?;
    out.queue(Print(format!("Kills:{:>4}", sim.state().kills)))?;

    let lives_str = format!("Lives:{}", "♥".repeat(sim.player_life() as usize));
    let rx = cols.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    sim: &Simulation,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let kills_line = format!("Enemies downed: {:>4}", sim.state().kills);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (kills_line.as_str(), Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
