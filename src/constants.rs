//! Fixed gameplay numbers.  `SimConfig::default()` mirrors the tunable ones.

// ── Timing ────────────────────────────────────────────────────────────────────

/// Fixed tick interval (25 Hz).
pub const TICK_MS: u64 = 40;

pub const ENEMY_SPAWN_MS: u64 = 2500;
pub const PLAYER_FIRE_MS: u64 = 150;
pub const ENEMY_FIRE_MS: u64 = 300;
/// Explosion effects disappear once older than this.
pub const BOOM_LIFETIME_MS: u64 = 1000;

// ── Viewport ──────────────────────────────────────────────────────────────────

pub const VIEWPORT_WIDTH: i32 = 400;
pub const VIEWPORT_HEIGHT: i32 = 400;

// ── Sizes ─────────────────────────────────────────────────────────────────────

pub const BACKGROUND_WIDTH: i32 = 400;
pub const BACKGROUND_HEIGHT: i32 = 1200;
pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 17;
pub const ENEMY_WIDTH: i32 = 40;
pub const ENEMY_HEIGHT: i32 = 17;
pub const BULLET_WIDTH: i32 = 4;
pub const BULLET_HEIGHT: i32 = 8;
pub const ENEMY_BULLET_WIDTH: i32 = 4;
pub const ENEMY_BULLET_HEIGHT: i32 = 8;
pub const BOOM_WIDTH: i32 = 40;
pub const BOOM_HEIGHT: i32 = 40;

// ── Motion ────────────────────────────────────────────────────────────────────

/// Player step per tick on each pressed axis.
pub const PLAYER_STEP: i32 = 4;
pub const BACKGROUND_SCROLL: i32 = 4;
/// The second tile starts this far above the viewport top.
pub const BACKGROUND_SECOND_OFFSET: i32 = 2000;
/// Where a tile re-enters after scrolling off the bottom (relative to the top).
pub const BACKGROUND_RECYCLE_OFFSET: i32 = 1996;
/// Enemy bullets travel `ENEMY_BULLET_HEIGHT - ENEMY_BULLET_SLOWDOWN` per tick.
pub const ENEMY_BULLET_SLOWDOWN: i32 = 2;

pub const ENEMY_ENTRY_VX: i32 = 0;
pub const ENEMY_ENTRY_VY: i32 = 2;
/// Full random range for a velocity component.
pub const ENEMY_SPEED_MIN: i32 = -4;
pub const ENEMY_SPEED_MAX: i32 = 4;
/// Magnitude range used when an enemy is pushed away from a wall.
pub const ENEMY_AWAY_MIN: i32 = 3;
pub const ENEMY_AWAY_MAX: i32 = 4;
/// Vertical speed after bouncing off the bottom wall.
pub const ENEMY_BOTTOM_BOUNCE_VY: i32 = -4;

// ── Collision margins ─────────────────────────────────────────────────────────

pub const HIT_MARGIN_RIGHT: i32 = 4;
pub const HIT_MARGIN_LEFT: i32 = 3;
pub const HIT_MARGIN_BOTTOM: i32 = 2;
pub const HIT_MARGIN_TOP: i32 = 2;

// ── Population ────────────────────────────────────────────────────────────────

pub const MAX_ENEMIES: usize = 5;
pub const PLAYER_LIFE: u32 = 3;
