/// All game entity types — pure data, no logic beyond geometry helpers.

use crate::constants::*;
use crate::cooldown::CooldownTracker;
use crate::store::EntityStore;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Integer 2D point.  Entity positions are top-left anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, used for the viewport and for entity bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn from_parts(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// First column past the right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Not a direction, but bound and snapshotted alongside them.
    Fire,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Fire,
    ];

    const fn bit(self) -> u8 {
        match self {
            Direction::Left => 1 << 0,
            Direction::Right => 1 << 1,
            Direction::Up => 1 << 2,
            Direction::Down => 1 << 3,
            Direction::Fire => 1 << 4,
        }
    }
}

/// Point-in-time snapshot of the pressed directions.
///
/// `Copy`, so the tick always works on its own value and never observes the
/// input collaborator mid-update.  The empty set is the default state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builder-style insert, handy for tests and key mapping.
    pub const fn with(self, dir: Direction) -> Self {
        Self(self.0 | dir.bit())
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub const fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Per-axis player delta.  An opposing pair held together cancels out.
    pub fn axis_delta(&self, step: i32) -> (i32, i32) {
        let axis = |neg: Direction, pos: Direction| match (self.contains(neg), self.contains(pos)) {
            (true, false) => -step,
            (false, true) => step,
            _ => 0,
        };
        (
            axis(Direction::Left, Direction::Right),
            axis(Direction::Up, Direction::Down),
        )
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Kind discriminant without per-kind state; what a renderer dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
    Background,
    Player,
    Enemy,
    Bullet,
    EnemyBullet,
    BoomEffect,
}

impl KindTag {
    /// Every entity of a kind has the same fixed size.
    pub const fn size(self) -> Size {
        match self {
            KindTag::Background => Size::new(BACKGROUND_WIDTH, BACKGROUND_HEIGHT),
            KindTag::Player => Size::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            KindTag::Enemy => Size::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            KindTag::Bullet => Size::new(BULLET_WIDTH, BULLET_HEIGHT),
            KindTag::EnemyBullet => Size::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT),
            KindTag::BoomEffect => Size::new(BOOM_WIDTH, BOOM_HEIGHT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub life: u32,
    /// Toggled by each registered hit, so two hits in one tick cancel out.
    pub hit: bool,
}

impl PlayerState {
    pub fn new(life: u32) -> Self {
        Self { life, hit: false }
    }

    pub fn toggle_hit(&mut self) {
        self.hit = !self.hit;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyState {
    pub vx: i32,
    pub vy: i32,
    pub hit: bool,
    /// Timestamp (ms) of the last shot; seeded with the spawn time.
    pub last_fired: u64,
    /// Wall bouncing against top/bottom only starts once this is set.
    pub entered_viewport: bool,
}

/// Closed set of entity kinds with their kind-specific state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Background,
    Player(PlayerState),
    Enemy(EnemyState),
    Bullet,
    EnemyBullet,
    BoomEffect { spawned_at: u64 },
}

impl EntityKind {
    pub const fn tag(&self) -> KindTag {
        match self {
            EntityKind::Background => KindTag::Background,
            EntityKind::Player(_) => KindTag::Player,
            EntityKind::Enemy(_) => KindTag::Enemy,
            EntityKind::Bullet => KindTag::Bullet,
            EntityKind::EnemyBullet => KindTag::EnemyBullet,
            EntityKind::BoomEffect { .. } => KindTag::BoomEffect,
        }
    }
}

/// Store-assigned handle.  Ids grow monotonically and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Point,
    pub kind: EntityKind,
}

impl Entity {
    pub const fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    pub const fn size(&self) -> Size {
        self.tag().size()
    }

    pub const fn rect(&self) -> Rect {
        Rect::from_parts(self.pos, self.size())
    }

    pub fn view(&self) -> EntityView {
        EntityView {
            tag: self.tag(),
            pos: self.pos,
            size: self.size(),
        }
    }
}

/// What a renderer needs to draw one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityView {
    pub tag: KindTag,
    pub pos: Point,
    pub size: Size,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// No tick has run yet.
    Waiting,
    Playing,
    /// The player's life reached zero and it left the store.
    GameOver,
}

/// The entire simulation state.  Cloneable so `tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub store: EntityStore,
    pub cooldowns: CooldownTracker,
    /// Total enemies ever spawned this session.
    pub enemies_spawned: u32,
    /// Enemies destroyed by player bullets.
    pub kills: u32,
    pub status: GameStatus,
    /// Number of completed ticks.
    pub frame: u64,
    /// `now_ms` of the most recent tick.
    pub last_tick_ms: u64,
}
