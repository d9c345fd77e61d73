/// Spawn policy — the first stage of every tick.
///
/// Everything created here joins the store before kinematics runs, but the
/// tick's freshness watermark keeps it still and intangible until the next
/// tick.

use rand::Rng;

use crate::config::SimConfig;
use crate::constants::*;
use crate::cooldown::Category;
use crate::entities::{
    Direction, DirectionSet, EnemyState, EntityKind, GameState, GameStatus, KindTag, PlayerState,
    Point, Rect,
};

/// Run every spawn rule in order.
pub fn run(
    state: &mut GameState,
    bounds: Rect,
    directions: DirectionSet,
    now: u64,
    config: &SimConfig,
    rng: &mut impl Rng,
) {
    spawn_backgrounds(state, bounds);
    spawn_player(state, bounds, config);
    spawn_enemy(state, bounds, now, config, rng);
    spawn_player_bullet(state, directions, now);
    spawn_enemy_bullets(state, now);
}

/// Two stacked tiles: one flush with the viewport bottom, one well above.
pub fn spawn_backgrounds(state: &mut GameState, bounds: Rect) {
    if state.store.count(KindTag::Background) > 0 {
        return;
    }
    let lower = Point::new(bounds.x, bounds.bottom() - BACKGROUND_HEIGHT);
    let upper = Point::new(bounds.x, bounds.y - BACKGROUND_SECOND_OFFSET);
    state.store.insert(lower, EntityKind::Background);
    state.store.insert(upper, EntityKind::Background);
}

/// Only at session start; a dead player never comes back.
pub fn spawn_player(state: &mut GameState, bounds: Rect, config: &SimConfig) {
    if state.status != GameStatus::Waiting || state.store.player().is_some() {
        return;
    }
    let pos = Point::new(
        bounds.x + (bounds.width - PLAYER_WIDTH) / 2,
        bounds.bottom() - PLAYER_HEIGHT,
    );
    state
        .store
        .insert(pos, EntityKind::Player(PlayerState::new(config.player_life)));
    log::info!("Player spawned at ({}, {}) with {} lives", pos.x, pos.y, config.player_life);
}

pub fn spawn_enemy(
    state: &mut GameState,
    bounds: Rect,
    now: u64,
    config: &SimConfig,
    rng: &mut impl Rng,
) {
    if state.store.count(KindTag::Enemy) >= config.max_enemies {
        return;
    }
    let first = state.enemies_spawned == 0;
    if !first && !state.cooldowns.elapsed(Category::EnemySpawn, now) {
        return;
    }

    // One column of padding on each side of the spawn range.
    let span = (bounds.width - ENEMY_WIDTH - 2).max(1);
    let pos = Point::new(bounds.x + rng.gen_range(0..span) + 1, bounds.y - ENEMY_HEIGHT);
    state.store.insert(
        pos,
        EntityKind::Enemy(EnemyState {
            vx: ENEMY_ENTRY_VX,
            vy: ENEMY_ENTRY_VY,
            hit: false,
            last_fired: now,
            entered_viewport: false,
        }),
    );
    state.cooldowns.record(Category::EnemySpawn, now);
    state.enemies_spawned += 1;
    log::debug!("Enemy #{} spawned at x={}", state.enemies_spawned, pos.x);
}

/// One bullet, centred on the player and just above it.
pub fn spawn_player_bullet(state: &mut GameState, directions: DirectionSet, now: u64) {
    if !directions.contains(Direction::Fire) {
        return;
    }
    let Some(player) = state.store.player() else {
        return;
    };
    if !state.cooldowns.elapsed(Category::PlayerFire, now) {
        return;
    }
    let pos = Point::new(
        player.pos.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2,
        player.pos.y - BULLET_HEIGHT,
    );
    state.store.insert(pos, EntityKind::Bullet);
    state.cooldowns.record(Category::PlayerFire, now);
}

/// Every enemy whose own fire cooldown has run out shoots once, straight down.
pub fn spawn_enemy_bullets(state: &mut GameState, now: u64) {
    let cooldowns = &state.cooldowns;
    let mut muzzles: Vec<Point> = Vec::new();

    for entity in state.store.iter_mut() {
        if let EntityKind::Enemy(enemy) = &mut entity.kind {
            if cooldowns.elapsed_since(Category::EnemyFire, enemy.last_fired, now) {
                enemy.last_fired = now;
                muzzles.push(Point::new(
                    entity.pos.x + (ENEMY_WIDTH - ENEMY_BULLET_WIDTH) / 2,
                    entity.pos.y + ENEMY_HEIGHT,
                ));
            }
        }
    }

    for pos in muzzles {
        state.store.insert(pos, EntityKind::EnemyBullet);
    }
}
