/// Per-kind movement rules.
///
/// Entities with an id at or above `fresh` were spawned this tick and are
/// left where they were placed.  Projectiles that leave the viewport are
/// collected during the pass and dropped once it completes.

use std::collections::HashSet;

use rand::Rng;

use crate::constants::*;
use crate::entities::{DirectionSet, EnemyState, EntityId, EntityKind, GameState, Point, Rect};

pub fn run(
    state: &mut GameState,
    bounds: Rect,
    directions: DirectionSet,
    fresh: EntityId,
    rng: &mut impl Rng,
) {
    let mut culled: HashSet<EntityId> = HashSet::new();

    for entity in state.store.iter_mut() {
        if entity.id >= fresh {
            continue;
        }
        match &mut entity.kind {
            EntityKind::Player(_) => step_player(&mut entity.pos, bounds, directions),
            EntityKind::Background => step_background(&mut entity.pos, bounds),
            EntityKind::Bullet => {
                if !step_bullet(&mut entity.pos, bounds) {
                    culled.insert(entity.id);
                }
            }
            EntityKind::EnemyBullet => {
                if !step_enemy_bullet(&mut entity.pos, bounds) {
                    culled.insert(entity.id);
                }
            }
            EntityKind::Enemy(enemy) => step_enemy(&mut entity.pos, enemy, bounds, rng),
            EntityKind::BoomEffect { .. } => {}
        }
    }

    state.store.remove_all(&culled);
}

/// `lo` wins when the range is empty, so an undersized viewport pins the
/// entity to its top-left instead of panicking.
fn clamp_axis(value: i32, lo: i32, hi: i32) -> i32 {
    value.min(hi).max(lo)
}

pub fn step_player(pos: &mut Point, bounds: Rect, directions: DirectionSet) {
    let (dx, dy) = directions.axis_delta(PLAYER_STEP);
    pos.x = clamp_axis(pos.x + dx, bounds.left(), bounds.right() - PLAYER_WIDTH);
    pos.y = clamp_axis(pos.y + dy, bounds.top(), bounds.bottom() - PLAYER_HEIGHT);
}

/// Scroll down; a tile that drops fully below the viewport goes back to the top.
pub fn step_background(pos: &mut Point, bounds: Rect) {
    let y = pos.y + BACKGROUND_SCROLL;
    pos.y = if y > bounds.bottom() {
        bounds.top() - BACKGROUND_RECYCLE_OFFSET
    } else {
        y
    };
}

/// Returns `false` once the bullet has fully left through the top.
pub fn step_bullet(pos: &mut Point, bounds: Rect) -> bool {
    pos.y -= BULLET_HEIGHT;
    pos.y + BULLET_HEIGHT >= bounds.top()
}

/// Returns `false` once the bullet has fully left through the bottom.
pub fn step_enemy_bullet(pos: &mut Point, bounds: Rect) -> bool {
    pos.y += ENEMY_BULLET_HEIGHT - ENEMY_BULLET_SLOWDOWN;
    pos.y <= bounds.bottom()
}

fn random_speed(rng: &mut impl Rng) -> i32 {
    rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX)
}

fn away_speed(rng: &mut impl Rng) -> i32 {
    rng.gen_range(ENEMY_AWAY_MIN..=ENEMY_AWAY_MAX)
}

/// Enemy patrol: straight entry from above, then bounce around the
/// viewport with a fresh random velocity after every wall contact.
pub fn step_enemy(pos: &mut Point, enemy: &mut EnemyState, bounds: Rect, rng: &mut impl Rng) {
    if !enemy.entered_viewport && pos.y > bounds.top() {
        enemy.entered_viewport = true;
        enemy.vx = random_speed(rng);
        enemy.vy = away_speed(rng);
        log::trace!("Enemy entered viewport at ({}, {})", pos.x, pos.y);
    }

    pos.x += enemy.vx;
    pos.y += enemy.vy;

    // Side walls apply even during entry.
    if pos.x <= bounds.left() {
        pos.x = bounds.left();
        enemy.vx = away_speed(rng);
        enemy.vy = random_speed(rng);
    } else if pos.x + ENEMY_WIDTH >= bounds.right() {
        pos.x = bounds.right() - ENEMY_WIDTH;
        enemy.vx = -away_speed(rng);
        enemy.vy = random_speed(rng);
    }

    if !enemy.entered_viewport {
        return;
    }
    if pos.y <= bounds.top() {
        pos.y = bounds.top();
        enemy.vx = random_speed(rng);
        enemy.vy = away_speed(rng);
    } else if pos.y + ENEMY_HEIGHT >= bounds.bottom() {
        pos.y = bounds.bottom() - ENEMY_HEIGHT;
        enemy.vx = random_speed(rng);
        enemy.vy = ENEMY_BOTTOM_BOUNCE_VY;
    }
}
