/// Projectile hit detection.
///
/// Hits use an offset test instead of plain rectangle overlap: the
/// projectile's top-left point must fall inside the target rectangle shrunk
/// or grown by a different margin on each edge.  The uneven margins are
/// intended; keep them as they are.

use std::collections::HashSet;

use crate::constants::*;
use crate::entities::{EntityId, EntityKind, GameState, KindTag, Point, Rect};

/// What a collision pass found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Projectiles that struck something and were removed.
    pub spent: HashSet<EntityId>,
    /// Enemies flagged as hit, in the order they were struck.
    pub enemies_hit: Vec<EntityId>,
    /// Enemy bullets that struck the player this tick.
    pub player_hits: u32,
}

/// Asymmetric margin test of a projectile's position against a target.
pub fn margin_hit(p: Point, target: &Rect) -> bool {
    p.x < target.x + target.width - HIT_MARGIN_RIGHT
        && p.x > target.x - HIT_MARGIN_LEFT
        && p.y < target.y + target.height - HIT_MARGIN_BOTTOM
        && p.y > target.y + HIT_MARGIN_TOP
}

/// Resolve bullets against enemies and enemy bullets against the player.
///
/// Each projectile is checked once and can hit at most one target.
/// Entities spawned this tick (id at or above `fresh`) take no part.
pub fn run(state: &mut GameState, fresh: EntityId) -> Collisions {
    let mut found = Collisions::default();

    // ── Pass 1: read-only detection ───────────────────────────────────────────
    let enemies: Vec<(EntityId, Rect)> = state
        .store
        .of_kind(KindTag::Enemy)
        .filter(|e| e.id < fresh)
        .map(|e| (e.id, e.rect()))
        .collect();
    let player: Option<Rect> = state
        .store
        .player()
        .filter(|p| p.id < fresh)
        .map(|p| p.rect());
    let mut flagged: HashSet<EntityId> = HashSet::new();

    for projectile in state.store.iter().filter(|e| e.id < fresh) {
        match projectile.tag() {
            KindTag::Bullet => {
                let target = enemies
                    .iter()
                    .find(|(_, rect)| margin_hit(projectile.pos, rect));
                if let Some((enemy_id, _)) = target {
                    found.spent.insert(projectile.id);
                    if flagged.insert(*enemy_id) {
                        found.enemies_hit.push(*enemy_id);
                    }
                }
            }
            KindTag::EnemyBullet => {
                if let Some(rect) = &player {
                    if margin_hit(projectile.pos, rect) {
                        found.spent.insert(projectile.id);
                        found.player_hits += 1;
                    }
                }
            }
            _ => {}
        }
    }

    // ── Pass 2: apply ─────────────────────────────────────────────────────────
    for entity in state.store.iter_mut() {
        match &mut entity.kind {
            EntityKind::Enemy(enemy) if flagged.contains(&entity.id) => {
                enemy.hit = true;
            }
            EntityKind::Player(player) => {
                // Toggle per hit: an even number of hits leaves the flag unchanged.
                for _ in 0..found.player_hits {
                    player.toggle_hit();
                }
            }
            _ => {}
        }
    }
    state.store.remove_all(&found.spent);

    if found.player_hits > 0 {
        log::debug!("Player struck by {} enemy bullet(s)", found.player_hits);
    }
    found
}
