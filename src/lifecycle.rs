/// Turns hit flags into destruction and expires finished effects.
///
/// Removals and new effects are both collected during the pass and applied
/// afterwards, expiry first, so an effect created this tick is never
/// expired in the same tick.

use std::collections::HashSet;

use crate::cooldown::Category;
use crate::entities::{EntityId, EntityKind, GameState, GameStatus, Point};

/// Outcome of a lifecycle pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    pub enemies_destroyed: u32,
    pub effects_expired: u32,
    pub player_damaged: bool,
    pub player_removed: bool,
}

pub fn run(state: &mut GameState, now: u64) -> Transitions {
    let mut out = Transitions::default();
    let mut doomed: HashSet<EntityId> = HashSet::new();
    let mut booms: Vec<Point> = Vec::new();
    let cooldowns = &state.cooldowns;

    for entity in state.store.iter_mut() {
        match &mut entity.kind {
            EntityKind::Enemy(enemy) if enemy.hit => {
                doomed.insert(entity.id);
                booms.push(entity.pos);
                out.enemies_destroyed += 1;
            }
            EntityKind::BoomEffect { spawned_at } => {
                if cooldowns.elapsed_since(Category::BoomLifetime, *spawned_at, now) {
                    doomed.insert(entity.id);
                    out.effects_expired += 1;
                }
            }
            EntityKind::Player(player) if player.hit => {
                player.hit = false;
                player.life = player.life.saturating_sub(1);
                booms.push(entity.pos);
                out.player_damaged = true;
                log::info!("Player hit, {} lives left", player.life);
                if player.life == 0 {
                    doomed.insert(entity.id);
                    out.player_removed = true;
                }
            }
            _ => {}
        }
    }

    state.store.remove_all(&doomed);
    for pos in booms {
        state
            .store
            .insert(pos, EntityKind::BoomEffect { spawned_at: now });
    }

    state.kills += out.enemies_destroyed;
    if out.player_removed {
        state.status = GameStatus::GameOver;
        log::info!("Game over after {} kills", state.kills);
    }
    out
}
