/// Per-category "last event" timestamps gating spawns and despawns.
///
/// All times are simulated milliseconds supplied by the caller.

use crate::config::SimConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    EnemySpawn,
    PlayerFire,
    /// Per-enemy; the timestamp lives on each enemy record.
    EnemyFire,
    /// Per-effect; gates despawn rather than spawn.
    BoomLifetime,
}

impl Category {
    const fn index(self) -> usize {
        match self {
            Category::EnemySpawn => 0,
            Category::PlayerFire => 1,
            Category::EnemyFire => 2,
            Category::BoomLifetime => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CooldownTracker {
    thresholds: [u64; 4],
    last: [Option<u64>; 4],
}

impl CooldownTracker {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            thresholds: [
                config.enemy_spawn_ms,
                config.player_fire_ms,
                config.enemy_fire_ms,
                config.boom_lifetime_ms,
            ],
            last: [None; 4],
        }
    }

    pub fn threshold(&self, category: Category) -> u64 {
        self.thresholds[category.index()]
    }

    pub fn last(&self, category: Category) -> Option<u64> {
        self.last[category.index()]
    }

    /// First-tick seeding: the global categories start counting from `now`
    /// so nothing fires or spawns the instant the session begins.
    pub fn seed(&mut self, now: u64) {
        for category in [Category::EnemySpawn, Category::PlayerFire] {
            let slot = &mut self.last[category.index()];
            if slot.is_none() {
                *slot = Some(now);
            }
        }
    }

    /// Strictly more than the threshold has passed since the last recorded
    /// event.  A category with no event yet counts as elapsed.
    pub fn elapsed(&self, category: Category, now: u64) -> bool {
        match self.last(category) {
            Some(since) => self.elapsed_since(category, since, now),
            None => true,
        }
    }

    /// Same comparison against an externally held timestamp (enemy fire,
    /// effect age).
    pub fn elapsed_since(&self, category: Category, since: u64, now: u64) -> bool {
        now.saturating_sub(since) > self.threshold(category)
    }

    pub fn record(&mut self, category: Category, now: u64) {
        self.last[category.index()] = Some(now);
    }
}
