/// Tick orchestration.
///
/// [`tick`] takes an immutable reference to the current `GameState`, the
/// per-tick input and an RNG handle, and returns a brand-new `GameState`.
/// Side effects are limited to the injected RNG.  [`Simulation`] wraps the
/// same function for a driver that just wants to call `update` on a timer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision;
use crate::config::SimConfig;
use crate::cooldown::CooldownTracker;
use crate::entities::{
    DirectionSet, EntityKind, EntityView, GameState, GameStatus, KindTag, Rect,
};
use crate::kinematics;
use crate::lifecycle;
use crate::spawn;
use crate::store::EntityStore;

/// Everything the outside world supplies for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInput {
    pub bounds: Rect,
    pub directions: DirectionSet,
    /// Simulated wall-clock time in milliseconds.
    pub now_ms: u64,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// An empty session.  The first tick seeds backgrounds, player and cooldowns.
pub fn init_state(config: &SimConfig) -> GameState {
    GameState {
        store: EntityStore::new(),
        cooldowns: CooldownTracker::new(config),
        enemies_spawned: 0,
        kills: 0,
        status: GameStatus::Waiting,
        frame: 0,
        last_tick_ms: 0,
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

impl GameState {
    /// Current player life, or 0 once the player is gone (or not yet spawned).
    pub fn player_life(&self) -> u32 {
        match self.store.player().map(|p| &p.kind) {
            Some(EntityKind::Player(player)) => player.life,
            _ => 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn enemy_count(&self) -> usize {
        self.store.count(KindTag::Enemy)
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Stage order: seed (first tick only), spawn, kinematics, collision,
/// lifecycle.  Entities created during the spawn stage are placed but not
/// moved or collided until the next tick.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();
    let now = input.now_ms;

    // ── 1. First-tick seeding ────────────────────────────────────────────────
    if next.status == GameStatus::Waiting {
        next.cooldowns.seed(now);
    }

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    let fresh = next.store.watermark();
    spawn::run(&mut next, input.bounds, input.directions, now, config, rng);
    if next.status == GameStatus::Waiting {
        next.status = GameStatus::Playing;
    }

    // ── 3. Move ──────────────────────────────────────────────────────────────
    kinematics::run(&mut next, input.bounds, input.directions, fresh, rng);

    // ── 4. Collide ───────────────────────────────────────────────────────────
    let hits = collision::run(&mut next, fresh);

    // ── 5. Destroy / expire ──────────────────────────────────────────────────
    let transitions = lifecycle::run(&mut next, now);

    next.frame += 1;
    next.last_tick_ms = now;
    log::trace!(
        "tick {} @{}ms: {} entities, {} enemies, {} hit, {} destroyed",
        next.frame,
        now,
        next.store.len(),
        next.enemy_count(),
        hits.spent.len(),
        transitions.enemies_destroyed
    );
    next
}

// ── Stateful façade ──────────────────────────────────────────────────────────

/// Owns the state, config and RNG; the driver calls [`Simulation::update`]
/// once per fixed tick.
#[derive(Clone, Debug)]
pub struct Simulation<R: Rng = StdRng> {
    state: GameState,
    config: SimConfig,
    rng: R,
}

impl Simulation<StdRng> {
    /// Seeded from `config.seed` when present, otherwise from entropy.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: SimConfig, rng: R) -> Self {
        Self {
            state: init_state(&config),
            config,
            rng,
        }
    }

    pub fn update(&mut self, bounds: Rect, directions: DirectionSet, now_ms: u64) {
        let input = TickInput {
            bounds,
            directions,
            now_ms,
        };
        self.state = tick(&self.state, &input, &self.config, &mut self.rng);
    }

    /// Everything live, in draw order (backgrounds first).
    pub fn entities(&self) -> Vec<EntityView> {
        self.state.store.views()
    }

    pub fn player_life(&self) -> u32 {
        self.state.player_life()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
