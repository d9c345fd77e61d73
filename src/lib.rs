//! Scroll Shooter — simulation core for a vertically scrolling arcade shooter.
//!
//! Modules, leaf-first:
//! - `entities`, `store`: data model and the ordered entity store
//! - `cooldown`: spawn/fire/expiry timers
//! - `spawn`, `kinematics`, `collision`, `lifecycle`: the tick stages
//! - `compute`: `tick` and the `Simulation` façade
//! - `config`, `error`: runtime tunables and their errors

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod cooldown;
pub mod entities;
pub mod error;
pub mod kinematics;
pub mod lifecycle;
pub mod spawn;
pub mod store;

pub use compute::{init_state, tick, Simulation, TickInput};
pub use config::SimConfig;
pub use entities::{Direction, DirectionSet, EntityView, GameState, GameStatus, KindTag, Rect};
pub use error::{GameError, GameResult};
