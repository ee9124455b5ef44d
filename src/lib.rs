//! Simulation core for a Blastar-style arcade shooter.
//!
//! The library is the game: entity state, spawning, collision, fuel, score
//! and the session state machine, all advanced one tick at a time by pure
//! functions.  Rendering and input live in the binary and only ever see
//! immutable snapshots plus the discrete events each tick emits.

pub mod compute;
pub mod entities;
pub mod geometry;
pub mod mode;
pub mod spawn;
