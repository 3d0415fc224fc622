//! Time and randomness capabilities injected into the simulated pages.
//!
//! Nothing in the page state reads the wall clock or a global RNG directly.
//! Instead the [`App`](crate::App) owns a [`Clock`] and a [`RandomSource`]
//! and hands them down on every update, so the whole dashboard can be driven
//! deterministically from tests.
//!
//! - [`clock`]: [`Clock`] trait with [`SystemClock`] and [`ManualClock`]
//! - [`random`]: [`RandomSource`] trait with [`SeededRandom`] and [`ScriptedRandom`]
//! - [`timer`]: [`Interval`] and [`Deadline`], both evaluated against clock readings

pub mod clock;
pub mod random;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use timer::{Deadline, Interval};
