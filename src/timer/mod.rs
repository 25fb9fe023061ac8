//! Timer module for the stretch & gym reminder.
//!
//! This module contains the clock-driven core:
//! - `clock`: Wall-clock sources (system and manual)
//! - `evaluator`: Per-frame alert evaluation

pub mod clock;
pub mod evaluator;

pub use clock::{Clock, ManualClock, SystemClock};
pub use evaluator::TimerEvaluator;
