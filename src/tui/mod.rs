//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Intent, ScheduledEffect)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: the effects boundary (terminal, threads, timers)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
