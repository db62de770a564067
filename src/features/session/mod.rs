//! The Pomodoro session core.
//!
//! The state machine, its side-effect protocol, and the wall-clock
//! controller that drives them:
//! - [`machine::SessionMachine`] - pure work/break state transitions
//! - [`effects`] - effect requests, collaborator traits, dispatcher
//! - [`controller::SessionController`] - tick scheduling over wall time

pub mod controller;
pub mod effects;
pub mod machine;
pub mod messages;
pub mod notifier;
pub mod phase;
pub mod timer;

pub use controller::SessionController;
pub use effects::{Effect, EffectDispatcher};
pub use machine::SessionMachine;
pub use notifier::DesktopNotifier;
pub use phase::{Phase, PhaseDurations};
pub use timer::{format_duration, format_seconds_mmss, parse_duration};
