//! Per-player lifecycle state.
//!
//! Contains the warmup and cooldown registries. Both are thread-safe
//! concurrent maps: the host's main loop is a single logical scheduling
//! thread, but interrupt triggers can arrive from event callbacks a
//! conforming host dispatches elsewhere.

mod cooldown;
mod warmup;

pub use cooldown::CooldownRegistry;
pub use warmup::WarmupRegistry;
