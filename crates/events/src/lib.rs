//! uWrap in-process event bus.
//!
//! - [`EventBus`]: publish/subscribe hub backed by `tokio::sync::broadcast`.
//! - [`PlatformEvent`]: the domain event envelope handlers publish after a
//!   successful mutation.
//! - [`event_types`]: the event names in use.

pub mod bus;
pub mod event_types;

pub use bus::{EventBus, PlatformEvent};
