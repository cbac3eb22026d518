#![forbid(unsafe_code)]

pub mod easing;
pub mod model;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod time;

pub use easing::Easing;
pub use time::Clock;
