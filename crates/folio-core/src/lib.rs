pub mod config;
pub mod error;
pub mod portfolio;
pub mod segment;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use portfolio::Portfolio;
pub use segment::{ActiveIndexTracker, SegmentCount, SegmentMapper};
