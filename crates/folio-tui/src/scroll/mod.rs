//! Smooth page scrolling
//!
//! The page is a tall column of rows; this module animates the row offset
//! between positions so the pinned showcase receives a continuous stream of
//! progress values instead of jumps.
//!
//! - `easing` - curves mapping `[0, 1]` onto `[0, 1]`
//! - `timing` - elapsed-time progress and interpolation
//! - `config` - helpers over [`ScrollConfig`] from folio-core
//! - `animation` - the [`ScrollAnimator`] controller
//!
//! # Usage
//!
//! ```ignore
//! use folio_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//! animator.scroll_by(10, max_scroll);
//!
//! // Once per frame
//! let row = animator.update(max_scroll);
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
