//! Smooth horizontal scrolling for the card strip
//!
//! The carousel core issues fire-and-forget [`ScrollCommand`]s; this module
//! is the host side that turns them into eased, timed offset changes.
//!
//! - `easing` - pure easing curves (cubic, quintic, exponential)
//! - `timing` - progress and interpolation helpers
//! - `config` - configuration helpers over the core [`ScrollConfig`]
//! - `animation` - the animator, which is also the carousel's scroll surface
//!
//! # Usage
//!
//! ```ignore
//! use cardswipe_tui::scroll::ScrollAnimator;
//!
//! let mut carousel = Carousel::new(deck, config.carousel.clone(), width)?;
//! carousel.mount(ScrollAnimator::new(config.ui.scroll.clone()));
//!
//! // In the main loop, advance the animation before drawing
//! let offset = carousel.surface_mut().map(|s| s.update()).unwrap_or_default();
//! ```
//!
//! [`ScrollCommand`]: cardswipe_core::carousel::ScrollCommand
//! [`ScrollConfig`]: cardswipe_core::ScrollConfig

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
