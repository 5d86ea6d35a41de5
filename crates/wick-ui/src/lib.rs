//! wick UI - listener registry, interaction counters and carousel
//!
//! Two independent pieces operate on a `wick_dom::Document`:
//!
//! - [`HandlerRegistry`] attaches counting listeners by element id and keeps
//!   the handles needed to detach them; [`StatusReporter`] renders what it
//!   holds together with the counters stored on the elements.
//! - [`setup_carousel`] wires arrow scrolling and an item modal with
//!   outside-click dismissal.
//!
//! Missing elements are never an error: every operation quietly does
//! nothing when its target is not in the document.

mod config;
mod counter;
mod registry;
mod status;
mod carousel;

pub use config::{CarouselConfig, StatusConfig, StatusMessages};
pub use counter::{increment_counter, read_counter};
pub use registry::{EventMap, HandlerRegistry, Registration};
pub use status::StatusReporter;
pub use carousel::{setup_carousel, Carousel, ModalState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
