//! Animation helpers built on `iced_anim`
//!
//! The progress arc animates with iced's own `Animation` (see
//! `primitives::progress_arc`); pointer feedback uses the eased
//! transitions here.

mod hover;

pub use hover::HoverFeedback;
