//! UI module for the progress button demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): canvas programs and `Widget` implementations
//! - **Animation** (`animation`): eased pointer feedback
//! - **Theme** (`theme`): colors and container styles

pub mod animation;
pub mod primitives;
pub mod theme;
