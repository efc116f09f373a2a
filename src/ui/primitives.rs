//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`ProgressButton`] - Circular add button with an animated progress arc
//! - [`ArcGeometry`] / [`ProgressAnimation`] - Arc layout and eased progress state
//! - [`Docked`] - Places a control on a host element using layout constraints

pub mod docked;
pub mod progress_arc;
pub mod progress_button;

pub use docked::{HostId, docked};
pub use progress_button::{DEMO_PROGRESS, ProgressButton};
