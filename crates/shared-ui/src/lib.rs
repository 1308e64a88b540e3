//! Shared UI components for the employer dashboard.
//!
//! Each component lives in its own directory next to a `style.css` that is
//! pulled in through `asset!`, so pages compose markup and the styling
//! follows along automatically.

pub mod components;

pub use components::*;
