//! Trait contracts for TUI panels
//!
//! App routes input to whichever panel has focus; panels declare what they
//! can do through these traits instead of App knowing every panel's keys.
//!
//! - [`Interactive`] - panels that handle keyboard input
//! - [`Scrollable`] - panels whose content can exceed the viewport

mod interactive;
mod scrollable;

pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
