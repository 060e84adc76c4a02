//! Password generation from selectable character classes.
//!
//! [`pass`] holds the generator and the class catalog; [`cli`] and [`tui`]
//! are the two front ends built on top of it.

pub mod cli;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{ConfigurationError, Error, Result};
pub use pass::{GenerationRequest, Password, PasswordGenerator, generate};
