//! Password generation from configurable character pools.

pub mod catalog;
mod generate;
pub mod output;
mod request;

pub use catalog::{Catalog, CharacterClass, Control, ControlKind, LengthTier};
pub use generate::{Password, PasswordGenerator, generate};
pub use request::GenerationRequest;
