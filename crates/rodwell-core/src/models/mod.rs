//! Domain models for the Rodwell calculator.

mod birth;
mod form;
mod lab;
mod maternal;
mod result;

pub use birth::*;
pub use form::*;
pub use lab::*;
pub use maternal::*;
pub use result::*;
