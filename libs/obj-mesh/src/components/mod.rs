//! # Components
//!
//! Host components expressed as shape generator calls.

pub mod mass_object;

pub use mass_object::{export_mass_object, MassObject, MassProfile};
