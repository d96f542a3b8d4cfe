//! Declaration model for the host type system.
//!
//! Two layers, as with any description-driven model:
//! - **Deserialization layer** (`json`): raw structs mirroring the description format
//! - **Analysis layer** (`types`, `dynamic`): parsed declarations and the lookups over them

mod dynamic;
mod json;
mod types;


pub use dynamic::DynamicModel;
pub use json::ModelError;
pub use types::{Accessor, DeclKind, Declaration, Hints, Markers, Shape};
