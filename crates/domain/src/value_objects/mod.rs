//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod language;
mod persona;
mod user_id;

pub use coordinates::{Coordinates, InvalidCoordinates};
pub use language::Language;
pub use persona::Persona;
pub use user_id::UserId;
