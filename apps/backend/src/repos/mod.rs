//! Repository functions for the domain layer, generic over `ConnectionTrait`.
//!
//! Each module owns a domain model, the serialized views handed to HTTP
//! clients, and thin wrappers over the matching `*_sea` adapter.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;
