//! The in-memory BOM object model.
//!
//! Callers construct [`Component`]s (optionally via the file-hashing
//! [`Component::for_file`] factory), attach hashes, vulnerabilities and
//! external references, then add them to a [`Bom`]. The Bom enforces set
//! semantics over purl identity and exposes lookup and validation; external
//! encoders read the tree through its public fields and accessors, decoders
//! rebuild it through the constructors.

mod bom;
mod component;
mod license;
mod metadata;
mod vulnerability;

pub use bom::*;
pub use component::*;
pub use license::*;
pub use metadata::*;
pub use vulnerability::*;
