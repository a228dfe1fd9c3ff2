//! XML Doc Comment Reader Library
//!
//! This library resolves doc comments that were extracted into a companion
//! XML file at build time, keyed by the canonical identifier derived from a
//! type or member's structural signature.

pub mod docs;
pub mod logging;
