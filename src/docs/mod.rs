//! Doc comment resolution
//!
//! This module resolves and serves doc comments that a compiler extracted
//! into a companion XML file at build time. Callers describe a type or
//! member with a `MemberDescriptor`, the identifier codec renders the
//! canonical lookup key, and the `DocCommentStore` answers point lookups
//! against the parsed file.
//!
//! The pieces compose as: locator resolves `<assembly>.xml` across the
//! configured directories, `DocCommentReader` parses it once into a store,
//! and `comments_for` turns descriptors into fragments.

pub mod error;
pub mod identifier;
pub mod locator;
pub mod member;
pub mod reader;
pub mod settings;
pub mod signature;
pub mod store;

pub use error::{DocsError, DocsResult};
pub use identifier::member_identifier;
pub use member::{MemberDescriptor, MemberKind};
pub use reader::DocCommentReader;
pub use settings::DocsSettings;
pub use signature::{GenericScope, TypeSignature};
pub use store::{DocCommentEntry, DocCommentStore};
