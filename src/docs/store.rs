//! Documentation store
//!
//! Parses a compiler-generated doc comment XML file once and serves O(1)
//! lookups by canonical identifier. The expected document shape is a `<doc>`
//! root containing an optional `<assembly>` header and a `<members>`
//! container whose `<member>` elements carry a `name` attribute holding the
//! identifier and arbitrary documentation markup as content.
//!
//! The store is immutable after construction. A missing identifier is an
//! expected outcome (most members carry no authored comment) and is reported
//! as `None`, never as an error.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};

use super::error::{DocsError, DocsResult};

/// A single doc comment entry keyed by its canonical identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocCommentEntry {
    /// The canonical identifier, e.g. "M:System.String.Insert(System.Int32,System.String)"
    pub identifier: String,
    /// The documentation markup, passed through verbatim
    pub fragment: String,
}

/// Immutable identifier-to-fragment mapping built from a sidecar XML document
#[derive(Debug, Clone, Default)]
pub struct DocCommentStore {
    entries: HashMap<String, DocCommentEntry>,
    assembly_name: Option<String>,
}

impl DocCommentStore {
    /// Parse a doc comment XML document into a store
    ///
    /// Consumes the entire document exactly once. Fails with
    /// `SchemaValidation` when the document is not well-formed XML or does
    /// not match the expected member-container shape.
    pub fn from_str(xml: &str) -> DocsResult<Self> {
        let mut reader = Reader::from_str(xml);

        let mut entries: HashMap<String, DocCommentEntry> = HashMap::new();
        let mut assembly_name = None;
        let mut saw_root = false;
        let mut saw_members = false;
        let mut in_members = false;
        // Elements opened in this loop and not yet closed; the reader
        // reports Eof without error while elements are still open, so a
        // truncated document has to be caught here.
        let mut open_elements = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) if !saw_root => {
                    expect_doc_root(&e)?;
                    saw_root = true;
                    open_elements += 1;
                }
                Event::Empty(e) if !saw_root => {
                    expect_doc_root(&e)?;
                    saw_root = true;
                }
                Event::Start(e) if in_members => {
                    if e.name().as_ref() != b"member" {
                        return Err(DocsError::schema(format!(
                            "unexpected <{}> element inside <members>",
                            String::from_utf8_lossy(e.name().as_ref())
                        )));
                    }
                    let identifier = member_name_attribute(&e)?;
                    let fragment = reader.read_text(e.name())?.trim().to_string();
                    // The first occurrence of an identifier wins
                    entries
                        .entry(identifier.clone())
                        .or_insert(DocCommentEntry {
                            identifier,
                            fragment,
                        });
                }
                Event::Empty(e) if in_members => {
                    if e.name().as_ref() != b"member" {
                        return Err(DocsError::schema(format!(
                            "unexpected <{}> element inside <members>",
                            String::from_utf8_lossy(e.name().as_ref())
                        )));
                    }
                    let identifier = member_name_attribute(&e)?;
                    entries
                        .entry(identifier.clone())
                        .or_insert(DocCommentEntry {
                            identifier,
                            fragment: String::new(),
                        });
                }
                Event::Start(e) => match e.name().as_ref() {
                    b"members" => {
                        saw_members = true;
                        in_members = true;
                        open_elements += 1;
                    }
                    b"assembly" => {
                        assembly_name = read_assembly_name(&mut reader)?;
                    }
                    // Unknown top-level elements are skipped verbatim
                    _ => {
                        reader.read_to_end(e.name())?;
                    }
                },
                Event::Empty(e) => {
                    if e.name().as_ref() == b"members" {
                        saw_members = true;
                    }
                }
                Event::End(e) => {
                    if e.name().as_ref() == b"members" {
                        in_members = false;
                    }
                    open_elements = open_elements.saturating_sub(1);
                }
                Event::Eof => {
                    if open_elements > 0 {
                        return Err(DocsError::schema("unexpected end of document"));
                    }
                    break;
                }
                _ => {}
            }
        }

        if !saw_root {
            return Err(DocsError::schema("document contains no root element"));
        }
        if !saw_members {
            return Err(DocsError::schema("document contains no <members> container"));
        }

        log::info!(
            "Parsed {} doc comment entries{}",
            entries.len(),
            assembly_name
                .as_deref()
                .map(|name| format!(" for assembly '{name}'"))
                .unwrap_or_default()
        );

        Ok(Self {
            entries,
            assembly_name,
        })
    }

    /// Look up the entry for a canonical identifier
    ///
    /// Returns `None` when the store holds no comment for the identifier.
    pub fn lookup(&self, identifier: &str) -> Option<&DocCommentEntry> {
        self.entries.get(identifier)
    }

    /// The assembly name declared in the document header, if present
    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate the root element of a doc comment document
fn expect_doc_root(element: &quick_xml::events::BytesStart<'_>) -> DocsResult<()> {
    if element.name().as_ref() != b"doc" {
        return Err(DocsError::schema(format!(
            "expected <doc> root element, found <{}>",
            String::from_utf8_lossy(element.name().as_ref())
        )));
    }
    Ok(())
}

/// Extract the required `name` attribute from a `<member>` element
fn member_name_attribute(
    element: &quick_xml::events::BytesStart<'_>,
) -> DocsResult<String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| DocsError::schema(format!("malformed attribute: {e}")))?;
        if attr.key.as_ref() == b"name" {
            return match std::str::from_utf8(&attr.value) {
                Ok(value) => Ok(value.to_string()),
                Err(_) => Err(DocsError::schema("member name attribute is not valid UTF-8")),
            };
        }
    }
    Err(DocsError::schema("member element is missing its name attribute"))
}

/// Read the `<name>` text inside an `<assembly>` header element
fn read_assembly_name(reader: &mut Reader<&[u8]>) -> DocsResult<Option<String>> {
    let mut name = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"name" {
                    name = Some(reader.read_text(e.name())?.trim().to_string());
                } else {
                    reader.read_to_end(e.name())?;
                }
            }
            Event::End(e) if e.name().as_ref() == b"assembly" => break,
            Event::Eof => {
                return Err(DocsError::schema("unterminated <assembly> element"));
            }
            _ => {}
        }
    }
    Ok(name)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
