use super::*;

const SAMPLE_XML: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Demo</name>
    </assembly>
    <members>
        <member name="T:N.C">
            <summary>A demonstration type.</summary>
            <remarks>See <see cref="M:N.C.Foo(System.Int32,System.String)"/>.</remarks>
        </member>
        <member name="M:N.C.Foo(System.Int32,System.String)"><summary>x</summary></member>
        <member name="F:N.C.Count"/>
    </members>
</doc>"#;

#[test]
fn test_lookup_returns_exact_fragment() {
    let store = DocCommentStore::from_str(SAMPLE_XML).unwrap();
    let entry = store
        .lookup("M:N.C.Foo(System.Int32,System.String)")
        .expect("entry should be present");
    assert_eq!(entry.identifier, "M:N.C.Foo(System.Int32,System.String)");
    assert_eq!(entry.fragment, "<summary>x</summary>");
}

#[test]
fn test_lookup_preserves_nested_markup() {
    let store = DocCommentStore::from_str(SAMPLE_XML).unwrap();
    let entry = store.lookup("T:N.C").unwrap();
    assert!(entry.fragment.starts_with("<summary>A demonstration type.</summary>"));
    assert!(entry.fragment.contains(r#"<see cref="M:N.C.Foo(System.Int32,System.String)"/>"#));
}

#[test]
fn test_lookup_missing_identifier_returns_none() {
    let store = DocCommentStore::from_str(SAMPLE_XML).unwrap();
    assert!(store.lookup("M:N.C.Bar").is_none());
    assert!(store.lookup("").is_none());
    // A near-miss is still a miss: matching is exact
    assert!(store.lookup("M:N.C.Foo(System.Int32)").is_none());
}

#[test]
fn test_self_closing_member_yields_empty_fragment() {
    let store = DocCommentStore::from_str(SAMPLE_XML).unwrap();
    let entry = store.lookup("F:N.C.Count").unwrap();
    assert_eq!(entry.fragment, "");
}

#[test]
fn test_assembly_name_and_entry_count() {
    let store = DocCommentStore::from_str(SAMPLE_XML).unwrap();
    assert_eq!(store.assembly_name(), Some("Demo"));
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn test_empty_members_container() {
    let store = DocCommentStore::from_str("<doc><members/></doc>").unwrap();
    assert!(store.is_empty());
    assert_eq!(store.assembly_name(), None);
    assert!(store.lookup("T:N.C").is_none());
}

#[test]
fn test_duplicate_identifier_keeps_first_entry() {
    let xml = r#"<doc><members>
        <member name="T:N.C"><summary>first</summary></member>
        <member name="T:N.C"><summary>second</summary></member>
    </members></doc>"#;
    let store = DocCommentStore::from_str(xml).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.lookup("T:N.C").unwrap().fragment, "<summary>first</summary>");
}

#[test]
fn test_malformed_xml_is_rejected() {
    let error = DocCommentStore::from_str("<doc><members><member name=").unwrap_err();
    assert!(matches!(error, DocsError::SchemaValidation { .. }), "got {error:?}");

    let unclosed = DocCommentStore::from_str("<doc><members><member name=\"T:N.C\">")
        .unwrap_err();
    assert!(matches!(unclosed, DocsError::SchemaValidation { .. }));
}

#[test]
fn test_truncated_document_is_rejected() {
    // Well-formed prefix cut off before the closing tags; the parser must
    // not treat this as a complete (empty) document.
    let error = DocCommentStore::from_str("<doc><members>").unwrap_err();
    match error {
        DocsError::SchemaValidation { message } => assert!(message.contains("end of document")),
        other => panic!("expected schema validation failure, got {other:?}"),
    }

    // A closed member followed by truncation must not yield a usable store
    let error = DocCommentStore::from_str(
        "<doc><members><member name=\"T:N.C\"><summary>x</summary></member>",
    )
    .unwrap_err();
    assert!(matches!(error, DocsError::SchemaValidation { .. }), "got {error:?}");

    // Missing </doc> only
    let error = DocCommentStore::from_str("<doc><members/>").unwrap_err();
    assert!(matches!(error, DocsError::SchemaValidation { .. }), "got {error:?}");
}

#[test]
fn test_unexpected_root_is_rejected() {
    let error = DocCommentStore::from_str("<html><members/></html>").unwrap_err();
    match error {
        DocsError::SchemaValidation { message } => assert!(message.contains("<html>")),
        other => panic!("expected schema validation failure, got {other:?}"),
    }
}

#[test]
fn test_missing_members_container_is_rejected() {
    let error = DocCommentStore::from_str("<doc><assembly><name>Demo</name></assembly></doc>")
        .unwrap_err();
    match error {
        DocsError::SchemaValidation { message } => assert!(message.contains("members")),
        other => panic!("expected schema validation failure, got {other:?}"),
    }

    assert!(matches!(
        DocCommentStore::from_str("").unwrap_err(),
        DocsError::SchemaValidation { .. }
    ));
}

#[test]
fn test_member_without_name_attribute_is_rejected() {
    let error = DocCommentStore::from_str("<doc><members><member/></members></doc>").unwrap_err();
    match error {
        DocsError::SchemaValidation { message } => assert!(message.contains("name attribute")),
        other => panic!("expected schema validation failure, got {other:?}"),
    }
}

#[test]
fn test_foreign_element_inside_members_is_rejected() {
    let error = DocCommentStore::from_str("<doc><members><entry name=\"T:N.C\"/></members></doc>")
        .unwrap_err();
    assert!(matches!(error, DocsError::SchemaValidation { .. }));
}

#[test]
fn test_unknown_top_level_elements_are_skipped() {
    let xml = r#"<doc>
        <generator>demo-compiler</generator>
        <members><member name="P:N.C.X"><summary>p</summary></member></members>
    </doc>"#;
    let store = DocCommentStore::from_str(xml).unwrap();
    assert_eq!(store.lookup("P:N.C.X").unwrap().fragment, "<summary>p</summary>");
}
