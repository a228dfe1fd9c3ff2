//! Sidecar file locator
//!
//! Resolves the doc comment XML file that accompanies a compiled assembly by
//! probing an ordered list of candidate directories for `<assembly>.xml`.
//! The first existing candidate wins; later directories are never probed.

use std::path::PathBuf;

use super::error::{DocsError, DocsResult};

/// Resolve the doc comment file for an assembly
///
/// # Arguments
/// * `assembly_name` - Assembly name without extension (e.g. "Demo.Core")
/// * `directories` - Candidate directories, probed in order
///
/// Returns the path of the first `<assembly_name>.xml` that exists, or
/// `SidecarNotFound` carrying the assembly name when no candidate matched.
pub async fn resolve(assembly_name: &str, directories: &[PathBuf]) -> DocsResult<PathBuf> {
    let file_name = sidecar_file_name(assembly_name);

    for directory in directories {
        let candidate = directory.join(&file_name);
        if candidate.exists() {
            log::info!(
                "Resolved doc comments for assembly '{}' at {}",
                assembly_name,
                candidate.display()
            );
            return Ok(candidate);
        }
    }

    log::warn!(
        "No doc comment file for assembly '{}' in {} candidate director{}",
        assembly_name,
        directories.len(),
        if directories.len() == 1 { "y" } else { "ies" }
    );
    Err(DocsError::SidecarNotFound {
        assembly: assembly_name.to_string(),
    })
}

/// The sidecar file name for an assembly, relative to a search directory
///
/// Assembly names may contain dots, so the extension is appended rather
/// than substituted.
pub fn sidecar_file_name(assembly_name: &str) -> PathBuf {
    PathBuf::from(format!("{}.xml", assembly_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[tokio::test]
    async fn test_resolve_returns_first_hit_in_order() {
        let root = tempfile::tempdir().unwrap();
        let dir_a = root.path().join("a");
        let dir_b = root.path().join("b");
        let dir_c = root.path().join("c");
        for dir in [&dir_a, &dir_b, &dir_c] {
            fs::create_dir(dir).unwrap();
        }
        // Only b and c carry the file; a must miss and b must win over c
        fs::write(dir_b.join("Foo.xml"), "<doc><members/></doc>").unwrap();
        fs::write(dir_c.join("Foo.xml"), "<doc><members/></doc>").unwrap();

        let resolved = resolve("Foo", &[dir_a, dir_b.clone(), dir_c]).await.unwrap();
        assert_eq!(resolved, dir_b.join("Foo.xml"));
    }

    #[tokio::test]
    async fn test_resolve_not_found_carries_assembly_name() {
        let root = tempfile::tempdir().unwrap();
        let error = resolve("Missing", &[root.path().to_path_buf()])
            .await
            .unwrap_err();
        match error {
            DocsError::SidecarNotFound { assembly } => assert_eq!(assembly, "Missing"),
            other => panic!("expected SidecarNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_with_no_directories() {
        let error = resolve("Foo", &[]).await.unwrap_err();
        assert!(matches!(error, DocsError::SidecarNotFound { .. }));
    }

    #[test]
    fn test_sidecar_file_name() {
        assert_eq!(sidecar_file_name("Demo.Core"), Path::new("Demo.Core.xml"));
    }

    #[tokio::test]
    async fn test_resolve_probes_sidecar_file_name() {
        let root = tempfile::tempdir().unwrap();
        let expected = root.path().join(sidecar_file_name("Demo.Core"));
        fs::write(&expected, "<doc><members/></doc>").unwrap();

        let resolved = resolve("Demo.Core", &[root.path().to_path_buf()])
            .await
            .unwrap();
        assert_eq!(resolved, expected);
    }
}
