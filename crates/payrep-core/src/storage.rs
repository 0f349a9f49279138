use std::path::Path;

/// Answers whether the file backing a parsed document is still available.
///
/// Uploaded reports can expire out of temporary storage between parsing and
/// aggregation; the aggregator asks this before using a document.
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> FileStore for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_local_store_sees_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();
        assert!(LocalFileStore.exists(file.path()));
    }

    #[test]
    fn test_local_store_rejects_missing_file_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LocalFileStore.exists(dir.path()));
        assert!(!LocalFileStore.exists(&dir.path().join("gone.pdf")));
    }

    #[test]
    fn test_closure_store() {
        let store = |p: &Path| p.ends_with("keep.pdf");
        assert!(store.exists(Path::new("/tmp/keep.pdf")));
        assert!(!store.exists(Path::new("/tmp/drop.pdf")));
    }
}
