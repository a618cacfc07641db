//! Local image store for larder.
//!
//! Selected photos are copied into an application-owned directory under a
//! freshly generated UUID filename; the stored recipe references the local
//! copy, never the original external path. Removal is best-effort: failures
//! are logged and swallowed, leaving at worst an orphaned file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Extension used when the source file has none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Application-owned image storage directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Create an image store rooted at the given directory.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(Self { dir })
    }

    /// Get the store's root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy the selected image's bytes into the store.
    ///
    /// The copy is named with a freshly generated UUID, keeping the source's
    /// extension. Returns the path of the owned copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the copy fails.
    pub fn ingest(&self, source: impl AsRef<Path>) -> Result<PathBuf> {
        let source = source.as_ref();
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(DEFAULT_EXTENSION);
        let dest = self.dir.join(format!("{}.{ext}", Uuid::new_v4()));

        std::fs::copy(source, &dest).map_err(|io| Error::ImageCopy {
            path: source.to_path_buf(),
            source: io,
        })?;

        debug!("Copied image {} to {}", source.display(), dest.display());
        Ok(dest)
    }

    /// Delete an owned image file, best-effort.
    ///
    /// A missing file is a no-op. I/O failures are logged and swallowed; the
    /// worst outcome is an orphaned file on local storage.
    pub fn remove_best_effort(path: &str) {
        let path = Path::new(path);
        if !path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to delete image {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(tag: &str) -> (ImageStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("larder_images_{}_{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let store = ImageStore::new(&dir).unwrap();
        (store, dir)
    }

    #[test]
    fn test_new_creates_dir() {
        let (store, dir) = test_store("new");
        assert!(dir.exists());
        assert_eq!(store.dir(), dir);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ingest_copies_bytes() {
        let (store, dir) = test_store("ingest");
        let source = dir.join("source.jpg");
        std::fs::write(&source, b"fake image bytes").unwrap();

        let owned = store.ingest(&source).unwrap();
        assert!(owned.exists());
        assert_ne!(owned, source);
        assert_eq!(owned.extension().unwrap(), "jpg");
        assert_eq!(std::fs::read(&owned).unwrap(), b"fake image bytes");
        // The original is untouched
        assert!(source.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ingest_generates_unique_names() {
        let (store, dir) = test_store("unique");
        let source = dir.join("source.png");
        std::fs::write(&source, b"png bytes").unwrap();

        let first = store.ingest(&source).unwrap();
        let second = store.ingest(&source).unwrap();
        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
        assert_eq!(first.extension().unwrap(), "png");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ingest_default_extension() {
        let (store, dir) = test_store("noext");
        let source = dir.join("source");
        std::fs::write(&source, b"bytes").unwrap();

        let owned = store.ingest(&source).unwrap();
        assert_eq!(owned.extension().unwrap(), "jpg");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ingest_missing_source() {
        let (store, dir) = test_store("missing");
        let result = store.ingest(dir.join("does_not_exist.jpg"));
        assert!(matches!(result, Err(Error::ImageCopy { .. })));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_best_effort_deletes_file() {
        let (store, dir) = test_store("remove");
        let source = dir.join("source.jpg");
        std::fs::write(&source, b"bytes").unwrap();
        let owned = store.ingest(&source).unwrap();

        ImageStore::remove_best_effort(&owned.to_string_lossy());
        assert!(!owned.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_best_effort_missing_file_is_noop() {
        // Must not panic or error
        ImageStore::remove_best_effort("/nonexistent/larder/image.jpg");
    }
}
