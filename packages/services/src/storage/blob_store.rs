use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct StorageError {
    pub message: String,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// Where uploaded blobs end up. The store owns durability; callers only get
/// back a public URL.
#[mockall::automock]
pub trait BlobStore: Send + Sync {
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String, StorageError>;
}

/// Writes blobs under a local content root and serves them from a fixed
/// public prefix.
pub struct DiskStore {
    root: PathBuf,
    public_base_url: String,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        DiskStore {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let root = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let public_base_url =
            env::var("UPLOAD_PUBLIC_BASE_URL").unwrap_or_else(|_| "/uploads".to_string());
        DiskStore::new(root, public_base_url)
    }
}

impl BlobStore for DiskStore {
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String, StorageError> {
        let path = self.root.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError {
                message: format!("Failed to create upload directory: {}", e),
            })?;
        }

        fs::write(&path, bytes).map_err(|e| StorageError {
            message: format!("Failed to write blob: {}", e),
        })?;

        tracing::info!(key = %key, content_type = %content_type, size = bytes.len(), "blob stored");

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_store_writes_and_builds_url() {
        let dir = std::env::temp_dir().join(format!("blobstore-{}", uuid::Uuid::new_v4()));
        let store = DiskStore::new(&dir, "https://cdn.example.com/assets/");

        let url = store.put("blog-images/x.gif", b"GIF89a", "image/gif").unwrap();

        assert_eq!(url, "https://cdn.example.com/assets/blog-images/x.gif");
        assert_eq!(fs::read(dir.join("blog-images/x.gif")).unwrap(), b"GIF89a");

        fs::remove_dir_all(&dir).ok();
    }
}
