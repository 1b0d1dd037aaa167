pub mod blob_store;
pub mod upload;

pub use blob_store::{BlobStore, DiskStore, StorageError};
pub use upload::{store_image, UploadError, UploadedImage};
