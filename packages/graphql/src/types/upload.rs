use async_graphql::SimpleObject;

/// A stored blob: where the public can reach it and the key it lives under.
#[derive(SimpleObject)]
pub struct UploadedImage {
    pub url: String,
    pub key: String,
}
