use async_graphql::MergedObject;
mod auth;
mod categories;
mod contact;
mod gallery;
mod input_validators;
mod posts;
mod tags;
mod upload;

#[derive(MergedObject, Default)]
pub struct Mutations(
    posts::PostMutation,
    categories::CategoryMutation,
    tags::TagMutation,
    gallery::GalleryMutation,
    contact::ContactMutation,
    upload::UploadMutation,
    auth::AuthMutation,
);
