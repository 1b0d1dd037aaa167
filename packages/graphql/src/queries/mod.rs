use async_graphql::MergedObject;
mod auth;
mod categories;
mod contact;
mod gallery;
mod posts;
mod tags;

#[derive(MergedObject, Default)]
pub struct Queries(
    auth::AuthQueries,
    categories::CategoryQueries,
    posts::PostQueries,
    tags::TagQueries,
    gallery::GalleryQueries,
    contact::ContactQueries,
);
