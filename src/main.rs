mod setup;

use actix_cors::Cors;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_graphql::{
    http::{playground_source, GraphQLPlaygroundConfig},
    EmptySubscription, Schema,
};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;
use graphql::utilities::requires_auth::CurrentUser;
use graphql::utilities::MarkdownCache;
use sea_orm::DatabaseConnection;
use services::session::{resolve_user, SessionToken, SESSION_COOKIE};
use services::storage::{BlobStore, DiskStore};
use setup::set_up_db;
use std::sync::Arc;

type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(
    schema: web::Data<SchemaType>,
    db: web::Data<DatabaseConnection>,
    http_req: HttpRequest,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    // An unreadable or stale session cookie means an anonymous caller, never
    // a failed request.
    let mut current = CurrentUser(None);
    if let Some(cookie) = http_req.cookie(SESSION_COOKIE) {
        let token = SessionToken::new(cookie.value().to_string());
        match resolve_user(db.get_ref(), &token).await {
            Ok(user) => current = CurrentUser(Some(user)),
            Err(e) => tracing::debug!("session not resolved: {}", e),
        }
    }
    request = request.data(current);

    schema.execute(request).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db = match set_up_db().await {
        Ok(db) => db,
        Err(err) => panic!("{}", err),
    };

    let store: Arc<dyn BlobStore> = Arc::new(DiskStore::from_env());

    // Build the Schema
    let schema = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(db.clone())
    .data(MarkdownCache::new())
    .data(store)
    .finish();

    let bind = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    tracing::info!(%bind, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(db.clone()))
            .route("/graphql", web::get().to(graphql_playground))
            .route("/graphql", web::post().to(graphql_request))
    })
    .bind(bind)?
    .run()
    .await
}
