pub mod mutation;
pub mod query;
pub mod types;

use crate::config::AuthConfig;
use crate::store::{EmployeeStore, UserStore};
use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use std::sync::Arc;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub const GRAPHQL_PATH: &str = "/graphql";

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Per-process state reachable from every resolver.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub employees: Arc<dyn EmployeeStore>,
    pub auth: AuthConfig,
}

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(graphql_handler))
            .route(web::get().to(graphiql)),
    );
}
