use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
mod routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::movies::handlers::list_movies,
        features::movies::handlers::get_movie,
        features::movies::handlers::create_movie,
        features::movies::handlers::update_movie,
        features::movies::handlers::delete_movie,
        features::producers::handlers::get_prize_intervals,
        features::health::health,
    ),
    components(
        schemas(
            storage::dto::award_record::CreateAwardRecordRequest,
            storage::dto::award_record::UpdateAwardRecordRequest,
            storage::dto::award_record::AwardRecordResponse,
            storage::dto::prize_interval::ProducerInterval,
            storage::dto::prize_interval::PrizeIntervalReport,
            features::health::HealthResponse,
        )
    ),
    tags(
        (name = "movies", description = "Award record endpoints"),
        (name = "producers", description = "Producer win interval report"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Full application router: API routes, OpenAPI docs, CORS and request tracing
pub fn build_router(db: Database) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
