use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::rankings::handlers::get_rankings,
        features::scores::handlers::submit_score,
        features::scores::handlers::remove_score,
        features::fees::handlers::quote_fee,
        features::registration::handlers::get_status,
        features::registration::handlers::mark_paid,
        features::registration::handlers::mark_unpaid,
        features::performances::handlers::create_performance,
        features::performances::handlers::list_performances,
        features::performances::handlers::get_performance,
        features::performances::handlers::patch_performance,
    ),
    components(
        schemas(
            storage::dto::common::PaginationMeta,
            storage::dto::fee::FeeQuoteRequest,
            storage::dto::fee::FeeBreakdown,
            storage::dto::performance::CreatePerformanceRequest,
            storage::dto::performance::UpdatePerformancePatch,
            storage::dto::ranking::RankingEntry,
            storage::dto::registration::MarkPaidRequest,
            storage::dto::score::SubmitScoreRequest,
            storage::models::Dancer,
            storage::models::MasteryLevel,
            storage::models::Performance,
            storage::models::PerformanceType,
            storage::models::RegistrationFeeRecord,
            storage::models::Score,
        )
    ),
    tags(
        (name = "rankings", description = "Ranked results with medal tiers"),
        (name = "scores", description = "Judge score submission and removal"),
        (name = "fees", description = "Entry fee quotation"),
        (name = "registration-fees", description = "Per-dancer registration-fee records"),
        (name = "performances", description = "Approved competition entries"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting competition scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.admin_api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/rankings", features::rankings::routes::routes())
        .nest("/api/scores", features::scores::routes::routes())
        .nest("/api/fees", features::fees::routes::routes())
        .nest(
            "/api/registration-fees",
            features::registration::routes::routes(api_keys),
        )
        .nest("/api/performances", features::performances::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
