use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use curie_core::{
    config::{data_dir_from_env_value, resolve_data_dir},
    CoreConfig, PathwayService,
};

/// Default port when neither `CURIE_REST_ADDR` nor `PORT` is set.
const DEFAULT_PORT: &str = "8000";

/// Main entry point for the Curie CDS service
///
/// Starts the REST server with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `CURIE_REST_ADDR`: REST server address (default: "0.0.0.0:$PORT")
/// - `PORT`: port used when `CURIE_REST_ADDR` is unset (default: 8000)
/// - `CURIE_DATA_DIR`: reference data directory holding `guidelines.json` and `trials.json`
///   (default: `data/`)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curie_run=info".parse()?)
                .add_directive("curie_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CURIE_REST_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.into());
        format!("0.0.0.0:{port}")
    });

    let data_dir = resolve_data_dir(data_dir_from_env_value(
        std::env::var("CURIE_DATA_DIR").ok(),
    ))?;
    tracing::info!("++ Reference data directory: {}", data_dir.display());

    let cfg = CoreConfig::new(data_dir);
    let app = router(AppState::new(PathwayService::from_config(&cfg)));

    tracing::info!("++ Starting Curie REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
