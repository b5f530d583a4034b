use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::infra::db::sanitize_db_url;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::{routes, telemetry};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        db = %sanitize_db_url(&config.database_url),
        "starting catalogue backend"
    );

    // Connects and runs pending migrations.
    let app_state = match build_state()
        .with_db_url(config.database_url.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(NormalizePath::trim())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
