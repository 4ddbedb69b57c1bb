use actix_web::{web, App, HttpServer};
use bowling_backend::config::server::ServerConfig;
use bowling_backend::infra::state::build_state;
use bowling_backend::middleware::cors::cors_middleware;
use bowling_backend::middleware::request_trace::RequestTrace;
use bowling_backend::middleware::structured_logger::StructuredLogger;
use bowling_backend::middleware::trace_span::TraceSpan;
use bowling_backend::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker-compose env_file, or `set -a; . ./.env; set +a` locally).
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🎳 Starting Bowling Backend on http://{}:{}",
        config.host, config.port
    );

    let app_state = match build_state().build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
