use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Shared by `main.rs` and the test app builder so
/// tests exercise the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root and health check: /, /health
    cfg.configure(health::configure_routes);

    // Game routes: /games/**
    cfg.service(web::scope("/games").configure(games::configure_routes));
}
