use actix_web::web;

pub mod games;
pub mod health;
pub mod users;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// `main.rs` wires these under the same paths; tests register them through
/// this function so endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.route("/health", web::get().to(health::health));

    // User routes: /api/users/**
    cfg.service(web::scope("/api/users").configure(users::configure_routes));

    // Game routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
