use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::state::{GameSettings, GameState, Throw};
use crate::error::AppError;
use crate::services::games::GameService;
use crate::services::stats::StatsService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    /// Seating order; the first listed user throws first.
    user_ids: Vec<i64>,
    total_points: u16,
    best_of_sets: u8,
    #[serde(default)]
    double_out: bool,
}

#[derive(Debug, Serialize)]
struct ThrowResponse {
    r#throw: Throw,
    game: GameState,
}

async fn create_game(
    app_state: web::Data<AppState>,
    body: web::Json<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let settings = GameSettings {
        total_points: body.total_points,
        best_of_sets: body.best_of_sets,
        double_out: body.double_out,
    };
    let game = GameService::new()
        .create_game(&app_state, settings, body.user_ids)
        .await?;
    Ok(HttpResponse::Created().json(game))
}

async fn get_game(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let game = GameService::new()
        .get_game(&app_state, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(game))
}

#[derive(Debug, Deserialize)]
struct ThrowRequest {
    user_id: i64,
    points: i16,
    multiplier: i16,
}

async fn submit_throw(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ThrowRequest>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let (throw, game) = GameService::new()
        .submit_throw(&app_state, game_id, body.user_id, body.points, body.multiplier)
        .await?;
    Ok(HttpResponse::Ok().json(ThrowResponse { r#throw: throw, game }))
}

async fn game_statistics(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let stats = StatsService::new()
        .game_statistics(&app_state, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game));
    cfg.route("/{game_id}", web::get().to(get_game));
    cfg.route("/{game_id}/throws", web::post().to(submit_throw));
    cfg.route("/{game_id}/statistics", web::get().to(game_statistics));
}
