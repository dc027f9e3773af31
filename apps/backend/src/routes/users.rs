use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repos::users::User;
use crate::services::users::UserService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateUserRequest {
    name: String,
}

#[derive(Debug, Serialize)]
struct UserResponse {
    id: i64,
    name: String,
    created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let created_at = user
            .created_at
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());
        Self {
            id: user.id,
            name: user.name,
            created_at,
        }
    }
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = UserService::new()
        .create_user(&app_state, &body.name)
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = UserService::new().list_users(&app_state).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

async fn get_user(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = UserService::new()
        .get_user(&app_state, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn delete_user(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    UserService::new()
        .delete_user(&app_state, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn user_stats(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let stats = UserService::new()
        .career_stats(&app_state, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_user));
    cfg.route("", web::get().to(list_users));
    cfg.route("/{user_id}", web::get().to(get_user));
    cfg.route("/{user_id}", web::delete().to(delete_user));
    cfg.route("/{user_id}/stats", web::get().to(user_stats));
}
