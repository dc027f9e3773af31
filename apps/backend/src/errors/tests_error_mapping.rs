use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

fn assert_maps(domain: DomainError, code: ErrorCode, status: StatusCode) {
    let app: AppError = domain.clone().into();
    assert_eq!(app.code(), code, "code mismatch for {domain:?}");
    assert_eq!(app.status(), status, "status mismatch for {domain:?}");
}

#[test]
fn throw_rejections_map_to_conflict_or_unprocessable() {
    assert_maps(
        DomainError::validation(ValidationKind::GameFinished, "game 7 is finished"),
        ErrorCode::GameFinished,
        StatusCode::CONFLICT,
    );
    assert_maps(
        DomainError::validation(ValidationKind::NotPlayersTurn, "user 3 is not up"),
        ErrorCode::NotPlayersTurn,
        StatusCode::CONFLICT,
    );
    assert_maps(
        DomainError::validation(ValidationKind::InvalidThrow, "21x3 is not a dart"),
        ErrorCode::InvalidThrow,
        StatusCode::UNPROCESSABLE_ENTITY,
    );
}

#[test]
fn generic_validation_maps_to_unprocessable() {
    assert_maps(
        DomainError::validation_other("best_of_sets must be 1, 3 or 5"),
        ErrorCode::ValidationError,
        StatusCode::UNPROCESSABLE_ENTITY,
    );
}

#[test]
fn not_found_kinds_map_to_404_with_specific_codes() {
    assert_maps(
        DomainError::not_found(NotFoundKind::Game, "game 42 not found"),
        ErrorCode::GameNotFound,
        StatusCode::NOT_FOUND,
    );
    assert_maps(
        DomainError::not_found(NotFoundKind::User, "user 42 not found"),
        ErrorCode::UserNotFound,
        StatusCode::NOT_FOUND,
    );
    assert_maps(
        DomainError::not_found(NotFoundKind::Other("thing".into()), "thing not found"),
        ErrorCode::NotFound,
        StatusCode::NOT_FOUND,
    );
}

#[test]
fn conflicts_map_to_409() {
    assert_maps(
        DomainError::conflict(ConflictKind::DuplicateUsername, "name taken"),
        ErrorCode::DuplicateUsername,
        StatusCode::CONFLICT,
    );
    assert_maps(
        DomainError::conflict(ConflictKind::Other("other".into()), "conflict"),
        ErrorCode::Conflict,
        StatusCode::CONFLICT,
    );
}

#[test]
fn infra_kinds_map_to_operational_statuses() {
    assert_maps(
        DomainError::infra(InfraErrorKind::Timeout, "statement timed out"),
        ErrorCode::DbTimeout,
        StatusCode::GATEWAY_TIMEOUT,
    );
    assert_maps(
        DomainError::infra(InfraErrorKind::DbUnavailable, "connection refused"),
        ErrorCode::DbUnavailable,
        StatusCode::SERVICE_UNAVAILABLE,
    );
    assert_maps(
        DomainError::infra(InfraErrorKind::DataCorruption, "orphaned throw row"),
        ErrorCode::DbError,
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    assert_maps(
        DomainError::infra(InfraErrorKind::Other("boom".into()), "boom"),
        ErrorCode::Internal,
        StatusCode::INTERNAL_SERVER_ERROR,
    );
}
