//! User repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

/// Find user by ID or return error if not found.
pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found")))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_name(conn, name).await?;
    Ok(user.map(User::from))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::create(conn, name).await?;
    Ok(User::from(user))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), DomainError> {
    let deleted = users_adapter::delete(conn, user_id).await?;
    if !deleted {
        return Err(DomainError::not_found(
            NotFoundKind::User,
            format!("User {user_id} not found"),
        ));
    }
    Ok(())
}
