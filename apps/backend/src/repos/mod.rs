//! Repository layer: domain models and the functions that load and store
//! them. Repos call adapters and surface `DomainError` instead of `DbErr`.

pub mod games;
pub mod throws;
pub mod users;
