//! SeaORM adapters, one module per aggregate. Every function is generic
//! over `ConnectionTrait` so it runs equally against a connection or an
//! open transaction, and returns `DbErr`; the repos layer maps to
//! `DomainError` via `From<DbErr>`.

pub mod games_sea;
pub mod players_sea;
pub mod throws_sea;
pub mod users_sea;
