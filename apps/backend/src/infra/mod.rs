//! Infrastructure concerns: database connectivity, error translation,
//! and application state construction.

pub mod db;
pub mod db_errors;
pub mod state;
