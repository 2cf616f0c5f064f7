//! REST backend for a car dealership.
//!
//! Cars, clients and sales orders are stored in SQLite and exposed through
//! list / create / remove / update HTTP endpoints. Handlers translate each
//! request into a repository call and answer with JSON, using only 200 and
//! 400 status codes.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;
