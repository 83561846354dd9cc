use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod password;
pub mod repo_types;
pub mod token;

mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::registro_routes())
}
