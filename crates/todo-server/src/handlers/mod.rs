pub mod lists;
pub mod todos;

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use todo_core::{get_list, TodoList};

use crate::error::{AppError, Result};
use crate::session::CurrentSession;

/// `GET /` and any unknown route
pub async fn to_lists() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/lists"))
        .finish()
}

/// Redirect after a successful mutation, sending the cookie if needed
fn see_other(session: &CurrentSession, location: &str) -> HttpResponse {
    session
        .response(StatusCode::SEE_OTHER)
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Parse a positional id from the path. Non-numeric ids address nothing.
fn parse_index(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

/// Resolve `{list}` to an index that exists in this session
fn resolve_list(lists: &[TodoList], raw: &str) -> Result<usize> {
    parse_index(raw)
        .filter(|index| get_list(lists, *index).is_some())
        .ok_or_else(|| AppError::ListNotFound(raw.to_string()))
}

fn resolve_todo(list: &TodoList, raw: &str) -> Result<usize> {
    parse_index(raw)
        .filter(|index| list.todo(*index).is_some())
        .ok_or_else(|| AppError::TodoNotFound(raw.to_string()))
}

fn list_path(index: usize) -> String {
    format!("/lists/{}", index)
}
