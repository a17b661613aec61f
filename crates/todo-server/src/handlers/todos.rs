use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use todo_core::{add_todo, delete_todo, set_todo_complete, validate_todo_name};

use super::{list_path, parse_index, resolve_list, resolve_todo, see_other};
use crate::dto::{CompleteForm, FlashView, ListView, TodoForm};
use crate::flash::{self, Flash};
use crate::session::CurrentSession;
use crate::state::AppState;

/// `POST /lists/{list}/todos`
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<TodoForm>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &path) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };
    let name = form.todo.trim();

    if let Err(error) = validate_todo_name(name) {
        log::info!(
            "[{}] Rejected todo '{}' ({})",
            session.token(),
            name,
            error.code()
        );
        return session
            .response(StatusCode::UNPROCESSABLE_ENTITY)
            .json(
                ListView::new(index, &session.data.lists[index], Some(error.into()))
                    .with_rejected_input(name),
            );
    }

    add_todo(&mut session.data.lists[index], name);
    session.data.flash = Some(Flash::success(flash::TODO_ADDED));
    session.store(&state).await;
    log::info!("[{}] Added todo '{}' to list {}", session.token(), name, index);

    see_other(&session, &list_path(index))
}

/// `POST /lists/{list}/todos/{todo}/delete`
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (list_id, todo_id) = path.into_inner();
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &list_id) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };

    let deleted = parse_index(&todo_id)
        .map(|todo| delete_todo(&mut session.data.lists[index], todo))
        .unwrap_or(false);

    if !deleted {
        log::warn!(
            "[{}] Could not delete todo '{}' from list {}",
            session.token(),
            todo_id,
            index
        );
        return session.response(StatusCode::NOT_FOUND).json(FlashView {
            flash: Flash::error(flash::TODO_DELETE_FAILED),
        });
    }

    session.data.flash = Some(Flash::success(flash::TODO_DELETED));
    session.store(&state).await;
    log::info!("[{}] Deleted todo {} from list {}", session.token(), todo_id, index);

    see_other(&session, &list_path(index))
}

/// `POST /lists/{list}/todos/{todo}` sets one todo complete or incomplete
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    form: web::Form<CompleteForm>,
) -> HttpResponse {
    let (list_id, todo_id) = path.into_inner();
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &list_id) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };
    let todo_index = match resolve_todo(&session.data.lists[index], &todo_id) {
        Ok(todo_index) => todo_index,
        Err(error) => return session.reject(error),
    };

    let complete = form.is_complete();
    if let Some(todo) = session.data.lists[index].todo_mut(todo_index) {
        set_todo_complete(todo, complete);
    }
    session.data.flash = Some(Flash::todo_toggled(complete));
    session.store(&state).await;
    log::debug!(
        "[{}] Todo {} in list {} complete={}",
        session.token(),
        todo_index,
        index,
        complete
    );

    see_other(&session, &list_path(index))
}
