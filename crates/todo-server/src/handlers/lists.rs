use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use todo_core::{create_list, delete_list, validate_list_name, validate_list_rename};

use super::{list_path, parse_index, resolve_list, see_other};
use crate::dto::{FlashView, FormView, ListNameForm, ListView, ListsView};
use crate::flash::{self, Flash};
use crate::session::CurrentSession;
use crate::state::AppState;

/// `GET /lists`
pub async fn index(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let flash = session.take_flash(&state).await;

    session
        .response(StatusCode::OK)
        .json(ListsView::new(&session.data.lists, flash))
}

/// `GET /lists/new`
pub async fn new_form(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let flash = session.take_flash(&state).await;

    session
        .response(StatusCode::OK)
        .json(FormView::new_list("", flash))
}

/// `POST /lists`
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ListNameForm>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let name = form.list_name.trim();

    if let Err(error) = validate_list_name(&session.data.lists, name) {
        log::info!(
            "[{}] Rejected list name '{}' ({})",
            session.token(),
            name,
            error.code()
        );
        return session
            .response(StatusCode::UNPROCESSABLE_ENTITY)
            .json(FormView::new_list(name, Some(error.into())));
    }

    create_list(&mut session.data.lists, name);
    session.data.flash = Some(Flash::success(flash::LIST_CREATED));
    session.store(&state).await;
    log::info!("[{}] Created list '{}'", session.token(), name);

    see_other(&session, "/lists")
}

/// `GET /lists/{list}`
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &path) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };
    let flash = session.take_flash(&state).await;

    session
        .response(StatusCode::OK)
        .json(ListView::new(index, &session.data.lists[index], flash))
}

/// `GET /lists/{list}/edit`
pub async fn edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &path) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };
    let flash = session.take_flash(&state).await;

    session
        .response(StatusCode::OK)
        .json(FormView::edit_list(index, &session.data.lists[index], flash))
}

/// `POST /lists/{list}` renames the list
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<ListNameForm>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &path) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };
    let name = form.list_name.trim();

    if let Err(error) = validate_list_rename(&session.data.lists, index, name) {
        log::info!(
            "[{}] Rejected rename of list {} to '{}' ({})",
            session.token(),
            index,
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

    session.data.lists[index].rename(name);
    session.data.flash = Some(Flash::success(flash::LIST_RENAMED));
    session.store(&state).await;
    log::info!("[{}] Renamed list {} to '{}'", session.token(), index, name);

    see_other(&session, &list_path(index))
}

/// `POST /lists/{list}/delete`
pub async fn delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let deleted = parse_index(&path)
        .map(|index| delete_list(&mut session.data.lists, index))
        .unwrap_or(false);

    if !deleted {
        log::warn!("[{}] Could not delete list '{}'", session.token(), path.as_str());
        return session.response(StatusCode::NOT_FOUND).json(FlashView {
            flash: Flash::error(flash::LIST_DELETE_FAILED),
        });
    }

    session.data.flash = Some(Flash::success(flash::LIST_DELETED));
    session.store(&state).await;
    log::info!("[{}] Deleted list {}", session.token(), path.as_str());

    see_other(&session, "/lists")
}

/// `POST /lists/{list}/complete_all`
pub async fn complete_all(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let mut session = CurrentSession::load(&state, &req).await;
    let index = match resolve_list(&session.data.lists, &path) {
        Ok(index) => index,
        Err(error) => return session.reject(error),
    };

    session.data.lists[index].complete_all();
    session.data.flash = Some(Flash::success(flash::TODOS_COMPLETED));
    session.store(&state).await;
    log::info!("[{}] Completed all todos in list {}", session.token(), index);

    see_other(&session, &list_path(index))
}
