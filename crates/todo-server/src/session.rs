//! Per-browser session handling
//!
//! A browser is identified by a random token in a cookie. Each request loads
//! a copy of that browser's state, changes it, and stores it back before the
//! response goes out.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, ResponseError};
use serde::{Deserialize, Serialize};
use todo_core::TodoList;
use uuid::Uuid;

use crate::error::AppError;
use crate::flash::Flash;
use crate::state::AppState;

/// Everything one browser owns
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    #[serde(default)]
    pub lists: Vec<TodoList>,

    /// Success message waiting for the next rendered view
    #[serde(default)]
    pub flash: Option<Flash>,
}

impl SessionState {
    /// Remove and return the pending flash, so it is shown only once
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}

/// The session bound to the request being handled
pub struct CurrentSession {
    token: String,
    is_new: bool,
    cookie_name: String,
    pub data: SessionState,
}

impl CurrentSession {
    /// Resolve the request's session.
    ///
    /// Only tokens this server issued and still holds are reused. A missing
    /// or unknown token gets a fresh id and empty state; nothing is stored
    /// until a handler changes that state.
    pub async fn load(app: &AppState, req: &HttpRequest) -> Self {
        let cookie_name = app.config.cookie_name.clone();
        let presented = req
            .cookie(&cookie_name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());

        if let Some(token) = presented {
            if let Some(data) = app.load_session(&token).await {
                return Self {
                    token,
                    is_new: false,
                    cookie_name,
                    data,
                };
            }
            log::debug!("[{}] Ignoring unknown session token", token);
        }

        let token = Uuid::new_v4().to_string();
        log::debug!("[{}] Issuing new session token", token);
        Self {
            token,
            is_new: true,
            cookie_name,
            data: SessionState::default(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the browser still needs to be sent the cookie
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Write the (possibly modified) state back to the store
    pub async fn store(&self, app: &AppState) {
        app.store_session(&self.token, self.data.clone()).await;
    }

    /// Take the pending flash for display, storing the session only when
    /// there was one to take
    pub async fn take_flash(&mut self, app: &AppState) -> Option<Flash> {
        let flash = self.data.take_flash();
        if flash.is_some() {
            self.store(app).await;
        }
        flash
    }

    /// Error response that still hands a new browser its cookie
    pub fn reject(&self, error: AppError) -> HttpResponse {
        let mut resp = error.error_response();
        if self.is_new {
            if let Err(err) = resp.add_cookie(&self.cookie()) {
                log::warn!("[{}] Failed to attach session cookie: {}", self.token, err);
            }
        }
        resp
    }

    /// Response builder that carries the session cookie when it is new
    pub fn response(&self, status: StatusCode) -> HttpResponseBuilder {
        let mut builder = HttpResponse::build(status);
        if self.is_new {
            builder.cookie(self.cookie());
        }
        builder
    }

    fn cookie(&self) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), self.token.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_request_without_cookie_gets_new_token() {
        let app = AppState::default();
        let req = TestRequest::default().to_http_request();

        let session = CurrentSession::load(&app, &req).await;
        assert!(session.is_new());
        assert!(Uuid::parse_str(session.token()).is_ok());

        let resp = session.response(StatusCode::OK).finish();
        let cookie = resp
            .cookies()
            .find(|c| c.name() == "todo_session")
            .expect("session cookie");
        assert_eq!(cookie.value(), session.token());
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn test_known_cookie_reuses_stored_state() {
        let app = AppState::default();
        let mut stored = SessionState::default();
        stored.lists.push(TodoList::new("Groceries"));
        app.store_session("known", stored).await;

        let req = TestRequest::default()
            .cookie(Cookie::new("todo_session", "known"))
            .to_http_request();
        let session = CurrentSession::load(&app, &req).await;

        assert!(!session.is_new());
        assert_eq!(session.data.lists.len(), 1);
        let resp = session.response(StatusCode::OK).finish();
        assert_eq!(resp.cookies().count(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_cookie_is_replaced_not_adopted() {
        let app = AppState::default();
        let req = TestRequest::default()
            .cookie(Cookie::new("todo_session", "made-up"))
            .to_http_request();

        let session = CurrentSession::load(&app, &req).await;
        assert!(session.is_new());
        assert_ne!(session.token(), "made-up");
        assert_eq!(app.session_count().await, 0);
    }

    #[actix_web::test]
    async fn test_take_flash_stores_only_when_present() {
        let app = AppState::default();
        let req = TestRequest::default().to_http_request();
        let mut session = CurrentSession::load(&app, &req).await;

        assert!(session.take_flash(&app).await.is_none());
        assert_eq!(app.session_count().await, 0);

        session.data.flash = Some(Flash::success("done"));
        assert!(session.take_flash(&app).await.is_some());
        assert_eq!(app.session_count().await, 1);
    }

    #[actix_web::test]
    async fn test_reject_carries_cookie_for_new_session() {
        let app = AppState::default();
        let req = TestRequest::default().to_http_request();
        let session = CurrentSession::load(&app, &req).await;

        let resp = session.reject(AppError::ListNotFound("0".to_string()));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.cookies().count(), 1);
    }

    #[test]
    fn test_take_flash_clears_it() {
        let mut state = SessionState {
            flash: Some(Flash::success("done")),
            ..Default::default()
        };
        assert!(state.take_flash().is_some());
        assert!(state.take_flash().is_none());
    }
}
