//! # Client Sessions
//!
//! Every API request is tied to a browser client through the
//! `booking_session` cookie. [`ensure_session`] issues the cookie on a
//! client's first request. Handlers receive the id through [`ClientId`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::domain::models::SessionId;
use crate::error::BookingError;

pub const SESSION_COOKIE: &str = "booking_session";

fn session_from_jar(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Middleware: attach the caller's session id, issuing a cookie when absent
pub async fn ensure_session(jar: CookieJar, mut request: Request, next: Next) -> Response {
    if let Some(session) = session_from_jar(&jar) {
        request.extensions_mut().insert(session);
        return next.run(request).await;
    }

    let session = SessionId::new();
    debug!("Issuing session cookie {}", session);
    request.extensions_mut().insert(session);
    let response = next.run(request).await;

    let cookie = Cookie::build((SESSION_COOKIE, session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), response).into_response()
}

/// The calling client's session id
#[derive(Debug, Clone, Copy)]
pub struct ClientId(pub SessionId);

#[async_trait]
impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = BookingError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<SessionId>() {
            return Ok(ClientId(*session));
        }
        session_from_jar(&CookieJar::from_headers(&parts.headers))
            .map(ClientId)
            .ok_or_else(|| BookingError::Internal("request has no client session".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::{client, read_text, session_cookie};
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn echo(ClientId(session): ClientId) -> String {
        session.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/whoami", get(echo))
            .layer(middleware::from_fn(ensure_session))
    }

    #[tokio::test]
    async fn test_first_request_gets_cookie() {
        let request = HttpRequest::builder().uri("/whoami").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
        assert!(set_cookie.starts_with("booking_session="));
        assert!(set_cookie.contains("HttpOnly"));

        let issued = read_text(response).await;
        assert!(set_cookie.contains(&issued));
    }

    #[tokio::test]
    async fn test_known_cookie_is_reused() {
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header(header::COOKIE, session_cookie(client()))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(read_text(response).await, client().to_string());
    }

    #[tokio::test]
    async fn test_garbage_cookie_is_replaced() {
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header(header::COOKIE, "booking_session=forged")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_some());
        assert_ne!(read_text(response).await, "forged");
    }

    #[tokio::test]
    async fn test_missing_session_without_middleware() {
        let app = Router::new().route("/whoami", get(echo));
        let request = HttpRequest::builder().uri("/whoami").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
