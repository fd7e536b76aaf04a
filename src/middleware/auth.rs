//! Authentication middleware and admin guard
//!
//! The `Authentication` transform verifies the bearer session token and
//! stashes its claims on the request. The `AdminUser` extractor then
//! requires the admin role for the session subject; anything short of that
//! is sent back to the login view, matching the original route guard.

use std::fmt;

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::{StatusCode, header},
    web::Data,
};
use futures::future::LocalBoxFuture;
use tracing::debug;
use uuid::Uuid;

use crate::handlers::AppState;
use crate::services::auth::SessionClaims;

/// Path of the login view unauthenticated requests are sent to
pub const LOGIN_PATH: &str = "/login";

pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware { service })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = bearer_token(req.headers()) {
            if let Some(state) = req.app_data::<Data<AppState>>() {
                match state.auth.decode_session(&token) {
                    Ok(claims) => {
                        req.extensions_mut().insert(claims);
                    }
                    Err(err) => {
                        debug!(error = %err, "Rejecting invalid session token");
                    }
                }
            }
        }

        let res = self.service.call(req);

        Box::pin(async move { res.await })
    }
}

fn bearer_token(headers: &header::HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

/// Extractor that admits only authenticated administrators
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<SessionClaims>().cloned();
        let state = req.app_data::<Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("application state missing")
            })?;
            let claims = claims.ok_or(AuthRedirect)?;

            match state.auth.require_admin(&state.db.users, &claims).await {
                Ok(ctx) => Ok(AdminUser {
                    user_id: ctx.user_id,
                    email: ctx.email,
                }),
                Err(err) => {
                    debug!(user_id = %claims.sub, error = %err, "Admin gate refused session");
                    Err(AuthRedirect.into())
                }
            }
        })
    }
}

/// Rejection that redirects the client to the login view
#[derive(Debug)]
pub struct AuthRedirect;

impl fmt::Display for AuthRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unauthenticated request redirected to login")
    }
}

impl ResponseError for AuthRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LOGIN_PATH))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderMap, HeaderValue};

    #[test]
    fn extracts_bearer_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn ignores_non_bearer_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn auth_redirect_points_at_login() {
        let response = AuthRedirect.error_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some(LOGIN_PATH)
        );
    }
}
