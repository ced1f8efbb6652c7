use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::error::AppError;

/// Name of the cookie carrying the anti-forgery token.
pub const CSRF_COOKIE: &str = "_csrf";
/// Header the client must echo the token in on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Mints a fresh anti-forgery token value.
pub fn mint_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Double-submit CSRF protection.
///
/// Safe methods (GET, HEAD, OPTIONS, TRACE) pass through untouched; the
/// client obtains the token via `GET /csrf`, which sets the `_csrf` cookie
/// and returns the value in the body. Any other method must carry the
/// `X-CSRF-Token` header matching the `_csrf` cookie, or the request is
/// rejected with 403 before the handler runs.
pub struct CsrfProtection;

impl<S, B> Transform<S, ServiceRequest> for CsrfProtection
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CsrfProtectionService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CsrfProtectionService { service }))
    }
}

pub struct CsrfProtectionService<S> {
    service: S,
}

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

impl<S, B> Service<ServiceRequest> for CsrfProtectionService<S>
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
        if is_safe_method(req.method()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let cookie_token = req.cookie(CSRF_COOKIE).map(|c| c.value().to_string());
        let header_token = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match (cookie_token, header_token) {
            (Some(cookie), Some(header)) if !cookie.is_empty() && cookie == header => {
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            _ => {
                let app_err = AppError::Forbidden("invalid csrf token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
