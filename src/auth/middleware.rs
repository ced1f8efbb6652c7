use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;
use crate::auth::SESSION_COOKIE;
use crate::error::AppError;

/// Session verification middleware for the task route group.
///
/// Reads the session token from the `token` cookie, verifies signature and
/// expiry against the configured secret, and inserts the decoded [`Claims`]
/// into request extensions for the [`AuthenticatedUserId`] extractor.
/// Requests without a valid, unexpired token are rejected before any handler
/// runs.
///
/// [`Claims`]: crate::auth::Claims
/// [`AuthenticatedUserId`]: crate::auth::AuthenticatedUserId
pub struct AuthMiddleware {
    secret: String,
}

impl AuthMiddleware {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    secret: String,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        match token {
            Some(token) => match verify_token(&token, &self.secret) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = AppError::Unauthorized("missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::generate_token;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    const TEST_SECRET: &str = "middleware_test_secret";

    fn protected_app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new().service(
            web::scope("/tasks")
                .wrap(AuthMiddleware::new(TEST_SECRET))
                .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
    }

    #[actix_rt::test]
    async fn test_valid_cookie_passes() {
        let app = test::init_service(protected_app()).await;
        let token = generate_token(1, TEST_SECRET).unwrap();

        let req = test::TestRequest::get()
            .uri("/tasks")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_missing_cookie_is_unauthorized() {
        let app = test::init_service(protected_app()).await;

        let req = test::TestRequest::get().uri("/tasks").to_request();
        let resp = test::try_call_service(&app, req).await;
        let err = resp.expect_err("request should be rejected");
        assert_eq!(
            err.as_response_error().error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_rt::test]
    async fn test_token_signed_with_other_secret_is_unauthorized() {
        let app = test::init_service(protected_app()).await;
        let token = generate_token(1, "some_other_secret").unwrap();

        let req = test::TestRequest::get()
            .uri("/tasks")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        let err = resp.expect_err("request should be rejected");
        assert_eq!(
            err.as_response_error().error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
