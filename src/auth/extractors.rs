use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The authenticated caller's id, extracted from the claims that
/// `AuthMiddleware` verified and stored in request extensions.
///
/// Handlers take this as a typed argument instead of digging the identity out
/// of an untyped context map, so a route that forgets the middleware fails
/// with 401 instead of a runtime cast.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUserId(pub i32);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUserId(claims.sub))),
            None => {
                let err = AppError::Unauthorized(
                    "no verified session on request; is AuthMiddleware active?".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
