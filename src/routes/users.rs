use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use crate::auth::csrf::{mint_token, CSRF_COOKIE};
use crate::auth::SESSION_COOKIE;
use crate::config::Config;
use crate::error::AppError;
use crate::models::Credentials;
use crate::usecase::UserUsecase;

/// Builds the session cookie: http-only, secure, cross-site-capable, scoped
/// to the configured API domain. The 24-hour max-age is independent of the
/// token's own 12-hour expiry; the token is what actually bounds the session.
fn session_cookie(config: &Config, value: String, max_age: Duration) -> Cookie<'static> {
    let mut builder = Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::None)
        .max_age(max_age);
    if !config.cookie_domain.is_empty() {
        builder = builder.domain(config.cookie_domain.clone());
    }
    builder.finish()
}

fn csrf_cookie(config: &Config, value: String) -> Cookie<'static> {
    let mut builder = Cookie::build(CSRF_COOKIE, value)
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::None)
        .max_age(Duration::hours(24));
    if !config.cookie_domain.is_empty() {
        builder = builder.domain(config.cookie_domain.clone());
    }
    builder.finish()
}

/// Creates a new user account.
///
/// ## Responses:
/// - `201 Created`: `{id, email}` of the new user.
/// - `400 Bad Request`: malformed body, or the email is already registered.
/// - `422 Unprocessable Entity`: a field violates validation policy.
/// - `500 Internal Server Error`: store or hashing faults.
#[post("/signup")]
pub async fn signup(
    usecase: web::Data<UserUsecase>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let user = usecase.sign_up(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Authenticates a user and issues the session cookie.
///
/// The minted token embeds the stored user's id and a 12-hour expiry; the
/// cookie carrying it lives for 24 hours.
///
/// ## Responses:
/// - `200 OK`: empty body, `Set-Cookie: token=...`.
/// - `401 Unauthorized`: unknown email or wrong password (not distinguished).
/// - `422 Unprocessable Entity`: a field violates validation policy.
#[post("/login")]
pub async fn login(
    usecase: web::Data<UserUsecase>,
    config: web::Data<Config>,
    body: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    let token = usecase.login(body.into_inner()).await?;
    let cookie = session_cookie(&config, token, Duration::hours(24));
    Ok(HttpResponse::Ok().cookie(cookie).finish())
}

/// Clears the client's copy of the session cookie by issuing an
/// immediately-expiring replacement. The token itself stays valid until its
/// own expiry; nothing is revoked server-side.
#[post("/logout")]
pub async fn logout(config: web::Data<Config>) -> impl Responder {
    let cookie = session_cookie(&config, String::new(), Duration::ZERO);
    HttpResponse::Ok().cookie(cookie).finish()
}

/// Issues the double-submit CSRF token: sets the `_csrf` cookie and returns
/// the same value in the body for the client to echo in `X-CSRF-Token`.
/// Reuses an existing cookie value so repeated calls stay consistent.
#[get("/csrf")]
pub async fn csrf_token(req: HttpRequest, config: web::Data<Config>) -> impl Responder {
    let token = req
        .cookie(CSRF_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_else(mint_token);
    let cookie = csrf_cookie(&config, token.clone());
    HttpResponse::Ok().cookie(cookie).json(json!({
        "csrf_token": token
    }))
}
