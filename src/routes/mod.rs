pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::AuthMiddleware;
use crate::config::Config;
use crate::error::AppError;

/// Binds method+path combinations to controller operations.
///
/// The public group (`/signup`, `/login`, `/logout`, `/csrf`) is open; the
/// `/tasks` group is wrapped with `AuthMiddleware` so only requests carrying
/// a validly signed, unexpired session token reach the task handlers.
pub fn config(cfg: &mut web::ServiceConfig, settings: &Config) {
    cfg.service(users::signup)
        .service(users::login)
        .service(users::logout)
        .service(users::csrf_token)
        .service(
            web::scope("/tasks")
                .wrap(AuthMiddleware::new(settings.jwt_secret.clone()))
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}

/// JSON extractor configuration: malformed bodies become a 400 with the
/// decode failure's message in the standard error body shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
