use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use taskdeck::auth::CsrfProtection;
use taskdeck::config::Config;
use taskdeck::repository::{TaskRepository, UserRepository};
use taskdeck::routes;
use taskdeck::usecase::{TaskUsecase, UserUsecase};

/// Composition root: constructs each component in dependency order — store,
/// repositories, use-cases — and hands the wired set to the server's app
/// factory. Everything is immutable after construction and shared read-only
/// across workers.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if config.jwt_secret.is_empty() {
        log::warn!("SECRET is not set; session tokens will be signed with an empty key");
    }

    let pool = sqlx::PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        log::warn!("migration failed; continuing: {}", e);
    }

    let user_repository = UserRepository::new(pool.clone());
    let task_repository = TaskRepository::new(pool);
    let user_usecase = UserUsecase::new(user_repository, config.jwt_secret.clone());
    let task_usecase = TaskUsecase::new(task_repository);

    let (host, port) = config.server_addr();
    log::info!("starting taskdeck server at http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.frontend_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
            .allowed_header("X-CSRF-Token")
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(user_usecase.clone()))
            .app_data(web::Data::new(task_usecase.clone()))
            .app_data(routes::json_config())
            .wrap(Logger::default())
            .wrap(CsrfProtection)
            .wrap(cors)
            .service(routes::health::health)
            .configure(|cfg| routes::config(cfg, &config))
    })
    .bind((host, port))?
    .run()
    .await
}
