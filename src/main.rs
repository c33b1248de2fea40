use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};

use wikilearn_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let (host, port) = config.bind_address();
    let allowed_origins = config.cors_allowed_origins.clone();

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!("Starting WikiLearn server on http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = allowed_origins.iter().fold(
            Cors::default()
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600),
            |cors, origin| cors.allowed_origin(origin),
        );

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Condition::new(!allowed_origins.is_empty(), cors))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
