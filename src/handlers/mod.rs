pub mod api_handler;
pub mod health_handler;
pub mod page_handler;

use actix_web::{http::StatusCode, web};

use crate::services::http_helpers::generation_failure;

pub use api_handler::{
    generate_exercise, generate_lesson, generate_summary, list_articles, wikipedia_subcategories,
};
pub use health_handler::{health_check, health_check_live};
pub use page_handler::{article, articles, index, lesson, subcategories, summary};

/// Registers every route. Malformed JSON bodies get the generation
/// endpoints' `{success: false, error}` shape.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected JSON body: {}", err);
        let response = generation_failure(StatusCode::BAD_REQUEST, &err);
        actix_web::error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(health_check)
        .service(health_check_live)
        .service(list_articles)
        .service(wikipedia_subcategories)
        .service(generate_summary)
        .service(generate_lesson)
        .service(generate_exercise)
        .service(index)
        .service(subcategories)
        .service(articles)
        .service(article)
        .service(summary)
        .service(lesson);
}
