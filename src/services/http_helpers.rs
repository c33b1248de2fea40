use actix_web::{http::StatusCode, HttpResponse};

use crate::models::dto::response::{ArticleListErrorResponse, GenerationResponse};

/// `{error, articles: []}` with HTTP 500, the article feed's error contract.
pub fn article_list_error(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ArticleListErrorResponse::new(err.to_string()))
}

/// `{success: false, error}` for the generation endpoints.
pub fn generation_failure(status: StatusCode, err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(GenerationResponse::failure(err.to_string()))
}

pub fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
