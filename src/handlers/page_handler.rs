use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    constants::catalog,
    errors::AppResult,
    middleware::get_request_id,
    models::{
        domain::{Article, ContentKind},
        dto::request::LevelQuery,
    },
    services::http_helpers::html_page,
    views,
};

#[get("/")]
pub async fn index() -> HttpResponse {
    html_page(views::index_page(catalog::CATEGORIES))
}

#[get("/subcategories/{category}")]
pub async fn subcategories(category: web::Path<String>) -> HttpResponse {
    let names = catalog::subcategories_for(&category);
    html_page(views::subcategories_page(&category, &names))
}

#[get("/articles/{category}/{subcategory}")]
pub async fn articles(path: web::Path<(String, String)>) -> HttpResponse {
    let (category, subcategory) = path.into_inner();
    html_page(views::articles_page(&category, &subcategory))
}

#[get("/article/{title:.*}")]
pub async fn article(
    state: web::Data<AppState>,
    req: HttpRequest,
    title: web::Path<String>,
) -> HttpResponse {
    let result = fetch_for_page(&state, &req, &title).await;
    html_page(match &result {
        Ok(found) => views::article_page(Ok(found)),
        Err(message) => views::article_page(Err(message.as_str())),
    })
}

#[get("/summary/{title:.*}")]
pub async fn summary(
    state: web::Data<AppState>,
    req: HttpRequest,
    title: web::Path<String>,
    query: web::Query<LevelQuery>,
) -> HttpResponse {
    study_page(&state, &req, &title, ContentKind::Summary, &query).await
}

#[get("/lesson/{title:.*}")]
pub async fn lesson(
    state: web::Data<AppState>,
    req: HttpRequest,
    title: web::Path<String>,
    query: web::Query<LevelQuery>,
) -> HttpResponse {
    study_page(&state, &req, &title, ContentKind::Lesson, &query).await
}

async fn study_page(
    state: &AppState,
    req: &HttpRequest,
    title: &str,
    kind: ContentKind,
    query: &LevelQuery,
) -> HttpResponse {
    let level = query.english_level();
    let result = fetch_for_page(state, req, title).await;
    html_page(match &result {
        Ok(found) => views::study_page(kind, Ok(found), level),
        Err(message) => views::study_page(kind, Err(message.as_str()), level),
    })
}

/// Page routes render fetch failures inline, so the error becomes a message.
async fn fetch_for_page(state: &AppState, req: &HttpRequest, title: &str) -> Result<Article, String> {
    let result: AppResult<Article> = state.articles.fetch_article(title).await;
    result.map_err(|err| {
        log::warn!(
            "[{}] Could not load article '{}': {}",
            get_request_id(req).unwrap_or_default(),
            title,
            err
        );
        err.to_string()
    })
}
