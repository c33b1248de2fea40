use actix_web::{get, http::StatusCode, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::ContentKind,
        dto::{
            request::{ArticleListQuery, GenerateContentRequest},
            response::{ArticleListResponse, GenerationResponse, SubcategoriesResponse},
        },
    },
    services::http_helpers::{article_list_error, generation_failure},
};

#[get("/api/articles/{category}/{subcategory}")]
pub async fn list_articles(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    query: web::Query<ArticleListQuery>,
) -> HttpResponse {
    let (category, subcategory) = path.into_inner();

    match state
        .articles
        .search_articles(
            &category,
            &subcategory,
            query.images_only(),
            query.continuation_token(),
        )
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ArticleListResponse::from(page)),
        Err(err) => {
            log::error!(
                "[{}] Article search failed for {}/{}: {}",
                get_request_id(&req).unwrap_or_default(),
                category,
                subcategory,
                err
            );
            article_list_error(err)
        }
    }
}

#[get("/api/wikipedia/subcategories/{category}")]
pub async fn wikipedia_subcategories(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = category.into_inner();
    let subcategories = state.articles.list_subcategories(&category).await?;
    Ok(HttpResponse::Ok().json(SubcategoriesResponse {
        category,
        subcategories,
    }))
}

#[post("/api/generate-summary")]
pub async fn generate_summary(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateContentRequest>,
) -> HttpResponse {
    generate(&state, &req, request.into_inner(), ContentKind::Summary).await
}

#[post("/api/generate-lesson")]
pub async fn generate_lesson(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateContentRequest>,
) -> HttpResponse {
    generate(&state, &req, request.into_inner(), ContentKind::Lesson).await
}

#[post("/api/generate-exercise")]
pub async fn generate_exercise(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateContentRequest>,
) -> HttpResponse {
    let kind = ContentKind::Exercise(request.exercise_type());
    generate(&state, &req, request.into_inner(), kind).await
}

async fn generate(
    state: &AppState,
    req: &HttpRequest,
    request: GenerateContentRequest,
    kind: ContentKind,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return generation_failure(StatusCode::BAD_REQUEST, AppError::from(errors));
    }
    let Some(request) = request.into_generation_request(kind) else {
        return generation_failure(
            StatusCode::BAD_REQUEST,
            AppError::ValidationError("article_title must not be blank".to_string()),
        );
    };

    let article_body = match kind {
        ContentKind::Lesson => lesson_body(state, req, &request.article_title).await,
        _ => String::new(),
    };

    let result = state.content_service.generate(&request, &article_body).await;
    HttpResponse::Ok().json(GenerationResponse::success(kind, result))
}

/// Best effort: a lesson is still generated when the article can't be read.
async fn lesson_body(state: &AppState, req: &HttpRequest, title: &str) -> String {
    match state.articles.fetch_article(title).await {
        Ok(article) => prompts::truncate_body(&article.extract).to_string(),
        Err(err) => {
            log::warn!(
                "[{}] Lesson for '{}' will be generated without article text: {}",
                get_request_id(req).unwrap_or_default(),
                title,
                err
            );
            String::new()
        }
    }
}
