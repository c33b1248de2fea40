use std::collections::BTreeMap;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::Config,
    constants::catalog::DEFAULT_SUBCATEGORY,
    errors::{AppError, AppResult},
    models::domain::{Article, SearchPage},
};

pub const SEARCH_PAGE_SIZE: u32 = 10;
pub const SUBCATEGORY_LIMIT: usize = 20;
/// Offsets past this point widen the search with the word "related".
pub const RELATED_OFFSET_THRESHOLD: u64 = 100;

const CATEGORY_PREFIX: &str = "Category:";
const UNTITLED: &str = "Untitled";
const NO_DESCRIPTION: &str = "No description available";
const NO_CONTENT: &str = "No content available";

/// Read access to Wikipedia articles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn list_subcategories(&self, category: &str) -> AppResult<Vec<String>>;

    async fn search_articles(
        &self,
        category: &str,
        subcategory: &str,
        images_only: bool,
        continuation_token: Option<&str>,
    ) -> AppResult<SearchPage>;

    async fn fetch_article(&self, title: &str) -> AppResult<Article>;
}

pub struct WikipediaClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.wikipedia_user_agent.clone())
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::new(client, config.wikipedia_api_endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn query(&self, params: &[(&str, String)]) -> AppResult<QueryResponse> {
        log::debug!("Wikipedia query: {:?}", params);

        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<QueryResponse>().await?)
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn list_subcategories(&self, category: &str) -> AppResult<Vec<String>> {
        let params = [
            ("action", "query".to_string()),
            ("list", "categorymembers".to_string()),
            ("cmtitle", format!("{}{}", CATEGORY_PREFIX, category)),
            ("cmtype", "subcat".to_string()),
            ("cmlimit", SUBCATEGORY_LIMIT.to_string()),
            ("format", "json".to_string()),
        ];

        let response = self.query(&params).await?;
        let Some(members) = response.query.and_then(|q| q.categorymembers) else {
            log::warn!("No categorymembers in Wikipedia response for '{}'", category);
            return Ok(Vec::new());
        };

        Ok(members
            .into_iter()
            .take(SUBCATEGORY_LIMIT)
            .map(|member| strip_category_prefix(&member.title).to_string())
            .collect())
    }

    async fn search_articles(
        &self,
        category: &str,
        subcategory: &str,
        images_only: bool,
        continuation_token: Option<&str>,
    ) -> AppResult<SearchPage> {
        let continuation_token = continuation_token
            .map(str::trim)
            .filter(|token| !token.is_empty());
        let params = search_params(category, subcategory, continuation_token);

        let response = self.query(&params).await?;
        let page = search_page_from_response(response, images_only);

        log::info!(
            "Wikipedia search '{} / {}' returned {} articles (continue: {:?})",
            category,
            subcategory,
            page.articles.len(),
            page.continuation_token
        );

        Ok(page)
    }

    async fn fetch_article(&self, title: &str) -> AppResult<Article> {
        let params = [
            ("action", "query".to_string()),
            ("titles", title.to_string()),
            ("prop", "extracts|pageimages|info".to_string()),
            ("explaintext", "1".to_string()),
            ("exsectionformat", "wiki".to_string()),
            ("piprop", "original".to_string()),
            ("inprop", "url".to_string()),
            ("format", "json".to_string()),
        ];

        let response = self.query(&params).await?;
        article_from_response(response)
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", title)))
    }
}

/// Search term for a category/subcategory pair; deep pages add "related".
pub fn build_search_term(category: &str, subcategory: &str, continuation_token: Option<&str>) -> String {
    let mut term = if subcategory == DEFAULT_SUBCATEGORY {
        category.to_string()
    } else {
        format!("{} {}", category, subcategory)
    };

    if continuation_token
        .and_then(token_offset)
        .is_some_and(|offset| offset > RELATED_OFFSET_THRESHOLD)
    {
        term.push_str(" related");
    }

    term
}

fn token_offset(token: &str) -> Option<u64> {
    token.trim().parse().ok()
}

fn search_params(
    category: &str,
    subcategory: &str,
    continuation_token: Option<&str>,
) -> Vec<(&'static str, String)> {
    // First page is shuffled; later pages stay relevance-ordered so scrolling is stable.
    let sort = if continuation_token.is_some() { "relevance" } else { "random" };

    let mut params = vec![
        ("action", "query".to_string()),
        ("generator", "search".to_string()),
        ("gsrsearch", build_search_term(category, subcategory, continuation_token)),
        ("gsrlimit", SEARCH_PAGE_SIZE.to_string()),
        ("gsrsort", sort.to_string()),
        ("gsrinfo", "totalhits".to_string()),
        ("prop", "extracts|pageimages|info".to_string()),
        ("exintro", "1".to_string()),
        ("explaintext", "1".to_string()),
        ("piprop", "original|thumbnail".to_string()),
        ("inprop", "url".to_string()),
        ("format", "json".to_string()),
    ];

    if let Some(token) = continuation_token {
        params.push(("gsroffset", token.to_string()));
    }

    params
}

/// Text up to the first '.', terminated by exactly one period.
pub fn first_sentence(extract: &str) -> String {
    let sentence = extract.split('.').next().unwrap_or_default();
    format!("{}.", sentence)
}

fn strip_category_prefix(title: &str) -> &str {
    title.strip_prefix(CATEGORY_PREFIX).unwrap_or(title)
}

fn search_page_from_response(response: QueryResponse, images_only: bool) -> SearchPage {
    let continuation_token = response
        .continuation
        .as_ref()
        .and_then(|c| c.get("gsroffset"))
        .and_then(value_to_token);

    let mut pages: Vec<(String, RawPage)> = response
        .query
        .and_then(|q| q.pages)
        .map(|pages| pages.into_iter().collect())
        .unwrap_or_default();
    // `pages` is keyed by page id in response order; the search rank lives in
    // `index`. The sort is stable, so unranked pages keep their order.
    pages.sort_by_key(|(_, page)| page.index.unwrap_or(u64::MAX));

    let articles = pages
        .into_iter()
        .filter_map(|(id, page)| {
            let image = page.image_source();
            if images_only && image.is_none() {
                return None;
            }
            Some(Article {
                id,
                title: page.title.unwrap_or_else(|| UNTITLED.to_string()),
                extract: first_sentence(page.extract.as_deref().unwrap_or(NO_DESCRIPTION)),
                image,
                url: page.fullurl.unwrap_or_default(),
            })
        })
        .collect();

    SearchPage {
        articles,
        continuation_token,
    }
}

fn article_from_response(response: QueryResponse) -> Option<Article> {
    let (id, page) = response
        .query
        .and_then(|q| q.pages)?
        .into_iter()
        .find(|(_, page)| page.exists())?;

    Some(Article {
        id,
        title: page.title.unwrap_or_else(|| UNTITLED.to_string()),
        extract: page.extract.unwrap_or_else(|| NO_CONTENT.to_string()),
        image: page.original.and_then(|image| image.source),
        url: page.fullurl.unwrap_or_default(),
    })
}

fn value_to_token(value: &Value) -> Option<String> {
    match value {
        Value::String(token) if !token.is_empty() => Some(token.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
    #[serde(rename = "continue", default)]
    continuation: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Option<IndexMap<String, RawPage>>,
    #[serde(default)]
    categorymembers: Option<Vec<CategoryMember>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    title: Option<String>,
    extract: Option<String>,
    original: Option<ImageRef>,
    thumbnail: Option<ImageRef>,
    fullurl: Option<String>,
    index: Option<u64>,
    missing: Option<Value>,
    invalid: Option<Value>,
}

impl RawPage {
    fn exists(&self) -> bool {
        self.missing.is_none() && self.invalid.is_none()
    }

    /// Original resolution first, thumbnail otherwise.
    fn image_source(&self) -> Option<String> {
        [&self.original, &self.thumbnail]
            .into_iter()
            .flatten()
            .filter_map(|image| image.source.clone())
            .find(|source| !source.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ImageRef {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryMember {
    title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> QueryResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_search_term_omits_general() {
        assert_eq!(build_search_term("Science", "General", None), "Science");
        assert_eq!(build_search_term("Science", "Physics", None), "Science Physics");
    }

    #[test]
    fn test_search_term_adds_related_past_offset_100() {
        assert_eq!(build_search_term("Science", "Physics", Some("100")), "Science Physics");
        assert_eq!(
            build_search_term("Science", "Physics", Some("150")),
            "Science Physics related"
        );
        assert_eq!(build_search_term("Science", "General", Some("101")), "Science related");
        assert_eq!(build_search_term("Science", "Physics", Some("abc")), "Science Physics");
    }

    #[test]
    fn test_search_params_sort_order() {
        let first = search_params("Arts", "Dance", None);
        assert!(first.contains(&("gsrsort", "random".to_string())));
        assert!(!first.iter().any(|(key, _)| *key == "gsroffset"));

        let next = search_params("Arts", "Dance", Some("20"));
        assert!(next.contains(&("gsrsort", "relevance".to_string())));
        assert!(next.contains(&("gsroffset", "20".to_string())));
        assert!(next.contains(&("gsrlimit", "10".to_string())));
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Physics is a science. It studies matter."), "Physics is a science.");
        assert_eq!(first_sentence("No period here"), "No period here.");
        assert_eq!(first_sentence(""), ".");
        assert_eq!(first_sentence("Ends with period."), "Ends with period.");
    }

    #[test]
    fn test_strip_category_prefix() {
        assert_eq!(strip_category_prefix("Category:Optics"), "Optics");
        assert_eq!(strip_category_prefix("Optics"), "Optics");
    }

    #[test]
    fn test_search_page_prefers_original_then_thumbnail() {
        let response = parse(json!({
            "continue": {"gsroffset": 10, "continue": "gsroffset||"},
            "query": {"pages": {
                "1": {"title": "A", "index": 2, "extract": "Alpha. More.", "fullurl": "https://w/A",
                      "original": {"source": "https://img/a-orig.png"},
                      "thumbnail": {"source": "https://img/a-thumb.png"}},
                "2": {"title": "B", "index": 1, "extract": "Beta",
                      "thumbnail": {"source": "https://img/b-thumb.png"}},
                "3": {"title": "C", "index": 3}
            }}
        }));

        let page = search_page_from_response(response, false);
        assert_eq!(page.continuation_token.as_deref(), Some("10"));
        let titles: Vec<_> = page.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
        assert_eq!(page.articles[0].image.as_deref(), Some("https://img/b-thumb.png"));
        assert_eq!(page.articles[1].image.as_deref(), Some("https://img/a-orig.png"));
        assert_eq!(page.articles[1].extract, "Alpha.");
        assert_eq!(page.articles[2].image, None);
        assert_eq!(page.articles[2].extract, "No description available.");
        assert_eq!(page.articles[2].url, "");
    }

    #[test]
    fn test_unranked_pages_keep_response_order() {
        // Raw text: a `json!` value would already have its keys sorted.
        let response: QueryResponse = serde_json::from_str(
            r#"{"query": {"pages": {
                "99": {"title": "First"},
                "102": {"title": "Second"},
                "5": {"title": "Ranked", "index": 1},
                "1000": {"title": "Third"}
            }}}"#,
        )
        .unwrap();

        let page = search_page_from_response(response, false);
        let titles: Vec<_> = page.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Ranked", "First", "Second", "Third"]);
        assert_eq!(page.articles[1].id, "99");
    }

    #[test]
    fn test_search_page_images_only_filters_after_fetch() {
        let response = parse(json!({
            "query": {"pages": {
                "1": {"title": "A", "index": 1, "original": {"source": "https://img/a.png"}},
                "2": {"title": "B", "index": 2}
            }}
        }));

        let page = search_page_from_response(response, true);
        assert_eq!(page.articles.len(), 1);
        assert!(page.articles.iter().all(|a| a.image.is_some()));
        assert_eq!(page.continuation_token, None);
    }

    #[test]
    fn test_search_page_without_query_is_empty() {
        let page = search_page_from_response(parse(json!({"batchcomplete": ""})), false);
        assert!(page.articles.is_empty());
        assert!(page.continuation_token.is_none());
    }

    #[test]
    fn test_article_from_response() {
        let response = parse(json!({
            "query": {"pages": {
                "736": {"pageid": 736, "title": "Albert Einstein",
                        "extract": "Albert Einstein was a physicist.\n\n== Life ==\nBorn in Ulm.",
                        "fullurl": "https://en.wikipedia.org/wiki/Albert_Einstein",
                        "original": {"source": "https://img/einstein.jpg"}}
            }}
        }));

        let article = article_from_response(response).unwrap();
        assert_eq!(article.id, "736");
        assert!(article.extract.contains("== Life =="));
        assert_eq!(article.image.as_deref(), Some("https://img/einstein.jpg"));
    }

    #[test]
    fn test_missing_page_is_not_an_article() {
        let response = parse(json!({
            "query": {"pages": {"-1": {"ns": 0, "title": "NonexistentXYZ123", "missing": ""}}}
        }));
        assert!(article_from_response(response).is_none());

        let invalid = parse(json!({
            "query": {"pages": {"-1": {"title": "<>", "invalid": "", "invalidreason": "bad"}}}
        }));
        assert!(article_from_response(invalid).is_none());

        assert!(article_from_response(parse(json!({}))).is_none());
    }
}
