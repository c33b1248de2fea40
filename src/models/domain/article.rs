use serde::{Deserialize, Serialize};

/// A Wikipedia page reduced to what the reader views need.
///
/// Search results carry the first sentence of the intro in `extract`; a fully
/// fetched article carries the whole plain-text body there instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub extract: String,
    pub image: Option<String>,
    pub url: String,
}

impl Article {
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|src| !src.is_empty())
    }
}

/// One page of search results plus the opaque offset for the next page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub articles: Vec<Article>,
    pub continuation_token: Option<String>,
}
