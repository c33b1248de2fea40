//! Server-rendered pages. Dynamic content (article feeds, generated
//! material) is loaded by small inline scripts from the JSON API.

mod scripts;

pub use crate::markup::escape_html;

use crate::{
    constants::catalog::{self, Category},
    models::domain::{Article, ContentKind, EnglishLevel},
};

fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | WikiLearn</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; line-height: 1.5; }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }}
.card {{ border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }}
.card img {{ max-width: 100%; }}
.error {{ color: #a00; }}
.levels a.active {{ font-weight: bold; }}
</style>
</head>
<body>
<header><a href="/">WikiLearn</a></header>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
        body = body,
    )
}

pub fn index_page(categories: &[Category]) -> String {
    let cards: String = categories
        .iter()
        .map(|category| {
            format!(
                "\n<a class=\"card\" href=\"/subcategories/{}\" data-icon=\"{}\">{}</a>",
                path_segment(category.name),
                escape_html(category.icon),
                escape_html(category.name)
            )
        })
        .collect();

    layout(
        "Categories",
        &format!("<h1>Learn English with Wikipedia</h1>\n<div class=\"grid\">{}\n</div>", cards),
    )
}

pub fn subcategories_page(category: &str, subcategories: &[String]) -> String {
    let links: String = subcategories
        .iter()
        .map(|subcategory| {
            format!(
                "\n<a class=\"card\" href=\"/articles/{}/{}\">{}</a>",
                path_segment(category),
                path_segment(subcategory),
                escape_html(subcategory)
            )
        })
        .collect();

    let icon = catalog::find_category(category)
        .map(|known| format!(" data-icon=\"{}\"", escape_html(known.icon)))
        .unwrap_or_default();

    layout(
        category,
        &format!(
            "<h1{}>{}</h1>\n<div class=\"grid\">{}\n</div>",
            icon,
            escape_html(category),
            links
        ),
    )
}

pub fn articles_page(category: &str, subcategory: &str) -> String {
    let api_url = format!(
        "/api/articles/{}/{}",
        path_segment(category),
        path_segment(subcategory)
    );
    let body = format!(
        r#"<h1>{category} / {subcategory}</h1>
<label><input type="checkbox" id="images-only"> Only articles with images</label>
<div id="article-feed" class="grid" data-api="{api}"></div>
<p id="feed-status"></p>
<script>{script}</script>"#,
        category = escape_html(category),
        subcategory = escape_html(subcategory),
        api = escape_html(&api_url),
        script = scripts::ARTICLE_FEED,
    );

    layout(&format!("{} / {}", category, subcategory), &body)
}

pub fn article_page(article: Result<&Article, &str>) -> String {
    let article = match article {
        Ok(article) => article,
        Err(error) => return error_page("Article", error),
    };

    let level_links: String = catalog::english_levels()
        .into_iter()
        .map(|(value, label)| {
            format!(
                "\n<li>{label}: <a href=\"/summary/{title}?level={value}\">summary</a> | <a href=\"/lesson/{title}?level={value}\">lesson</a></li>",
                label = escape_html(label),
                title = path_segment(&article.title),
                value = value,
            )
        })
        .collect();

    let body = format!(
        "{header}\n<h2>Study this article</h2>\n<ul class=\"levels\">{levels}\n</ul>\n<article>{content}</article>",
        header = article_header(article),
        levels = level_links,
        content = render_article_body(&article.extract),
    );

    layout(&article.title, &body)
}

/// Summary and lesson pages: the article plus a container filled by the
/// generation API for the chosen level.
pub fn study_page(kind: ContentKind, article: Result<&Article, &str>, level: EnglishLevel) -> String {
    let heading = match kind {
        ContentKind::Lesson => "Lesson",
        _ => "Summary",
    };
    let article = match article {
        Ok(article) => article,
        Err(error) => return error_page(heading, error),
    };

    let level_links: String = EnglishLevel::ALL
        .iter()
        .map(|option| {
            format!(
                " <a href=\"?level={}\"{}>{}</a>",
                option.as_str(),
                if *option == level { " class=\"active\"" } else { "" },
                escape_html(option.label())
            )
        })
        .collect();

    let exercises = if kind == ContentKind::Lesson {
        "\n<div id=\"exercise-buttons\"><button data-exercise=\"grammar\">Grammar</button> <button data-exercise=\"vocabulary\">Vocabulary</button> <button data-exercise=\"extra\">Extra practice</button></div>\n<section id=\"exercise-content\"></section>"
    } else {
        ""
    };

    let body = format!(
        r#"{header}
<p class="levels">Level: {levels}</p>
<section id="generated-content" data-kind="{kind}" data-title="{title}" data-level="{level}"><p>Preparing your {kind} ({level_label})...</p></section>{exercises}
<details><summary>Original article</summary><article>{content}</article></details>
<script>{script}</script>"#,
        header = article_header(article),
        levels = level_links,
        kind = kind.response_key(),
        title = escape_html(&article.title),
        level = level.as_str(),
        level_label = escape_html(level.label()),
        exercises = exercises,
        content = render_article_body(&article.extract),
        script = scripts::STUDY_CONTENT,
    );

    layout(&format!("{}: {}", heading, article.title), &body)
}

fn article_header(article: &Article) -> String {
    let image = article
        .image
        .as_deref()
        .map(|src| format!("\n<img src=\"{}\" alt=\"{}\">", escape_html(src), escape_html(&article.title)))
        .unwrap_or_default();

    format!(
        "<h1>{title}</h1>{image}\n<p><a href=\"{url}\" rel=\"noopener\">Read on Wikipedia</a></p>",
        title = escape_html(&article.title),
        image = image,
        url = escape_html(&article.url),
    )
}

fn error_page(heading: &str, error: &str) -> String {
    layout(
        heading,
        &format!(
            "<h1>{}</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to categories</a></p>",
            escape_html(heading),
            escape_html(error)
        ),
    )
}

/// Plain-text extract to HTML: `== Heading ==` lines become headings,
/// blank-line separated blocks become paragraphs.
pub fn render_article_body(text: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let flush = |paragraph: &mut Vec<&str>, html: &mut String| {
        if !paragraph.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", escape_html(&paragraph.join(" "))));
            paragraph.clear();
        }
    };

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            flush(&mut paragraph, &mut html);
        } else if let Some((depth, heading)) = section_heading(line) {
            flush(&mut paragraph, &mut html);
            let level = (depth + 1).min(6);
            html.push_str(&format!("<h{0}>{1}</h{0}>\n", level, escape_html(heading)));
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut html);

    html
}

fn section_heading(line: &str) -> Option<(usize, &str)> {
    let depth = line.chars().take_while(|c| *c == '=').count();
    if depth < 2 || !line.ends_with(&"=".repeat(depth)) || line.len() <= depth * 2 {
        return None;
    }
    let heading = line[depth..line.len() - depth].trim();
    (!heading.is_empty()).then_some((depth, heading))
}
