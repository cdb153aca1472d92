//! In-memory imitation of the JustCMS public API.
//!
//! Serves a fixed project (`PROJECT_ID`) behind a fixed bearer token
//! (`TOKEN`). Errors answer with a plain-text body, as the real API does.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TOKEN: &str = "test-token";
pub const PROJECT_ID: &str = "demo";

pub struct Fixtures {
    pub categories: Vec<Value>,
    /// Published pages in listing order.
    pub pages: Vec<Value>,
    /// Draft revisions, keyed by slug.
    pub drafts: HashMap<String, Value>,
    pub menus: HashMap<String, Value>,
    pub layouts: HashMap<String, Value>,
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::demo())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/{project}", get(get_categories))
        .route("/{project}/pages", get(list_pages))
        .route("/{project}/pages/{slug}", get(get_page))
        .route("/{project}/menus/{id}", get(get_menu))
        .route("/{project}/layouts/{ids}", get(get_layouts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiResult = Result<Response, (StatusCode, &'static str)>;

fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn authorize(headers: &HeaderMap, project: &str) -> Result<(), (StatusCode, &'static str)> {
    let expected = format!("Bearer {TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized"));
    }
    if project != PROJECT_ID {
        return Err(not_found());
    }
    Ok(())
}

async fn get_categories(
    State(db): State<Db>,
    Path(project): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    authorize(&headers, &project)?;
    Ok(Json(json!({ "categories": db.categories })).into_response())
}

async fn list_pages(
    State(db): State<Db>,
    Path(project): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult {
    authorize(&headers, &project)?;
    let category = params.get("filter.category.slug");
    let start = parse_index(params.get("start"))?.unwrap_or(0);
    let offset = parse_index(params.get("offset"))?;

    let matching: Vec<Value> = db
        .pages
        .iter()
        .filter(|page| category.map_or(true, |slug| page_has_category(page, slug)))
        .map(summarize)
        .collect();
    let total = matching.len();
    let items: Vec<Value> = matching
        .into_iter()
        .skip(start)
        .take(offset.unwrap_or(usize::MAX))
        .collect();
    Ok(Json(json!({ "items": items, "total": total })).into_response())
}

async fn get_page(
    State(db): State<Db>,
    Path((project, slug)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult {
    authorize(&headers, &project)?;
    let draft = match params.get("v").map(String::as_str) {
        Some("draft") => db.drafts.get(&slug),
        _ => None,
    };
    let page = draft
        .or_else(|| db.pages.iter().find(|page| page["slug"] == slug.as_str()))
        .ok_or_else(not_found)?;
    Ok(Json(page.clone()).into_response())
}

async fn get_menu(
    State(db): State<Db>,
    Path((project, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult {
    authorize(&headers, &project)?;
    let menu = db.menus.get(&id).ok_or_else(not_found)?;
    Ok(Json(menu.clone()).into_response())
}

/// One id answers with an object, several `;`-separated ids with an array.
async fn get_layouts(
    State(db): State<Db>,
    Path((project, ids)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult {
    authorize(&headers, &project)?;
    if !ids.contains(';') {
        let layout = db.layouts.get(&ids).ok_or_else(not_found)?;
        return Ok(Json(layout.clone()).into_response());
    }
    let layouts = ids
        .split(';')
        .map(|id| db.layouts.get(id).cloned().ok_or_else(not_found))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(layouts).into_response())
}

fn parse_index(raw: Option<&String>) -> Result<Option<usize>, (StatusCode, &'static str)> {
    raw.map(|value| value.parse::<usize>())
        .transpose()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Bad Request"))
}

fn page_has_category(page: &Value, slug: &str) -> bool {
    page["categories"]
        .as_array()
        .is_some_and(|categories| categories.iter().any(|c| c["slug"] == slug))
}

/// Listing shape of a full page.
fn summarize(page: &Value) -> Value {
    let mut summary = page.clone();
    if let Some(fields) = summary.as_object_mut() {
        fields.remove("meta");
        fields.remove("content");
    }
    summary
}

fn page(slug: &str, title: &str, categories: &[(&str, &str)], content: Value) -> Value {
    let categories: Vec<Value> = categories
        .iter()
        .map(|(name, category_slug)| json!({ "name": name, "slug": category_slug }))
        .collect();
    json!({
        "title": title,
        "subtitle": format!("About {title}"),
        "meta": { "title": title, "description": format!("{title} page") },
        "coverImage": null,
        "slug": slug,
        "categories": categories,
        "content": content,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z",
    })
}

impl Fixtures {
    /// The demo project used by tests: three pages, one draft, one menu and
    /// two layouts.
    pub fn demo() -> Self {
        let content = json!([
            { "type": "header", "styles": ["Center"], "header": "Welcome", "subheader": null, "size": "h1" },
            { "type": "text", "styles": [], "text": "Hello from JustCMS." },
            {
                "type": "image",
                "styles": ["Wide"],
                "images": [{
                    "alt": "Hero",
                    "variants": [
                        { "url": "https://cdn.example/hero-400.png", "width": 400, "height": 200, "filename": "hero-400.png" },
                        { "url": "https://cdn.example/hero-1200.png", "width": 1200, "height": 600, "filename": "hero-1200.png" }
                    ]
                }]
            },
            { "type": "custom", "styles": [], "blockId": "newsletter", "listId": 7 }
        ]);
        let pages = vec![
            page("hello", "Hello", &[("News", "news")], content),
            page("release", "Release", &[("News", "news"), ("Blog", "blog")], json!([])),
            page("about", "About", &[], json!([])),
        ];

        let mut draft = pages[0].clone();
        draft["title"] = json!("Hello (draft)");

        let menu = json!({
            "id": "main",
            "name": "Main",
            "items": [{
                "title": "Home", "icon": "home", "url": "/", "styles": ["Highlighted"],
                "children": [{ "title": "About", "subtitle": "Who we are", "icon": "", "url": "/about", "styles": [], "children": [] }]
            }]
        });

        Self {
            categories: vec![
                json!({ "name": "News", "slug": "news" }),
                json!({ "name": "Blog", "slug": "blog" }),
            ],
            pages,
            drafts: HashMap::from([("hello".to_string(), draft)]),
            menus: HashMap::from([("main".to_string(), menu)]),
            layouts: HashMap::from([
                ("header".to_string(), json!({ "id": "header", "name": "Header", "items": [] })),
                ("footer".to_string(), json!({ "id": "footer", "name": "Footer", "items": [] })),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_drops_detail_fields() {
        let full = page("x", "X", &[], json!([]));
        let summary = summarize(&full);
        assert!(summary.get("content").is_none());
        assert!(summary.get("meta").is_none());
        assert_eq!(summary["slug"], "x");
    }

    #[test]
    fn page_category_lookup() {
        let full = page("x", "X", &[("News", "news")], json!([]));
        assert!(page_has_category(&full, "news"));
        assert!(!page_has_category(&full, "blog"));
    }

    #[test]
    fn parse_index_rejects_garbage() {
        assert_eq!(parse_index(None).unwrap(), None);
        assert_eq!(parse_index(Some(&"3".to_string())).unwrap(), Some(3));
        assert!(parse_index(Some(&"x".to_string())).is_err());
    }

    #[test]
    fn demo_fixtures_have_a_draft_for_hello() {
        let fixtures = Fixtures::demo();
        assert_eq!(fixtures.drafts["hello"]["title"], "Hello (draft)");
        assert_eq!(fixtures.pages.len(), 3);
    }
}
