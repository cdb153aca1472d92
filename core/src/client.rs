//! Stateless HTTP request builder and response parser for the JustCMS API.
//!
//! # Design
//! `JustCmsClient` holds only its immutable settings (token, project id, base
//! URL) and carries no state between calls, so one instance can serve any
//! number of concurrent requests. Each resource operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller, or `JustCms`, executes the actual
//! HTTP round-trip in between.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::{ConfigSource, EnvConfig, JustCmsOptions};
use crate::endpoint::{build_url, parse_base_url, Query};
use crate::error::{JustCmsError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CategoriesResponse, Category, Layout, Menu, PageDetail, PagesQuery, PagesResponse};

/// Synchronous, stateless client for the JustCMS public API.
#[derive(Clone)]
pub struct JustCmsClient {
    base_url: Url,
    token: String,
    project_id: String,
}

impl std::fmt::Debug for JustCmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JustCmsClient")
            .field("base_url", &self.base_url.as_str())
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl JustCmsClient {
    /// Client for the hosted API with an explicit token and project id.
    pub fn new(token: impl Into<String>, project_id: impl Into<String>) -> Result<Self> {
        Self::from_options(&JustCmsOptions::new(token, project_id), &HashMap::<String, String>::new())
    }

    /// Client from `options`, falling back to `source` for unset fields.
    pub fn from_options<C: ConfigSource + ?Sized>(options: &JustCmsOptions, source: &C) -> Result<Self> {
        let settings = options.resolve(source)?;
        Ok(Self {
            base_url: parse_base_url(&settings.base_url)?,
            token: settings.token,
            project_id: settings.project_id,
        })
    }

    /// Client configured entirely from `JUST_CMS_TOKEN` and `JUST_CMS_PROJECT`.
    pub fn from_env() -> Result<Self> {
        Self::from_options(&JustCmsOptions::default(), &EnvConfig)
    }

    /// Point the client at another host, e.g. a mock server or gateway.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Authenticated GET for the path `segments` (relative to the project)
    /// with `query`. Each segment is encoded on its own.
    pub fn build_request(&self, segments: &[&str], query: &Query) -> Result<HttpRequest> {
        Ok(HttpRequest {
            url: build_url(&self.base_url, &self.project_id, segments, query),
            headers: vec![("authorization".to_string(), format!("Bearer {}", self.token))],
        })
    }

    pub fn build_get_categories(&self) -> Result<HttpRequest> {
        self.build_request(&[], &Query::new())
    }

    pub fn build_get_pages(&self, params: &PagesQuery) -> Result<HttpRequest> {
        let mut query = Query::new();
        let slug = params
            .filters
            .as_ref()
            .map(|filters| filters.category.slug.as_str())
            .filter(|slug| !slug.is_empty());
        query
            .push_opt("filter.category.slug", slug)
            .push_opt("start", params.start)
            .push_opt("offset", params.offset);
        self.build_request(&["pages"], &query)
    }

    /// `version` selects a revision such as `"draft"`; `None` or empty asks
    /// for the published one.
    pub fn build_get_page_by_slug(&self, slug: &str, version: Option<&str>) -> Result<HttpRequest> {
        let mut query = Query::new();
        query.push_opt("v", version.filter(|v| !v.is_empty()));
        self.build_request(&["pages", slug], &query)
    }

    pub fn build_get_menu_by_id(&self, id: &str) -> Result<HttpRequest> {
        self.build_request(&["menus", id], &Query::new())
    }

    pub fn build_get_layout_by_id(&self, id: &str) -> Result<HttpRequest> {
        self.build_request(&["layouts", id], &Query::new())
    }

    /// Ids are joined with `;`. An empty slice yields an empty id segment,
    /// which the API rejects; callers should not send one.
    pub fn build_get_layouts_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<HttpRequest> {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        let joined = ids.join(";");
        self.build_request(&["layouts", joined.as_str()], &Query::new())
    }

    /// Check the status and decode the body as `T`.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(JustCmsError::Decoding)
    }

    pub fn parse_get_categories(&self, response: HttpResponse) -> Result<Vec<Category>> {
        self.parse::<CategoriesResponse>(response).map(|data| data.categories)
    }

    pub fn parse_get_pages(&self, response: HttpResponse) -> Result<PagesResponse> {
        self.parse(response)
    }

    pub fn parse_get_page_by_slug(&self, response: HttpResponse) -> Result<PageDetail> {
        self.parse(response)
    }

    pub fn parse_get_menu_by_id(&self, response: HttpResponse) -> Result<Menu> {
        self.parse(response)
    }

    pub fn parse_get_layout_by_id(&self, response: HttpResponse) -> Result<Layout> {
        self.parse(response)
    }

    /// A single id is answered with a bare object, several with an array;
    /// both come back as a list.
    pub fn parse_get_layouts_by_ids(&self, response: HttpResponse) -> Result<Vec<Layout>> {
        self.parse::<OneOrMany>(response).map(OneOrMany::into_vec)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Layout>),
    One(Layout),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<Layout> {
        match self {
            OneOrMany::Many(layouts) => layouts,
            OneOrMany::One(layout) => vec![layout],
        }
    }
}

/// Map a non-2xx status to `JustCmsError::Api`.
///
/// The message is the body when there is one, else the status's reason phrase.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    let message = if response.body.trim().is_empty() {
        http::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        response.body.clone()
    };
    Err(JustCmsError::Api {
        status: response.status,
        message,
    })
}
