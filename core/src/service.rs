//! Transport-backed JustCMS operations.
//!
//! `JustCms` pairs a `JustCmsClient` with a `Transport` and runs
//! `build_* -> Transport::get -> parse_*` for each resource. Exactly one
//! request goes out per call. Nothing is retried or cached.

use tracing::{debug, warn};

use crate::client::JustCmsClient;
use crate::error::{JustCmsError, Result, TRANSPORT_FAILURE_STATUS};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Category, Layout, Menu, PageDetail, PagesQuery, PagesResponse};

#[derive(Debug, Clone)]
pub struct JustCms<T> {
    client: JustCmsClient,
    transport: T,
}

impl<T: Transport> JustCms<T> {
    pub fn new(client: JustCmsClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &JustCmsClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and hand the response to `parse`.
    ///
    /// A transport failure becomes `JustCmsError::Transport` with a
    /// server-error status; everything else is up to `parse`.
    pub fn execute<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&JustCmsClient, HttpResponse) -> Result<R>,
    ) -> Result<R> {
        debug!(url = %request.url, "sending JustCMS request");
        let response = self.transport.get(&request).map_err(|source| {
            warn!(url = %request.url, error = %source, "JustCMS transport failure");
            JustCmsError::Transport {
                status: TRANSPORT_FAILURE_STATUS,
                source,
            }
        })?;
        let status = response.status;
        let result = parse(&self.client, response);
        match &result {
            Ok(_) => debug!(url = %request.url, status, "JustCMS response decoded"),
            Err(err) => warn!(url = %request.url, status, error = %err, "JustCMS request failed"),
        }
        result
    }

    pub fn get_categories(&self) -> Result<Vec<Category>> {
        let request = self.client.build_get_categories()?;
        self.execute(request, JustCmsClient::parse_get_categories)
    }

    pub fn get_pages(&self, params: &PagesQuery) -> Result<PagesResponse> {
        let request = self.client.build_get_pages(params)?;
        self.execute(request, JustCmsClient::parse_get_pages)
    }

    pub fn get_page_by_slug(&self, slug: &str, version: Option<&str>) -> Result<PageDetail> {
        let request = self.client.build_get_page_by_slug(slug, version)?;
        self.execute(request, JustCmsClient::parse_get_page_by_slug)
    }

    pub fn get_menu_by_id(&self, id: &str) -> Result<Menu> {
        let request = self.client.build_get_menu_by_id(id)?;
        self.execute(request, JustCmsClient::parse_get_menu_by_id)
    }

    pub fn get_layout_by_id(&self, id: &str) -> Result<Layout> {
        let request = self.client.build_get_layout_by_id(id)?;
        self.execute(request, JustCmsClient::parse_get_layout_by_id)
    }

    pub fn get_layouts_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Layout>> {
        let request = self.client.build_get_layouts_by_ids(ids)?;
        self.execute(request, JustCmsClient::parse_get_layouts_by_ids)
    }
}
