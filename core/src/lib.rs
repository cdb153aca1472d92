//! Typed client core for the JustCMS public API.
//!
//! # Overview
//! Resolves categories, pages, menus and layouts into typed values. Requests
//! are built and responses parsed without touching the network
//! (host-does-IO pattern); the HTTP round-trip is delegated to a `Transport`.
//!
//! # Design
//! - `JustCmsClient` is stateless apart from its immutable token, project id
//!   and base URL, and is safe to share across threads.
//! - Each resource operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response). `JustCms` glues the two around a
//!   `Transport` for callers who want a single call per resource.
//! - Every failure is one `JustCmsError`: configuration, API status,
//!   transport, or decoding.
//! - `helpers` holds pure lookups over decoded content.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod helpers;
pub mod http;
pub mod service;
pub mod types;

pub use client::JustCmsClient;
pub use config::{ConfigSource, EnvConfig, JustCmsOptions};
pub use endpoint::{Query, DEFAULT_BASE_URL};
pub use error::{ConfigError, JustCmsError, Result, TransportFailure};
pub use helpers::{first_image, has_category, has_style, large_image_variant};
pub use self::http::{HttpRequest, HttpResponse, Transport};
pub use service::JustCms;
pub use types::{
    Categorized, Category, CategoryFilter, CodeBlock, ContentBlock, CtaBlock, CustomBlock, EmbedBlock,
    HeaderBlock, Image, ImageBlock, ImageVariant, Layout, ListBlock, ListOption, Menu, MenuItem, PageDetail,
    PageFilters, PageMeta, PageSummary, PagesQuery, PagesResponse, Styled, TextBlock,
};
