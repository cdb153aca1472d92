//! Content model returned by the JustCMS public API.
//!
//! # Design
//! Field names follow the API's camelCase wire format. Required fields are
//! not defaulted: a body missing one fails to decode instead of yielding a
//! half-filled value. Nullable fields are `Option`.
//!
//! `ContentBlock` is internally tagged on `type`. The `custom` arm is the only
//! open-ended one; its extra keys land in a JSON map while every other arm
//! keeps a fixed schema, so matches over blocks stay exhaustive.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

/// Envelope of the project root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// One rendition of an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageVariant {
    pub url: String,
    pub width: f64,
    pub height: f64,
    pub filename: String,
}

/// An image with its renditions, smallest first by convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub alt: String,
    pub variants: Vec<ImageVariant>,
}

/// Listing shape of a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub title: String,
    pub subtitle: String,
    pub cover_image: Option<Image>,
    pub slug: String,
    pub categories: Vec<Category>,
    pub created_at: String,
    pub updated_at: String,
}

/// A window of pages. `total` counts every match, not just `items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagesResponse {
    pub items: Vec<PageSummary>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// A full page, including its content blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageDetail {
    pub title: String,
    pub subtitle: String,
    pub meta: PageMeta,
    pub cover_image: Option<Image>,
    pub slug: String,
    pub categories: Vec<Category>,
    pub content: Vec<ContentBlock>,
    pub created_at: String,
    pub updated_at: String,
}

/// A page content block, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Header(HeaderBlock),
    List(ListBlock),
    Embed(EmbedBlock),
    Image(ImageBlock),
    Code(CodeBlock),
    Text(TextBlock),
    Cta(CtaBlock),
    Custom(CustomBlock),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderBlock {
    pub styles: Vec<String>,
    pub header: String,
    pub subheader: Option<String>,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListBlock {
    pub styles: Vec<String>,
    pub options: Vec<ListOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListOption {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedBlock {
    pub styles: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageBlock {
    pub styles: Vec<String>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
    pub styles: Vec<String>,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBlock {
    pub styles: Vec<String>,
    pub text: String,
}

/// Call to action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CtaBlock {
    pub styles: Vec<String>,
    pub text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A block defined by the project rather than by JustCMS.
///
/// Only `styles` and `blockId` are fixed; everything else the API sends is
/// kept verbatim in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomBlock {
    pub styles: Vec<String>,
    pub block_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CustomBlock {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A menu entry. Children nest arbitrarily deep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub icon: String,
    pub url: String,
    pub styles: Vec<String>,
    pub children: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// A layout. Its fields are project-defined, so it is kept as a JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Layout(pub Map<String, Value>);

impl Layout {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The layout's `id`, when the API sent one as a string.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Request-side filter for `pages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageFilters {
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryFilter {
    pub slug: String,
}

impl PageFilters {
    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: CategoryFilter { slug: slug.into() },
        }
    }
}

/// Parameters of a `pages` listing. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagesQuery {
    pub filters: Option<PageFilters>,
    pub start: Option<u32>,
    pub offset: Option<u32>,
}

/// Anything carrying presentation `styles`.
pub trait Styled {
    fn styles(&self) -> &[String];
}

macro_rules! impl_styled {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Styled for $ty {
                fn styles(&self) -> &[String] {
                    &self.styles
                }
            }
        )*
    };
}

impl_styled!(
    HeaderBlock,
    ListBlock,
    EmbedBlock,
    ImageBlock,
    CodeBlock,
    TextBlock,
    CtaBlock,
    CustomBlock,
    MenuItem,
);

impl Styled for ContentBlock {
    fn styles(&self) -> &[String] {
        match self {
            ContentBlock::Header(block) => block.styles(),
            ContentBlock::List(block) => block.styles(),
            ContentBlock::Embed(block) => block.styles(),
            ContentBlock::Image(block) => block.styles(),
            ContentBlock::Code(block) => block.styles(),
            ContentBlock::Text(block) => block.styles(),
            ContentBlock::Cta(block) => block.styles(),
            ContentBlock::Custom(block) => block.styles(),
        }
    }
}

/// Anything tagged with categories.
pub trait Categorized {
    fn categories(&self) -> &[Category];
}

impl Categorized for PageSummary {
    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Categorized for PageDetail {
    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_summary_reads_camel_case_and_null_cover() {
        let json = r#"{
            "title": "Hello",
            "subtitle": "World",
            "coverImage": null,
            "slug": "hello",
            "categories": [{"name": "News", "slug": "news"}],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let page: PageSummary = serde_json::from_str(json).unwrap();
        assert!(page.cover_image.is_none());
        assert_eq!(page.categories[0].slug, "news");
        assert_eq!(page.updated_at, "2024-01-02T00:00:00Z");
    }

    #[test]
    fn image_dimensions_may_be_fractional() {
        let json = r#"{"url":"https://cdn.example/a.png","width":1200.5,"height":600,"filename":"a.png"}"#;
        let variant: ImageVariant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.width, 1200.5);
        assert_eq!(variant.height, 600.0);
    }

    #[test]
    fn page_summary_rejects_missing_slug() {
        let json = r#"{"title":"t","subtitle":"s","coverImage":null,"categories":[],"createdAt":"","updatedAt":""}"#;
        assert!(serde_json::from_str::<PageSummary>(json).is_err());
    }

    #[test]
    fn block_type_selects_variant() {
        let json = r#"[
            {"type":"header","styles":["Bold"],"header":"H","subheader":null,"size":"h1"},
            {"type":"list","styles":[],"options":[{"title":"a"},{"title":"b","subtitle":"c"}]},
            {"type":"embed","styles":[],"url":"https://youtu.be/x"},
            {"type":"image","styles":[],"images":[]},
            {"type":"code","styles":[],"code":"fn main() {}"},
            {"type":"text","styles":[],"text":"plain"},
            {"type":"cta","styles":[],"text":"Go","url":"/go"}
        ]"#;
        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert!(matches!(&blocks[0], ContentBlock::Header(h) if h.subheader.is_none() && h.size == "h1"));
        assert!(matches!(&blocks[1], ContentBlock::List(l) if l.options[1].subtitle.as_deref() == Some("c")));
        assert!(matches!(&blocks[2], ContentBlock::Embed(_)));
        assert!(matches!(&blocks[3], ContentBlock::Image(i) if i.images.is_empty()));
        assert!(matches!(&blocks[4], ContentBlock::Code(_)));
        assert!(matches!(&blocks[5], ContentBlock::Text(t) if t.text == "plain"));
        assert!(matches!(&blocks[6], ContentBlock::Cta(c) if c.description.is_none()));
    }

    #[test]
    fn block_missing_variant_field_is_rejected() {
        let json = r#"{"type":"embed","styles":[]}"#;
        assert!(serde_json::from_str::<ContentBlock>(json).is_err());
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let json = r#"{"type":"video","styles":[],"url":"x"}"#;
        assert!(serde_json::from_str::<ContentBlock>(json).is_err());
    }

    #[test]
    fn custom_block_keeps_extra_fields() {
        let json = r#"{"type":"custom","styles":["Wide"],"blockId":"pricing","tiers":[1,2,3],"currency":"EUR"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        let ContentBlock::Custom(custom) = &block else {
            panic!("expected custom block");
        };
        assert_eq!(custom.block_id, "pricing");
        assert_eq!(custom.field("currency"), Some(&Value::from("EUR")));
        assert_eq!(custom.fields["tiers"], serde_json::json!([1, 2, 3]));
        assert!(!custom.fields.contains_key("type"));
        assert!(!custom.fields.contains_key("blockId"));

        let back = serde_json::to_value(&block).unwrap();
        assert_eq!(back["type"], "custom");
        assert_eq!(back["blockId"], "pricing");
        assert_eq!(back["currency"], "EUR");
    }

    #[test]
    fn custom_block_requires_block_id() {
        let json = r#"{"type":"custom","styles":[]}"#;
        assert!(serde_json::from_str::<ContentBlock>(json).is_err());
    }

    #[test]
    fn menu_items_nest() {
        let json = r#"{
            "id": "main",
            "name": "Main",
            "items": [{
                "title": "Docs", "icon": "book", "url": "/docs", "styles": [],
                "children": [{"title": "API", "subtitle": "Reference", "icon": "", "url": "/docs/api", "styles": [], "children": []}]
            }]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert!(menu.items[0].subtitle.is_none());
        assert_eq!(menu.items[0].children[0].subtitle.as_deref(), Some("Reference"));
    }

    #[test]
    fn layout_is_any_object() {
        let layout: Layout = serde_json::from_str(r#"{"id":"footer","items":[]}"#).unwrap();
        assert_eq!(layout.id(), Some("footer"));
        assert!(layout.get("items").is_some());
        assert!(serde_json::from_str::<Layout>("[1,2]").is_err());
    }

    #[test]
    fn block_styles_are_reachable_through_the_enum() {
        let block = ContentBlock::Text(TextBlock {
            styles: vec!["Muted".to_string()],
            text: String::new(),
        });
        assert_eq!(block.styles(), ["Muted".to_string()]);
    }
}
