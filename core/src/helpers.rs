//! Pure lookups over decoded content. No I/O.

use crate::types::{Categorized, Image, ImageBlock, ImageVariant, Styled};

/// True if any of `block`'s styles equals `style`, ignoring case.
pub fn has_style<S: Styled + ?Sized>(block: &S, style: &str) -> bool {
    let wanted = style.to_lowercase();
    block.styles().iter().any(|s| s.to_lowercase() == wanted)
}

/// The "large" rendition of `image`: the variant at index 1.
///
/// This is positional. It does not compare sizes, and returns `None` when the
/// image has fewer than two variants.
pub fn large_image_variant(image: &Image) -> Option<&ImageVariant> {
    image.variants.get(1)
}

pub fn first_image(block: &ImageBlock) -> Option<&Image> {
    block.images.first()
}

/// True if any of `page`'s categories has `category_slug`.
pub fn has_category<P: Categorized + ?Sized>(page: &P, category_slug: &str) -> bool {
    page.categories().iter().any(|c| c.slug == category_slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ContentBlock, MenuItem, PageSummary, TextBlock};

    fn variant(width: f64) -> ImageVariant {
        ImageVariant {
            url: format!("https://cdn.example/{width}.png"),
            width,
            height: width,
            filename: format!("{width}.png"),
        }
    }

    fn image(widths: &[f64]) -> Image {
        Image {
            alt: "alt".to_string(),
            variants: widths.iter().copied().map(variant).collect(),
        }
    }

    fn text_block(styles: &[&str]) -> ContentBlock {
        ContentBlock::Text(TextBlock {
            styles: styles.iter().map(|s| s.to_string()).collect(),
            text: String::new(),
        })
    }

    fn page(slugs: &[&str]) -> PageSummary {
        PageSummary {
            title: String::new(),
            subtitle: String::new(),
            cover_image: None,
            slug: "p".to_string(),
            categories: slugs
                .iter()
                .map(|s| Category {
                    name: s.to_uppercase(),
                    slug: s.to_string(),
                })
                .collect(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn has_style_ignores_case() {
        let block = text_block(&["Bold", "Left"]);
        assert!(has_style(&block, "bold"));
        assert!(has_style(&block, "LEFT"));
    }

    #[test]
    fn has_style_misses_absent_style() {
        assert!(!has_style(&text_block(&["Bold"]), "italic"));
        assert!(!has_style(&text_block(&[]), "bold"));
    }

    #[test]
    fn has_style_works_on_menu_items() {
        let item = MenuItem {
            title: "Home".to_string(),
            subtitle: None,
            icon: String::new(),
            url: "/".to_string(),
            styles: vec!["Highlighted".to_string()],
            children: Vec::new(),
        };
        assert!(has_style(&item, "highlighted"));
    }

    #[test]
    fn large_variant_needs_two_variants() {
        assert_eq!(large_image_variant(&image(&[])), None);
        assert_eq!(large_image_variant(&image(&[320.0])), None);
    }

    #[test]
    fn large_variant_is_positional() {
        let img = image(&[320.0, 1280.0, 640.0]);
        assert_eq!(large_image_variant(&img).map(|v| v.width), Some(1280.0));
    }

    #[test]
    fn first_image_of_block() {
        let block = ImageBlock {
            styles: Vec::new(),
            images: vec![image(&[1.0]), image(&[2.0])],
        };
        assert_eq!(first_image(&block).map(|i| i.variants[0].width), Some(1.0));

        let empty = ImageBlock {
            styles: Vec::new(),
            images: Vec::new(),
        };
        assert!(first_image(&empty).is_none());
    }

    #[test]
    fn has_category_matches_slug_exactly() {
        let page = page(&["a", "b"]);
        assert!(has_category(&page, "b"));
        assert!(!has_category(&page, "c"));
        assert!(!has_category(&page, "B"));
    }
}
