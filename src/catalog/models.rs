//! Catalog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Optical,
    Sun,
    Lens,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Optical => "optical",
            Category::Sun => "sun",
            Category::Lens => "lens",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "optical" => Some(Category::Optical),
            "sun" => Some(Category::Sun),
            "lens" => Some(Category::Lens),
            _ => None,
        }
    }
}

/// Frame color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrameColor {
    Black,
    Gold,
    Silver,
    Brown,
    Clear,
}

impl FrameColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameColor::Black => "black",
            FrameColor::Gold => "gold",
            FrameColor::Silver => "silver",
            FrameColor::Brown => "brown",
            FrameColor::Clear => "clear",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "black" => Some(FrameColor::Black),
            "gold" => Some(FrameColor::Gold),
            "silver" => Some(FrameColor::Silver),
            "brown" => Some(FrameColor::Brown),
            "clear" => Some(FrameColor::Clear),
            _ => None,
        }
    }
}

/// Catalog product
///
/// `price` is in the smallest currency unit (satang). `stock` is mutated
/// during checkout only via the reservation protocol.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub category: Category,
    pub color: FrameColor,
    pub stock: i32,
    pub description: String,
    pub tag: String,
    pub is_recommended: bool,
    pub is_active: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a product (admin)
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub category: Category,
    pub color: FrameColor,
    pub stock: i32,
    pub description: String,
    pub tag: String,
    pub is_recommended: bool,
    pub is_active: bool,
    pub images: Vec<String>,
}

/// Whitelisted partial update (admin)
///
/// Absent fields are left untouched. The slug is never client-supplied;
/// it is regenerated here when the name changes.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category: Option<Category>,
    pub color: Option<FrameColor>,
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub is_recommended: Option<bool>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.color.is_none()
            && self.stock.is_none()
            && self.description.is_none()
            && self.tag.is_none()
            && self.is_recommended.is_none()
            && self.is_active.is_none()
            && self.images.is_none()
    }
}

/// Derive a URL slug from a product name.
///
/// Drops ASCII punctuation only; any non-ASCII script passes through
/// untouched. The catalog is mostly Thai, and Thai vowel and tone signs
/// are combining marks that a letter-or-digit filter would strip,
/// collapsing distinct names onto one slug. Whitespace runs become
/// single dashes.
pub fn slugify(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Minimal Black Frame"), "minimal-black-frame");
        assert_eq!(slugify("  Wayfarer   Classic "), "wayfarer-classic");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("UV400 (Polarized!)"), "uv400-polarized");
        assert_eq!(slugify("two-tone brown/clear"), "two-tone-brownclear");
    }

    #[test]
    fn test_slugify_keeps_thai() {
        assert_eq!(slugify("กรอบแว่น ทอง"), "กรอบแว่น-ทอง");
    }

    #[test]
    fn test_slugify_keeps_thai_tone_marks_distinct() {
        // แว่น (glasses) and แวน (van) differ only in combining marks;
        // slugs must not collide or the UNIQUE constraint rejects the
        // second product
        assert_ne!(slugify("แว่น"), slugify("แวน"));
        assert_eq!(slugify("แว่น"), "แว่น");
    }

    #[test]
    fn test_category_round_trip() {
        for c in [Category::Optical, Category::Sun, Category::Lens] {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("hat"), None);
    }

    #[test]
    fn test_color_round_trip() {
        for c in [
            FrameColor::Black,
            FrameColor::Gold,
            FrameColor::Silver,
            FrameColor::Brown,
            FrameColor::Clear,
        ] {
            assert_eq!(FrameColor::parse(c.as_str()), Some(c));
        }
        assert_eq!(FrameColor::parse("neon"), None);
    }
}
