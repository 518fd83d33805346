//! Item and collection models

use serde::{Deserialize, Serialize};

use super::color;

/// One selectable card in a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, opaque to the client
    pub id: String,
    /// Display name
    pub name: String,
    /// Relative path to the item image, if any
    #[serde(default)]
    pub image: Option<String>,
    /// Background color as 6 hex digits, no leading `#`
    pub color: String,
}

impl Item {
    /// Image path, treating an absent or empty value as "no image".
    pub fn image_path(&self) -> Option<&str> {
        self.image.as_deref().filter(|p| !p.is_empty())
    }

    /// Card background color for the TUI.
    pub fn card_color(&self) -> ratatui::style::Color {
        color::card_color(&self.color)
    }

    /// Text color with enough contrast against the card background.
    pub fn text_color(&self) -> ratatui::style::Color {
        color::text_color(&self.color)
    }
}

/// A random item collection as served by `/items/random`.
///
/// Replaced wholesale on every fetch; nothing is merged or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Collection title shown in the top bar
    pub title: String,
    /// Ordered items
    pub items: Vec<Item>,
}

/// Per-item text blob as served by `/texts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemText {
    /// Id of the item this text belongs to
    pub id: String,
    /// The text itself
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_response() {
        let body = r#"{
            "title": "Fruits",
            "items": [
                {"id": "1", "name": "Apple", "image": "/img/apple.png", "color": "FF0000"}
            ]
        }"#;
        let category: Category = serde_json::from_str(body).unwrap();
        assert_eq!(category.title, "Fruits");
        assert_eq!(category.items.len(), 1);
        assert_eq!(category.items[0].id, "1");
        assert_eq!(category.items[0].image_path(), Some("/img/apple.png"));
    }

    #[test]
    fn missing_image_is_not_an_error() {
        let body = r#"{"id": "2", "name": "Pear", "color": "AACC00"}"#;
        let item: Item = serde_json::from_str(body).unwrap();
        assert_eq!(item.image_path(), None);
    }

    #[test]
    fn empty_image_path_is_omitted() {
        let body = r#"{"id": "3", "name": "Plum", "image": "", "color": "663399"}"#;
        let item: Item = serde_json::from_str(body).unwrap();
        assert_eq!(item.image_path(), None);
    }

    #[test]
    fn parses_text_response() {
        let body = r#"{"id": "1", "text": "A red fruit."}"#;
        let text: ItemText = serde_json::from_str(body).unwrap();
        assert_eq!(text.id, "1");
        assert_eq!(text.text, "A red fruit.");
    }
}
