//! Canned data for demo mode (screenshots, no network).

use crate::models::{Category, Item, ItemText};

fn item(id: &str, name: &str, color: &str, image: Option<&str>) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        image: image.map(str::to_string),
        color: color.to_string(),
    }
}

/// A collection in the shape `/items/random` serves.
pub fn demo_category() -> Category {
    Category {
        title: "Fruits".to_string(),
        items: vec![
            item("1", "Apple", "FF0000", Some("/images/apple.png")),
            item("2", "Banana", "FFE135", None),
            item("3", "Blueberry", "464196", None),
            item("4", "Lime", "BFFF00", None),
            item("5", "Plum", "663399", None),
        ],
    }
}

/// The text blob `/texts/{id}` would serve for a demo item.
pub fn demo_text(id: &str) -> ItemText {
    let text = match id {
        "1" => "A red fruit. Crisp, sweet, and the default example of everything.",
        "2" => "A yellow fruit with its own packaging.",
        "3" => "A small, dark berry that stains everything it touches.",
        "4" => "A green citrus, sharper than its orange cousins.",
        "5" => "A purple stone fruit, best eaten slightly chilled.",
        _ => "No description available.",
    };
    ItemText {
        id: id.to_string(),
        text: text.to_string(),
    }
}
