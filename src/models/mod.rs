//! Data models for Vetrina

pub mod color;
mod item;

pub use item::{Category, Item, ItemText};
