//! Catalog Entities
//!
//! Categories, sub-categories, products and gallery items.

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::table::{Cell, Column, Identifiable, Renderable, Tone};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

impl Identifiable for Category {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for Category {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |c: &Category| Cell::muted(c.id.to_string())).fixed_width(72.0),
            Column::new("name", "name", |c: &Category| Cell::text(&c.name)).flex(2.0),
            Column::new("slug", "slug", |c: &Category| Cell::muted(&c.slug)).flex(2.0),
        ]
    }
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    const TITLE_KEY: &'static str = "categories";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub category_id: u64,
    /// Parent name, when the API joins it in
    #[serde(default)]
    pub category_name: Option<String>,
}

impl Identifiable for SubCategory {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for SubCategory {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "id", |s: &SubCategory| Cell::muted(s.id.to_string())).fixed_width(72.0),
            Column::new("name", "name", |s: &SubCategory| Cell::text(&s.name)).flex(2.0),
            Column::new("slug", "slug", |s: &SubCategory| Cell::muted(&s.slug)).flex(2.0),
            Column::new("category", "category", |s: &SubCategory| match &s.category_name {
                Some(name) => Cell::text(name),
                None => Cell::muted(format!("#{}", s.category_id)),
            }),
        ]
    }
}

impl Resource for SubCategory {
    const PATH: &'static str = "sub-categories";
    const TITLE_KEY: &'static str = "sub_categories";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

impl Identifiable for Product {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for Product {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("name", "name", |p: &Product| Cell::text(&p.name)).flex(2.0),
            Column::new("category", "category", |p: &Product| {
                Cell::optional(p.category_name.as_deref())
            }),
            Column::new("price", "price", |p: &Product| Cell::Money(p.price)).fixed_width(96.0),
            Column::new("stock", "stock", |p: &Product| {
                if p.in_stock {
                    Cell::badge("in stock", Tone::Success)
                } else {
                    Cell::badge("sold out", Tone::Warning)
                }
            })
            .fixed_width(104.0),
        ]
    }
}

impl Resource for Product {
    const PATH: &'static str = "products";
    const TITLE_KEY: &'static str = "products";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Identifiable for GalleryItem {
    type Id = u64;

    fn row_id(&self) -> u64 {
        self.id
    }
}

impl Renderable for GalleryItem {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", "title", |g: &GalleryItem| Cell::text(&g.title)).flex(2.0),
            Column::new("category", "category", |g: &GalleryItem| {
                Cell::optional(g.category.as_deref())
            }),
            Column::new("image", "image", |g: &GalleryItem| Cell::muted(&g.image_url)).flex(3.0),
        ]
    }
}

impl Resource for GalleryItem {
    const PATH: &'static str = "gallery";
    const TITLE_KEY: &'static str = "gallery";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sub_category_without_parent_name_shows_id() {
        let sub: SubCategory = serde_json::from_value(json!({
            "id": 4, "name": "Mugs", "slug": "mugs", "categoryId": 2
        }))
        .unwrap();
        let cells: Vec<Cell> = SubCategory::columns().iter().map(|c| c.render_cell(&sub)).collect();
        assert_eq!(cells[3], Cell::muted("#2"));
    }

    #[test]
    fn test_product_defaults_to_in_stock() {
        let product: Product = serde_json::from_value(json!({
            "id": 1, "name": "Poster", "slug": "poster", "price": 12.5
        }))
        .unwrap();
        assert!(product.in_stock);
        assert_eq!(Product::columns()[2].render_cell(&product), Cell::Money(12.5));
    }
}
