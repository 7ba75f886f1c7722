use crate::models::Product;

/// Compiled-in catalog. Never fails, never waits.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn products(&self) -> Vec<Product> {
        [
            (1, "Classic White Shirt", 49.99, "Men", "/images/white-shirt.jpg"),
            (2, "Summer Floral Dress", 79.99, "Women", "/images/floral-dress.jpg"),
            (3, "Kids Denim Jacket", 39.99, "Kids", "/images/denim-jacket.jpg"),
            (4, "Leather Handbag", 99.99, "Accessories", "/images/handbag.jpg"),
            (5, "Men's Casual Sneakers", 69.99, "Men", "/images/sneakers.jpg"),
            (6, "Silk Scarf", 29.99, "Accessories", "/images/scarf.jpg"),
        ]
        .into_iter()
        .map(|(id, title, price, category, image)| Product {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
            image: image.to_string(),
        })
        .collect()
    }
}
