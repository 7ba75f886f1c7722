pub mod category_grid;
pub mod footer;
pub mod header;
pub mod hero;
pub mod product_card;
pub mod product_grid;
