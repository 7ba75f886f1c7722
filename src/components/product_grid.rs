use leptos::prelude::*;

use crate::catalog::CatalogStatus;
use crate::components::product_card::ProductCard;

/// Product area of the page for each catalog status.
#[component]
pub fn ProductGrid(status: CatalogStatus) -> impl IntoView {
    match status {
        CatalogStatus::Loading => view! {
            <div class="catalog-message">
                <div class="loading-spinner"></div>
                <p>"Loading products..."</p>
            </div>
        }
        .into_any(),
        CatalogStatus::Unavailable(message) => view! {
            <div class="catalog-message error-message">
                <p>{message}</p>
            </div>
        }
        .into_any(),
        CatalogStatus::Ready(products) if products.is_empty() => view! {
            <div class="catalog-message">
                <p>"No products available."</p>
            </div>
        }
        .into_any(),
        CatalogStatus::Ready(products) => view! {
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
