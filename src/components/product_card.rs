use leptos::prelude::*;

use crate::models::Product;

#[component]
pub fn ProductCard(#[prop(into)] product: Product) -> impl IntoView {
    let price = product.display_price();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.title.clone() />
            </div>
            <div class="product-details">
                <h3 class="product-title">{product.title.clone()}</h3>
                <p class="product-category">{product.category.clone()}</p>
                <p class="product-price">{price}</p>
                // Inert until there is a cart to add to.
                <button type="button" class="button button-primary">
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
