use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn CategoryGrid(categories: Vec<Category>) -> impl IntoView {
    view! {
        <section class="categories-section">
            <h2 class="section-title">"Shop by Category"</h2>
            <div class="category-grid">
                {categories
                    .into_iter()
                    .map(|category| {
                        view! {
                            <a href=category.anchor() class="category-tile">
                                <img src=category.image_path() alt=category.label().to_string() />
                                <div class="category-overlay">
                                    <span class="category-label">{category.label().to_string()}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
