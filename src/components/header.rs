use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn Header(categories: Vec<Category>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <div class="header-content">
                    <a href="/" class="logo-container">
                        <img src="/logo.svg" alt="Kliin Fashions Logo" width="40" height="40" />
                        <h1 class="logo-text">"Kliin Fashions"</h1>
                    </a>

                    <nav class="main-nav">
                        {categories
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <a href=category.anchor() class="nav-link">
                                        {category.label().to_string()}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>

                    <div class="header-actions">
                        // No handler: the mobile menu is not wired up yet.
                        <button type="button" class="menu-toggle" aria-label="Menu">
                            <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                        <button type="button" class="cart-button" aria-label="Cart">
                            <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"
                                />
                            </svg>
                            <span class="cart-badge">"0"</span>
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
