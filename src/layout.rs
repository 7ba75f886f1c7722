//! Document shell shared by every rendered page.

use leptos::prelude::*;

pub struct OpenGraphImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// Head metadata for the storefront: title, description and social previews.
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub url: &'static str,
    pub site_name: &'static str,
    pub og_image: OpenGraphImage,
    pub locale: &'static str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub twitter_image: &'static str,
    pub favicon: &'static str,
}

pub const SITE: SiteMetadata = SiteMetadata {
    title: "Kliin Fashions - Trendy Clothing & Accessories",
    description: "Shop the latest fashion trends at Kliin Fashions. Discover stylish clothing and accessories for men, women, and more.",
    keywords: &["fashion", "clothing", "e-commerce", "Kliin Fashions", "trendy outfits"],
    og_title: "Kliin Fashions - Your Style Destination",
    og_description: "Explore our curated collection of fashionable clothing and accessories.",
    url: "https://www.kliinfashions.com",
    site_name: "Kliin Fashions",
    og_image: OpenGraphImage {
        url: "/images/og-image.jpg",
        width: 1200,
        height: 630,
        alt: "Kliin Fashions Collection",
    },
    locale: "en_US",
    og_type: "website",
    twitter_card: "summary_large_image",
    twitter_title: "Kliin Fashions",
    twitter_description: "Shop the latest in fashion at Kliin Fashions.",
    twitter_image: "/images/twitter-image.jpg",
    favicon: "/favicon.ico",
};

const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Geist:wght@300;400;500;700&family=Geist+Mono:wght@400;500&display=swap";
const STYLESHEET_HREF: &str = "/style/main.css";

/// A `<meta>` tag keyed either by `name` or by `property` (Open Graph).
#[derive(Clone, Debug, PartialEq)]
pub struct MetaTag {
    pub key_attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self { key_attr: "name", key, content: content.into() }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self { key_attr: "property", key, content: content.into() }
    }
}

impl SiteMetadata {
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::name("description", self.description),
            MetaTag::name("keywords", self.keywords.join(", ")),
            MetaTag::property("og:title", self.og_title),
            MetaTag::property("og:description", self.og_description),
            MetaTag::property("og:url", self.url),
            MetaTag::property("og:site_name", self.site_name),
            MetaTag::property("og:image", self.og_image.url),
            MetaTag::property("og:image:width", self.og_image.width.to_string()),
            MetaTag::property("og:image:height", self.og_image.height.to_string()),
            MetaTag::property("og:image:alt", self.og_image.alt),
            MetaTag::property("og:locale", self.locale),
            MetaTag::property("og:type", self.og_type),
            MetaTag::name("twitter:card", self.twitter_card),
            MetaTag::name("twitter:title", self.twitter_title),
            MetaTag::name("twitter:description", self.twitter_description),
            MetaTag::name("twitter:image", self.twitter_image),
        ]
    }
}

/// Wraps page content in `<html>` with the site head; children render unchanged.
#[component]
pub fn Document(children: Children) -> impl IntoView {
    let meta_tags = SITE
        .meta_tags()
        .into_iter()
        .map(|tag| {
            leptos::html::meta()
                .attr(tag.key_attr, tag.key)
                .attr("content", tag.content)
        })
        .collect::<Vec<_>>();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{SITE.title}</title>
                {meta_tags}
                <link rel="icon" href=SITE.favicon />
                <link rel="stylesheet" href=FONTS_HREF />
                <link rel="stylesheet" href=STYLESHEET_HREF />
            </head>
            <body class="font-geist antialiased">
                {children()}
            </body>
        </html>
    }
}
