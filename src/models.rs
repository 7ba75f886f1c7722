use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry as shown on the landing page.
///
/// The bundled sample data calls the display name `name` while the remote
/// catalog calls it `title`; both decode into `title`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl Product {
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = f64::deserialize(deserializer)?;
    if price < 0.0 {
        return Err(D::Error::custom(format!("price must not be negative, got {price}")));
    }
    Ok(price)
}

/// Navigation label used for header links, category tiles and footer links.
///
/// Categories are not matched against `Product::category`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Lowercased label with only the first space turned into a hyphen.
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replacen(' ', "-", 1)
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.slug())
    }

    pub fn image_path(&self) -> String {
        format!("/images/{}-category.jpg", self.slug())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
