use crate::i18n::{self, Language};
use crate::models::{currency, ProductView};

/// A storefront catalog entry. Display text lives in the translation
/// tables; price and calories are fixed per product.
pub struct Product {
    pub id: i64,
    pub name_key: &'static str,
    pub desc_key: &'static str,
    pub price: f64,
    pub calories: i32,
    pub image: &'static str,
}

pub const CATALOG: &[Product] = &[
    Product {
        id: 1,
        name_key: "product1.name",
        desc_key: "product1.desc",
        price: 35.0,
        calories: 450,
        image: "assets/products/meal.jpg",
    },
    Product {
        id: 2,
        name_key: "product2.name",
        desc_key: "product2.desc",
        price: 12.0,
        calories: 150,
        image: "assets/products/juice.jpg",
    },
    Product {
        id: 3,
        name_key: "product3.name",
        desc_key: "product3.desc",
        price: 5.0,
        calories: 0,
        image: "assets/products/water.jpg",
    },
];

pub fn find(id: i64) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

impl Product {
    pub fn localized(&self, lang: Language) -> ProductView {
        ProductView {
            id: self.id,
            name: i18n::lookup(lang, self.name_key)
                .unwrap_or(self.name_key)
                .to_string(),
            description: i18n::lookup(lang, self.desc_key)
                .unwrap_or(self.desc_key)
                .to_string(),
            price: self.price,
            price_display: currency(self.price),
            calories: self.calories,
            image: self.image.to_string(),
        }
    }
}
