use serde::{Deserialize, Serialize};

/// Storefront languages. Arabic is the default and renders right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a stored language tag; anything unrecognized is rejected so
    /// the caller can fall back to the default.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// Localized text for one string key.
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    table(lang).iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// The full key → text table for `lang`. The webview re-renders every
/// element tagged with one of these keys when the language changes.
pub fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::Ar => AR,
        Language::En => EN,
    }
}

const AR: &[(&str, &str)] = &[
    ("brand", "باري دايت"),
    ("nav.products", "المنتجات"),
    ("nav.about", "نبذة"),
    ("nav.contact", "تواصل"),
    ("hero.title", "خيارك الذكي للأكل الصحي"),
    ("hero.subtitle", "وجبات متوازنة ومشروبات طبيعية، بتصميم سريع ومتجاوب."),
    ("hero.ctaShop", "تسوق الآن"),
    ("hero.ctaLearn", "اعرف أكثر"),
    ("hero.scroll", "اسحب للأسفل"),
    ("products.title", "منتجاتنا"),
    ("products.subtitle", "مختارة بعناية لأسلوب حياة صحي"),
    ("product1.name", "وجبة رز ودجاج صحية"),
    ("product1.desc", "صدر دجاج مشوي مع أرز بني وخضار موسمية."),
    ("product2.name", "مشروب فواكه صحي"),
    ("product2.desc", "مزيج طبيعي من التوت والمانجو والبرتقال بدون سكر مضاف."),
    ("product3.name", "مياه نقية"),
    ("product3.desc", "مياه نقية منعشة معادن متوازنة."),
    ("meta.calories", "سعرة"),
    ("actions.addToCart", "أضف إلى السلة"),
    ("toast.added", "تمت الإضافة للسلة"),
    ("footer.home", "الرئيسية"),
    ("footer.products", "المنتجات"),
    ("footer.about", "نبذة"),
    ("footer.rights", "جميع الحقوق محفوظة."),
    ("checkout.title", "الدفع عند الاستلام"),
    ("checkout.fullName", "الاسم الكامل"),
    ("checkout.fullNamePh", "مثال: محمد أحمد"),
    ("checkout.phone", "رقم الجوال"),
    ("checkout.phonePh", "05xxxxxxxx"),
    ("checkout.address", "العنوان"),
    ("checkout.addressPh", "المدينة، الحي، الشارع"),
    ("checkout.codNote", "سيتم الدفع نقدًا عند استلام الطلب."),
    ("checkout.confirm", "تأكيد الطلب"),
    ("checkout.cancel", "إلغاء"),
    (
        "checkout.success",
        "تم استلام طلبك بنجاح! سيتم التواصل معك لتأكيد التوصيل.",
    ),
];

const EN: &[(&str, &str)] = &[
    ("brand", "Barry Diet"),
    ("nav.products", "Products"),
    ("nav.about", "About"),
    ("nav.contact", "Contact"),
    ("hero.title", "Your smart choice for healthy food"),
    (
        "hero.subtitle",
        "Balanced meals and natural drinks, fast and responsive design.",
    ),
    ("hero.ctaShop", "Shop Now"),
    ("hero.ctaLearn", "Learn More"),
    ("hero.scroll", "Scroll down"),
    ("products.title", "Our Products"),
    ("products.subtitle", "Carefully selected for a healthy lifestyle"),
    ("product1.name", "Healthy Rice & Chicken Meal"),
    (
        "product1.desc",
        "Grilled chicken breast with brown rice and seasonal veggies.",
    ),
    ("product2.name", "Healthy Fruit Juice"),
    (
        "product2.desc",
        "A natural blend of berries, mango, and orange with no added sugar.",
    ),
    ("product3.name", "Pure Water"),
    ("product3.desc", "Refreshing pure water with balanced minerals."),
    ("meta.calories", "kcal"),
    ("actions.addToCart", "Add to Cart"),
    ("toast.added", "Added to cart"),
    ("footer.home", "Home"),
    ("footer.products", "Products"),
    ("footer.about", "About"),
    ("footer.rights", "All rights reserved."),
    ("checkout.title", "Cash on Delivery"),
    ("checkout.fullName", "Full name"),
    ("checkout.fullNamePh", "e.g., Mohammed Ahmed"),
    ("checkout.phone", "Phone number"),
    ("checkout.phonePh", "05xxxxxxxx"),
    ("checkout.address", "Address"),
    ("checkout.addressPh", "City, district, street"),
    ("checkout.codNote", "You will pay in cash upon delivery."),
    ("checkout.confirm", "Confirm Order"),
    ("checkout.cancel", "Cancel"),
    (
        "checkout.success",
        "Your order was received successfully! We will contact you to confirm delivery.",
    ),
];
