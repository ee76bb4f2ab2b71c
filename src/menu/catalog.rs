use std::{collections::HashSet, sync::Arc};

use super::dto::{Category, MenuItem};

/// `(name, base price, vegetarian)`
pub type Dish = (&'static str, u32, bool);

pub const PLACEHOLDER_IMAGE: &str = "https://source.unsplash.com/500x500/?indian,food";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pricing {
    Scale(f64),
    Add(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub suffix: &'static str,
    pub pricing: Pricing,
}

impl Variant {
    fn price(&self, base: f64) -> f64 {
        match self.pricing {
            Pricing::Scale(factor) => base * factor,
            Pricing::Add(delta) => base + delta,
        }
    }
}

const MAIN_COURSE_VARIANTS: &[Variant] = &[
    Variant {
        suffix: "Half",
        pricing: Pricing::Scale(0.6),
    },
    Variant {
        suffix: "Spicy",
        pricing: Pricing::Add(20.0),
    },
];

const BREAD_VARIANTS: &[Variant] = &[Variant {
    suffix: "Wheat",
    pricing: Pricing::Add(10.0),
}];

impl Category {
    /// Derived items emitted after every base dish of the category.
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Category::MainCourse => MAIN_COURSE_VARIANTS,
            Category::Breads => BREAD_VARIANTS,
            _ => &[],
        }
    }
}

pub const MENU: &[(Category, &[Dish])] = &[
    (
        Category::Breakfast,
        &[
            ("Masala Dosa", 120, true),
            ("Idli Sambar", 80, true),
            ("Puri Bhaji", 100, true),
            ("Aloo Paratha", 90, true),
            ("Poha", 60, true),
            ("Upma", 60, true),
            ("Vada Pav", 40, true),
            ("Misal Pav", 120, true),
            ("Chole Bhature", 150, true),
            ("Anda Bhurji", 100, false),
            ("Omelette", 80, false),
            ("Kheema Pav", 180, false),
        ],
    ),
    (
        Category::Snacks,
        &[
            ("Samosa", 30, true),
            ("Pakora", 80, true),
            ("Paneer Tikka", 220, true),
            ("Hara Bhara Kabab", 180, true),
            ("Veg Manchurian", 160, true),
            ("Chicken Tikka", 280, false),
            ("Chicken Lollipop", 250, false),
            ("Fish Fry", 350, false),
            ("Mutton Seekh Kabab", 380, false),
        ],
    ),
    (
        Category::MainCourse,
        &[
            ("Paneer Butter Masala", 280, true),
            ("Palak Paneer", 260, true),
            ("Dal Makhani", 220, true),
            ("Dal Tadka", 180, true),
            ("Mix Veg", 200, true),
            ("Malai Kofta", 290, true),
            ("Butter Chicken", 350, false),
            ("Chicken Curry", 320, false),
            ("Mutton Rogan Josh", 450, false),
            ("Kadai Chicken", 340, false),
            ("Chicken Handi", 330, false),
            ("Egg Curry", 200, false),
        ],
    ),
    (
        Category::Breads,
        &[
            ("Tandoori Roti", 30, true),
            ("Butter Roti", 40, true),
            ("Plain Naan", 50, true),
            ("Butter Naan", 60, true),
            ("Garlic Naan", 80, true),
            ("Cheese Naan", 100, true),
            ("Kulcha", 70, true),
            ("Lachha Paratha", 60, true),
        ],
    ),
    (
        Category::Rice,
        &[
            ("Steamed Rice", 100, true),
            ("Jeera Rice", 140, true),
            ("Veg Pulao", 180, true),
            ("Veg Biryani", 220, true),
            ("Curd Rice", 150, true),
            ("Chicken Biryani", 320, false),
            ("Mutton Biryani", 420, false),
            ("Egg Biryani", 250, false),
            ("Prawns Biryani", 450, false),
        ],
    ),
    (
        Category::Drinks,
        &[
            ("Masala Chai", 30, true),
            ("Filter Coffee", 40, true),
            ("Lassi (Sweet)", 80, true),
            ("Lassi (Salted)", 80, true),
            ("Mango Lassi", 100, true),
            ("Butter Milk", 40, true),
            ("Fresh Lime Soda", 60, true),
            ("Cola", 40, true),
        ],
    ),
];

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

pub fn build_catalog() -> Vec<MenuItem> {
    build_catalog_from(MENU)
}

/// Expands categories into menu items. Ids share one counter across all
/// categories, so a prefix can reappear in a later, non-contiguous range.
pub fn build_catalog_from(categories: &[(Category, &[Dish])]) -> Vec<MenuItem> {
    let mut items = Vec::new();
    let mut counter: u32 = 1;

    for &(category, dishes) in categories {
        let prefix = category.id_prefix();
        for &(name, base_price, is_veg) in dishes {
            let base = f64::from(base_price);
            items.push(MenuItem {
                id: format!("{prefix}{counter}"),
                name: name.to_string(),
                price: base,
                category,
                is_veg,
                image: PLACEHOLDER_IMAGE.to_string(),
            });
            counter += 1;

            for variant in category.variants() {
                items.push(MenuItem {
                    id: format!("{prefix}{counter}"),
                    name: format!("{name} ({})", variant.suffix),
                    price: round_cents(variant.price(base)),
                    category,
                    is_veg,
                    image: String::new(),
                });
                counter += 1;
            }
        }
    }

    items
}

/// Read-only menu built once at startup and shared by every handler.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[MenuItem]>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn build() -> Self {
        Self::new(build_catalog())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Handle to the item list; cloning it never copies the items.
    pub fn shared(&self) -> Arc<[MenuItem]> {
        Arc::clone(&self.items)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|item| seen.insert(item.id.as_str()))
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn single_drink_category_yields_one_item() {
        let items = build_catalog_from(&[(Category::Drinks, &[("Tea", 30, true)])]);
        assert_eq!(
            items,
            vec![MenuItem {
                id: "dr1".into(),
                name: "Tea".into(),
                price: 30.0,
                category: Category::Drinks,
                is_veg: true,
                image: PLACEHOLDER_IMAGE.into(),
            }]
        );
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_catalog(), build_catalog());
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::build();
        assert!(catalog.has_unique_ids());
        assert_eq!(catalog.len(), 90);
    }

    #[test]
    fn counter_is_shared_across_categories() {
        let items = build_catalog();
        assert_eq!(items[0].id, "br1");
        assert_eq!(items[0].name, "Masala Dosa");
        assert_eq!(items[12].id, "sn13");
        assert_eq!(items[21].id, "ma22");

        let roti = items.iter().find(|i| i.name == "Tandoori Roti").unwrap();
        assert_eq!(roti.id, "br58");
        let cola = items.last().unwrap();
        assert_eq!(cola.id, "dr90");
        assert_eq!(cola.name, "Cola");
    }

    #[test]
    fn main_course_items_get_half_and_spicy_variants() {
        let items = build_catalog();
        for (i, base) in items.iter().enumerate() {
            if base.category != Category::MainCourse || base.name.ends_with(')') {
                continue;
            }
            let half = &items[i + 1];
            let spicy = &items[i + 2];

            assert_eq!(half.name, format!("{} (Half)", base.name));
            assert!((half.price - 0.6 * base.price).abs() < 1e-9);
            assert_eq!(spicy.name, format!("{} (Spicy)", base.name));
            assert_eq!(spicy.price, base.price + 20.0);

            for variant in [half, spicy] {
                assert_eq!(variant.category, base.category);
                assert_eq!(variant.is_veg, base.is_veg);
                assert!(variant.image.is_empty());
            }
        }
    }

    #[test]
    fn breads_get_wheat_variant() {
        let items = build_catalog_from(&[(Category::Breads, &[("Kulcha", 70, true)])]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "br2");
        assert_eq!(items[1].name, "Kulcha (Wheat)");
        assert_eq!(items[1].price, 80.0);
    }

    #[test]
    fn half_price_is_rounded_to_cents() {
        let items = build_catalog_from(&[(
            Category::MainCourse,
            &[("Paneer Butter Masala", 280, true)],
        )]);
        assert_eq!(items[1].price, 168.0);
        assert_eq!(items[2].price, 300.0);
    }

    #[test]
    fn shared_items_are_not_copied() {
        let catalog = Catalog::build();
        let first = catalog.shared();
        let second = catalog.shared();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 90);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::build();
        let item = catalog.get("ma23").unwrap();
        assert_eq!(item.name, "Paneer Butter Masala (Half)");
        assert!(catalog.get("zz1").is_none());
    }
}
