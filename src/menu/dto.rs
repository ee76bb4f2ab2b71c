use serde::{Deserialize, Serialize};

/// Fixed set of menu sections, serialized by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Snacks,
    #[serde(rename = "Main Course")]
    MainCourse,
    Breads,
    Rice,
    Drinks,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Snacks => "Snacks",
            Category::MainCourse => "Main Course",
            Category::Breads => "Breads",
            Category::Rice => "Rice",
            Category::Drinks => "Drinks",
        }
    }

    /// Lowercased first two letters of the display name, used in item ids.
    pub fn id_prefix(self) -> String {
        self.name().chars().take(2).collect::<String>().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub is_veg: bool,
    pub image: String,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Drinks.id_prefix(), "dr");
        assert_eq!(Category::MainCourse.id_prefix(), "ma");
        assert_eq!(Category::Breads.id_prefix(), "br");
        assert_eq!(Category::Breakfast.id_prefix(), "br");
    }

    #[test]
    fn menu_item_serializes_category_by_display_name() {
        let item = MenuItem {
            id: "ma25".into(),
            name: "Palak Paneer".into(),
            price: 260.0,
            category: Category::MainCourse,
            is_veg: true,
            image: String::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "Main Course");
        assert_eq!(json["price"], 260.0);
        assert_eq!(json["is_veg"], true);
        assert_eq!(json["image"], "");
    }
}
