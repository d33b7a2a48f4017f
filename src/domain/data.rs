use crate::domain::model::{Benefit, Ingredient};
use crate::domain::ports::CatalogSource;

pub const INGREDIENTS: &[Ingredient] = &[
    Ingredient {
        id: "1",
        name: "Shea Butter",
        slug: "shea-butter",
        description: "Rich in vitamins A and E, deeply moisturizes and nourishes skin",
        image_url: "https://images.pexels.com/photos/4465124/pexels-photo-4465124.jpeg",
    },
    Ingredient {
        id: "2",
        name: "Lavender",
        slug: "lavender",
        description: "Calming botanical with anti-inflammatory and antimicrobial properties",
        image_url: "https://images.pexels.com/photos/207518/pexels-photo-207518.jpeg",
    },
    Ingredient {
        id: "3",
        name: "Aloe Vera",
        slug: "aloe-vera",
        description: "Soothing plant extract that hydrates and heals irritated skin",
        image_url: "https://images.pexels.com/photos/4505455/pexels-photo-4505455.jpeg",
    },
    Ingredient {
        id: "4",
        name: "Goat Milk",
        slug: "goat-milk",
        description: "Creamy and gentle, packed with lactic acid and nourishing fats",
        image_url: "https://images.pexels.com/photos/4022087/pexels-photo-4022087.jpeg",
    },
    Ingredient {
        id: "5",
        name: "Activated Charcoal",
        slug: "activated-charcoal",
        description: "Powerful detoxifier that draws out impurities and excess oil",
        image_url: "https://images.pexels.com/photos/5240645/pexels-photo-5240645.jpeg",
    },
    Ingredient {
        id: "6",
        name: "Honey",
        slug: "honey",
        description: "Natural humectant with antibacterial properties for soft, clear skin",
        image_url: "https://images.pexels.com/photos/6146970/pexels-photo-6146970.jpeg",
    },
    Ingredient {
        id: "7",
        name: "Oatmeal",
        slug: "oatmeal",
        description: "Gentle exfoliant that soothes inflammation and relieves itching",
        image_url: "https://images.pexels.com/photos/5560011/pexels-photo-5560011.jpeg",
    },
    Ingredient {
        id: "8",
        name: "Tea Tree Oil",
        slug: "tea-tree-oil",
        description: "Potent antimicrobial essential oil for acne-prone and problem skin",
        image_url: "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        id: "1",
        name: "Dry Skin",
        slug: "dry-skin",
        description: "Intense hydration for parched, flaky skin",
    },
    Benefit {
        id: "2",
        name: "Eczema Relief",
        slug: "eczema-relief",
        description: "Soothing care for sensitive, irritated skin conditions",
    },
    Benefit {
        id: "3",
        name: "Relaxation",
        slug: "relaxation",
        description: "Calming aromatherapy for stress relief and better sleep",
    },
    Benefit {
        id: "4",
        name: "Anti-Aging",
        slug: "anti-aging",
        description: "Nourishing ingredients to promote youthful, radiant skin",
    },
    Benefit {
        id: "5",
        name: "Acne Treatment",
        slug: "acne-treatment",
        description: "Clarifying formulas to combat breakouts and blemishes",
    },
    Benefit {
        id: "6",
        name: "Sensitive Skin",
        slug: "sensitive-skin",
        description: "Gentle, hypoallergenic care for reactive skin types",
    },
    Benefit {
        id: "7",
        name: "Deep Cleansing",
        slug: "deep-cleansing",
        description: "Purifying treatment to remove impurities and toxins",
    },
    Benefit {
        id: "8",
        name: "Skin Brightening",
        slug: "skin-brightening",
        description: "Illuminating formulas for a more even, radiant complexion",
    },
];

/// The compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn ingredients(&self) -> &[Ingredient] {
        INGREDIENTS
    }

    fn benefits(&self) -> &[Benefit] {
        BENEFITS
    }
}
