use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::domain::EnglishLevel;

/// Label used when a category has no configured subcategories.
pub const DEFAULT_SUBCATEGORY: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
}

pub static CATEGORIES: &[Category] = &[
    Category { name: "Science", icon: "microscope" },
    Category { name: "History", icon: "landmark" },
    Category { name: "Geography", icon: "globe" },
    Category { name: "Technology", icon: "laptop" },
    Category { name: "Arts", icon: "palette" },
    Category { name: "Sports", icon: "futbol" },
    Category { name: "Literature", icon: "book" },
    Category { name: "Music", icon: "music" },
    Category { name: "Business", icon: "briefcase" },
    Category { name: "Health", icon: "heartbeat" },
    Category { name: "Environment", icon: "leaf" },
    Category { name: "Philosophy", icon: "brain" },
    Category { name: "Culture", icon: "globe-americas" },
    Category { name: "Politics", icon: "balance-scale" },
    Category { name: "Economy", icon: "chart-line" },
    Category { name: "Education", icon: "graduation-cap" },
];

static SUBCATEGORIES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: [(&'static str, &'static [&'static str]); 16] = [
        ("Science", &[
            "Physics", "Chemistry", "Biology", "Mathematics", "Astronomy",
            "Medicine", "Environmental Science", "Computer Science",
        ]),
        ("History", &[
            "Ancient History", "Medieval History", "Modern History", "World War I",
            "World War II", "American History", "European History", "Asian History",
        ]),
        ("Geography", &[
            "Countries", "Cities", "Mountains", "Rivers", "Oceans",
            "Continents", "Climate", "Natural Disasters",
        ]),
        ("Technology", &[
            "Artificial Intelligence", "Internet", "Mobile Technology", "Space Technology",
            "Transportation", "Energy", "Robotics", "Biotechnology",
        ]),
        ("Arts", &[
            "Painting", "Sculpture", "Architecture", "Photography", "Cinema",
            "Theater", "Dance", "Design",
        ]),
        ("Sports", &[
            "Football", "Basketball", "Tennis", "Swimming", "Athletics",
            "Winter Sports", "Combat Sports", "Motor Sports",
        ]),
        ("Literature", &[
            "Fiction", "Poetry", "Drama", "Non-fiction", "Science Fiction",
            "Fantasy", "Mystery", "Biography",
        ]),
        ("Music", &[
            "Classical Music", "Jazz", "Rock", "Pop", "Electronic Music",
            "Folk Music", "Opera", "World Music",
        ]),
        ("Business", &[
            "Management", "Marketing", "Finance", "Entrepreneurship", "Economics",
            "Leadership", "Strategy", "International Business",
        ]),
        ("Health", &[
            "Nutrition", "Mental Health", "Exercise", "Medical Research", "Public Health",
            "Healthcare Systems", "Diseases", "Wellness",
        ]),
        ("Environment", &[
            "Climate Change", "Conservation", "Renewable Energy", "Pollution", "Biodiversity",
            "Sustainability", "Natural Resources", "Ecology",
        ]),
        ("Philosophy", &[
            "Ethics", "Logic", "Metaphysics", "Political Philosophy", "Philosophy of Mind",
            "Ancient Philosophy", "Modern Philosophy", "Eastern Philosophy",
        ]),
        ("Culture", &[
            "Traditions", "Festivals", "Languages", "Customs", "Religion",
            "Social Movements", "Cultural Heritage", "Anthropology",
        ]),
        ("Politics", &[
            "Government Systems", "International Relations", "Political Theory", "Elections",
            "Public Policy", "Diplomacy", "Political History", "Civil Rights",
        ]),
        ("Economy", &[
            "Economic Theory", "Global Economy", "Trade", "Banking", "Stock Market",
            "Economic History", "Development Economics", "Monetary Policy",
        ]),
        ("Education", &[
            "Teaching Methods", "Educational Psychology", "Curriculum", "Higher Education",
            "Online Learning", "Educational Technology", "Language Learning", "Academic Research",
        ]),
    ];
    entries.into_iter().collect()
});

/// Configured subcategories of `category`, or `["General"]` when unknown.
pub fn subcategories_for(category: &str) -> Vec<String> {
    match SUBCATEGORIES.get(category) {
        Some(subcategories) => subcategories.iter().map(|s| s.to_string()).collect(),
        None => vec![DEFAULT_SUBCATEGORY.to_string()],
    }
}

pub fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}

/// `(value, label)` pairs in display order.
pub fn english_levels() -> Vec<(&'static str, &'static str)> {
    EnglishLevel::ALL
        .iter()
        .map(|level| (level.as_str(), level.label()))
        .collect()
}
