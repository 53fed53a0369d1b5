// ABOUTME: Keyword-based Veg/Non-Veg labelling of recipe ingredient lists
// ABOUTME: Matches meat, seafood, and animal by-product keywords against ingredient words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use nutriplan_core::models::FoodType;

/// Single-word keywords matched against individual ingredient words
const ANIMAL_WORDS: &[&str] = &[
    // Meats
    "chicken", "beef", "pork", "lamb", "mutton", "turkey", "duck", "rabbit", "venison", "bison",
    "goat", "quail", "pheasant", "kangaroo", "ostrich", "veal", "meat",
    // Seafood
    "fish", "shrimp", "prawn", "crab", "lobster", "oyster", "clam", "mussel", "scallop", "squid",
    "octopus", "anchovy", "anchovies", "sardine", "tuna", "salmon", "trout", "cod", "mackerel",
    "haddock", "eel", "caviar", "roe", "shark", "stingray", "snapper", "barramundi", "catfish",
    "halibut", "swordfish", "bass", "perch", "grouper", "flounder", "pollock", "herring",
    // Processed meats
    "bacon", "sausage", "pepperoni", "salami", "ham", "pastrami", "prosciutto", "mortadella",
    "bologna", "chorizo", "spam", "jerky", "pâté",
    // Animal by-products
    "egg", "gelatin", "lard", "tallow", "schmaltz", "rennet", "suet", "marrow",
    // Exotic meats and offal
    "alligator", "crocodile", "snake", "snail", "turtle", "insects", "silkworm", "grasshopper",
    "crickets", "scorpions", "tarantula", "haggis", "sweetbreads", "tripe", "offal", "liver",
    "kidney", "tongue", "brain", "gizzard",
];

/// Multi-word keywords matched as substrings of the lowercased ingredient
const ANIMAL_PHRASES: &[&str] = &[
    "wild boar",
    "frog legs",
    "hot dog",
    "cold cuts",
    "deli meat",
    "bone broth",
    "meat broth",
    "fish sauce",
    "oyster sauce",
    "clam juice",
    "shrimp paste",
    "anchovy paste",
    "worcestershire sauce",
    "head cheese",
    "blood pudding",
    "black pudding",
    "foie gras",
];

fn is_animal_word(word: &str) -> bool {
    ANIMAL_WORDS.contains(&word)
        || word
            .strip_suffix('s')
            .is_some_and(|singular| ANIMAL_WORDS.contains(&singular))
}

/// Label a recipe from its ingredient list
///
/// Returns `NonVeg` if any ingredient word is an animal keyword or any
/// ingredient contains a multi-word animal phrase; otherwise `Veg`.
#[must_use]
pub fn infer_food_type<S: AsRef<str>>(ingredient_parts: &[S]) -> FoodType {
    let non_veg = ingredient_parts.iter().any(|part| {
        let text = part.as_ref().to_lowercase();
        ANIMAL_PHRASES.iter().any(|phrase| text.contains(phrase))
            || text
                .split(|c: char| !c.is_alphanumeric() && c != '\'')
                .filter(|word| !word.is_empty())
                .any(is_animal_word)
    });
    if non_veg {
        FoodType::NonVeg
    } else {
        FoodType::Veg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vegetables_are_veg() {
        assert_eq!(
            infer_food_type(&["carrot", "vegetable stock", "olive oil"]),
            FoodType::Veg
        );
    }

    #[test]
    fn test_meat_word_is_non_veg() {
        assert_eq!(
            infer_food_type(&["boneless Chicken breast", "rice"]),
            FoodType::NonVeg
        );
    }

    #[test]
    fn test_plural_and_phrase_matches() {
        assert_eq!(infer_food_type(&["eggs", "flour"]), FoodType::NonVeg);
        assert_eq!(infer_food_type(&["Thai fish sauce"]), FoodType::NonVeg);
        assert_eq!(infer_food_type(&["Worcestershire Sauce"]), FoodType::NonVeg);
    }

    #[test]
    fn test_substring_of_word_does_not_match() {
        assert_eq!(infer_food_type(&["hamburger buns", "shallots"]), FoodType::Veg);
    }

    #[test]
    fn test_empty_list_is_veg() {
        let parts: [&str; 0] = [];
        assert_eq!(infer_food_type(&parts), FoodType::Veg);
    }
}
