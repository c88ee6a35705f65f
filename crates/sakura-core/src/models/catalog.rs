//! Static option tables and label resolution.
//!
//! Every screen that shows a label for a stored tag goes through this module,
//! so there is exactly one list of date types, foods and after-date
//! activities. Unknown tags resolve to themselves.

use std::fmt;

/// A selectable tag with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// The sub-options offered for one date type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifics {
    pub title: &'static str,
    pub options: &'static [Choice],
}

/// A date category and its scoped sub-options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub specifics: Specifics,
}

impl DateTypeOption {
    /// Looks up one of this date type's sub-options.
    pub fn specific(&self, value: &str) -> Option<&'static Choice> {
        self.specifics.options.iter().find(|o| o.value == value)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value)
    }
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub static DATE_TYPE_OPTIONS: &[DateTypeOption] = &[
    DateTypeOption {
        value: "coffee",
        label: "Coffee Date",
        specifics: Specifics {
            title: "Coffee Preference",
            options: &[
                choice("latte", "Latte"),
                choice("cappuccino", "Cappuccino"),
                choice("americano", "Americano"),
                choice("espresso", "Espresso"),
                choice("matcha", "Matcha"),
                choice("mocha", "Mocha"),
                choice("tea", "Tea"),
                choice("hot-chocolate", "Hot Chocolate"),
            ],
        },
    },
    DateTypeOption {
        value: "dinner",
        label: "Dinner Date",
        specifics: Specifics {
            title: "Dinner Atmosphere",
            options: &[
                choice("fancy", "Fancy Restaurant"),
                choice("casual", "Casual Dining"),
                choice("intimate", "Intimate Bistro"),
                choice("outdoor", "Outdoor Dining"),
                choice("rooftop", "Rooftop Restaurant"),
                choice("home-cooked", "Home Cooked Meal"),
            ],
        },
    },
    DateTypeOption {
        value: "movie",
        label: "Movie Date",
        specifics: Specifics {
            title: "Movie Genre",
            options: &[
                choice("action", "Action/Adventure"),
                choice("comedy", "Comedy"),
                choice("romance", "Romance"),
                choice("horror", "Horror"),
                choice("sci-fi", "Sci-Fi/Fantasy"),
                choice("drama", "Drama"),
                choice("documentary", "Documentary"),
                choice("animated", "Animated"),
            ],
        },
    },
    DateTypeOption {
        value: "concert",
        label: "Concert/Show",
        specifics: Specifics {
            title: "Music Preference",
            options: &[
                choice("rock", "Rock"),
                choice("pop", "Pop"),
                choice("jazz", "Jazz"),
                choice("classical", "Classical"),
                choice("electronic", "Electronic/DJ"),
                choice("indie", "Indie"),
                choice("hip-hop", "Hip-Hop/R&B"),
                choice("country", "Country"),
            ],
        },
    },
    DateTypeOption {
        value: "outdoor",
        label: "Outdoor Activity",
        specifics: Specifics {
            title: "Activity Type",
            options: &[
                choice("picnic", "Picnic in the Park"),
                choice("biking", "Biking"),
                choice("garden", "Botanical Garden"),
                choice("museum", "Museum Visit"),
                choice("amusement", "Amusement Park"),
            ],
        },
    },
];

pub static FOOD_OPTIONS: &[Choice] = &[
    choice("italian", "Italian"),
    choice("japanese", "Japanese"),
    choice("mexican", "Mexican"),
    choice("indian", "Indian"),
    choice("chinese", "Chinese"),
    choice("american", "American"),
    choice("thai", "Thai"),
    choice("vegetarian", "Vegetarian"),
];

/// Activities offered after the date. This is the union of every activity
/// a stored record may reference.
pub static AFTER_DATE_ACTIVITIES: &[Choice] = &[
    choice("walk", "A nice walk"),
    choice("dessert", "Dessert somewhere"),
    choice("drinks", "Drinks at a bar"),
    choice("dancing", "Dancing"),
    choice("home", "Head home"),
];

/// Finds a date type by its tag.
pub fn find_date_type(value: &str) -> Option<&'static DateTypeOption> {
    DATE_TYPE_OPTIONS.iter().find(|t| t.value == value)
}

fn find_choice(choices: &'static [Choice], value: &str) -> Option<&'static Choice> {
    choices.iter().find(|c| c.value == value)
}

/// Returns true if `specific` is one of the sub-options of `date_type`.
pub fn is_valid_specific(date_type: &str, specific: &str) -> bool {
    find_date_type(date_type).is_some_and(|t| t.specific(specific).is_some())
}

pub fn date_type_label(value: &str) -> &str {
    find_date_type(value).map_or(value, |t| t.label)
}

/// Resolves a sub-option label. Both tags are needed because sub-option
/// values are only unique within their owning date type.
pub fn date_type_specific_label<'a>(date_type: &str, specific: &'a str) -> &'a str {
    find_date_type(date_type)
        .and_then(|t| t.specific(specific))
        .map_or(specific, |c| c.label)
}

pub fn food_label(value: &str) -> &str {
    find_choice(FOOD_OPTIONS, value).map_or(value, |c| c.label)
}

pub fn activity_label(value: &str) -> &str {
    find_choice(AFTER_DATE_ACTIVITIES, value).map_or(value, |c| c.label)
}

/// Returns true if `value` is a known food tag.
pub fn is_known_food(value: &str) -> bool {
    find_choice(FOOD_OPTIONS, value).is_some()
}

/// Returns true if `value` is a known after-date activity tag.
pub fn is_known_activity(value: &str) -> bool {
    find_choice(AFTER_DATE_ACTIVITIES, value).is_some()
}
