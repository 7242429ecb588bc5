//! Part categories
//!
//! The closed set of classification buckets a part line can land in. Every
//! category carries a fixed keyword; a line belongs to a category when it
//! contains that keyword as a substring. The table is compile-time only,
//! there is no runtime registration.

/// Classification bucket for a part line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Engine,
    Fuselage,
    Cabin,
    Wings,
    Armor,
    Weapon,
}

/// All categories, weapon last.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Engine,
    Category::Fuselage,
    Category::Cabin,
    Category::Wings,
    Category::Armor,
    Category::Weapon,
];

/// Categories holding exactly one part (everything except `Weapon`).
///
/// Classification probes these in table order. When a line contains more
/// than one singular keyword, which of them wins is an unspecified detail
/// of the current probe order -- callers must not rely on it.
pub const SINGULAR_CATEGORIES: &[Category] = &[
    Category::Engine,
    Category::Fuselage,
    Category::Cabin,
    Category::Wings,
    Category::Armor,
];

impl Category {
    /// Keyword whose substring presence assigns a line to this category.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Fuselage => "fuselage",
            Self::Cabin => "cabin",
            Self::Wings => "wings",
            Self::Armor => "armor",
            Self::Weapon => "weapon",
        }
    }

    /// Display label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Engine => "Engine",
            Self::Fuselage => "Fuselage",
            Self::Cabin => "Cabin",
            Self::Wings => "Wings",
            Self::Armor => "Armor",
            Self::Weapon => "Weapons",
        }
    }

    /// Substring keyword match against a part line.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches_substring() {
        assert!(Category::Engine.matches("big engine"));
        assert!(Category::Weapon.matches("laser weapon mk2"));
        assert!(!Category::Cabin.matches("wide wings"));
    }

    #[test]
    fn test_empty_line_matches_nothing() {
        for cat in ALL_CATEGORIES {
            assert!(!cat.matches(""));
        }
    }

    #[test]
    fn test_singular_excludes_weapon() {
        assert_eq!(SINGULAR_CATEGORIES.len(), 5);
        assert!(!SINGULAR_CATEGORIES.contains(&Category::Weapon));
    }

    #[test]
    fn test_label_per_category() {
        assert_eq!(Category::Engine.label(), "Engine");
        assert_eq!(Category::Weapon.label(), "Weapons");
    }
}
