// src/catalog.rs
//! Static scheme catalog and the Schemes tab view state.
//!
//! The catalog is seed data compiled into the binary; records never change
//! while the process runs, so views hand out `&'static` references.

use crate::models::SchemeRecord;
use std::collections::HashSet;
use std::fmt;

lazy_static::lazy_static! {
    static ref SCHEMES: Vec<SchemeRecord> = seed_schemes();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Housing,
    Education,
    Farming,
    WomenAndChild,
    Health,
    Employment,
    Pension,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::All,
        Category::Housing,
        Category::Education,
        Category::Farming,
        Category::WomenAndChild,
        Category::Health,
        Category::Employment,
        Category::Pension,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Housing => "Housing",
            Category::Education => "Education",
            Category::Farming => "Farming",
            Category::WomenAndChild => "Women & Child",
            Category::Health => "Health",
            Category::Employment => "Employment",
            Category::Pension => "Pension",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    fn matches(&self, record: &SchemeRecord) -> bool {
        match self {
            Category::All => true,
            other => record.category == other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every record in catalog order.
pub fn all_schemes() -> &'static [SchemeRecord] {
    &SCHEMES
}

pub fn find_scheme(id: u32) -> Option<&'static SchemeRecord> {
    SCHEMES.iter().find(|s| s.id == id)
}

/// Records in `category` whose title contains `search`, ignoring case.
/// Catalog order is preserved; an empty search matches every title.
pub fn filter_schemes(category: Category, search: &str) -> Vec<&'static SchemeRecord> {
    let needle = search.to_lowercase();
    SCHEMES
        .iter()
        .filter(|s| category.matches(s))
        .filter(|s| s.title.to_lowercase().contains(&needle))
        .collect()
}

/// Filter, search text and per-record detail toggles for the Schemes tab.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    category: Category,
    search: String,
    expanded: HashSet<u32>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_filter(&mut self, category: Category) {
        self.category = category;
    }

    /// Applies a category submitted as text. Unknown names fall back to All.
    pub fn set_filter_str(&mut self, value: &str) {
        let category = Category::parse(value).unwrap_or_else(|| {
            tracing::warn!(category = %value, "unknown scheme category, showing all");
            Category::All
        });
        self.set_filter(category);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Flips the detail panel of one record; other records keep their state.
    pub fn toggle_details(&mut self, id: u32) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }

    pub fn visible(&self) -> Vec<&'static SchemeRecord> {
        filter_schemes(self.category, &self.search)
    }
}

fn scheme(
    id: u32,
    title: &str,
    description: &str,
    publish_date: &str,
    category: Category,
    eligibility: &str,
    documents: &[&str],
    apply_link: &str,
) -> SchemeRecord {
    SchemeRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        publish_date: publish_date.to_string(),
        category: category.as_str().to_string(),
        eligibility: eligibility.to_string(),
        documents: documents.iter().map(|d| d.to_string()).collect(),
        apply_link: apply_link.to_string(),
    }
}

fn seed_schemes() -> Vec<SchemeRecord> {
    vec![
        scheme(
            1,
            "Pradhan Mantri Awas Yojana-Urban 2.0",
            "Ambitious housing initiative by the Government of India, aimed at ensuring affordable housing for all in urban areas.",
            "03/04/2025",
            Category::Housing,
            "Low-income groups, EWS, and middle-income groups living in urban areas.",
            &["Aadhaar Card", "Income Certificate", "Proof of Residence"],
            "https://pmaymis.gov.in/",
        ),
        scheme(
            2,
            "National Scholarship Portal",
            "Centralized portal for students to apply for scholarships provided by various government departments and ministries.",
            "15/06/2024",
            Category::Education,
            "Students from minority, SC/ST, OBC, and economically weaker backgrounds.",
            &["Aadhaar Card", "Income Certificate", "Previous Marksheet", "Bank Account Details"],
            "https://scholarships.gov.in/",
        ),
        scheme(
            3,
            "Pradhan Mantri Fasal Bima Yojana",
            "Crop Insurance Scheme providing financial support to farmers in case of crop failure due to natural calamities, pests, and diseases.",
            "20/09/2024",
            Category::Farming,
            "All farmers growing notified crops in notified areas.",
            &["Aadhaar Card", "Land Ownership Papers", "Bank Account Details"],
            "https://pmfby.gov.in/",
        ),
        scheme(
            4,
            "Women & Child Welfare Program",
            "Schemes for nutrition, education, and safety of women and children across India.",
            "12/08/2024",
            Category::WomenAndChild,
            "Women and children from economically weaker sections.",
            &["Aadhaar Card", "Birth Certificate", "Income Certificate"],
            "https://wcd.nic.in/",
        ),
        scheme(
            5,
            "Ayushman Bharat - Pradhan Mantri Jan Arogya Yojana",
            "World’s largest health assurance scheme providing free treatment up to ₹5 lakh per family per year.",
            "01/01/2024",
            Category::Health,
            "Economically weaker families listed under SECC database.",
            &["Aadhaar Card", "Ration Card"],
            "https://pmjay.gov.in/",
        ),
        scheme(
            6,
            "Pradhan Mantri Kaushal Vikas Yojana",
            "Flagship scheme for skill development to train youth in industry-relevant skills.",
            "10/07/2024",
            Category::Employment,
            "Unemployed youth, school/college dropouts.",
            &["Aadhaar Card", "Educational Certificate"],
            "https://www.pmkvyofficial.org/",
        ),
        scheme(
            7,
            "Atal Pension Yojana",
            "Government-backed pension scheme for workers in the unorganized sector.",
            "25/04/2024",
            Category::Pension,
            "All Indian citizens between 18-40 years with a savings account.",
            &["Aadhaar Card", "Bank Account Details"],
            "https://npscra.nsdl.co.in/scheme-details.php",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&SchemeRecord]) -> Vec<u32> {
        records.iter().map(|s| s.id).collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for s in all_schemes() {
            assert!(seen.insert(s.id), "duplicate id {}", s.id);
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn all_with_empty_search_returns_catalog_in_order() {
        assert_eq!(ids(&filter_schemes(Category::All, "")), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn farming_filter_yields_fasal_bima_only() {
        let result = filter_schemes(Category::Farming, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Pradhan Mantri Fasal Bima Yojana");
    }

    #[test]
    fn search_is_case_insensitive_substring_of_title() {
        assert_eq!(ids(&filter_schemes(Category::All, "PRADHAN mantri")), vec![1, 3, 5, 6]);
        // description text is not searched
        assert!(filter_schemes(Category::All, "crop").is_empty());
    }

    #[test]
    fn category_and_search_must_both_match() {
        assert_eq!(ids(&filter_schemes(Category::Health, "yojana")), vec![5]);
        assert!(filter_schemes(Category::Pension, "scholarship").is_empty());
    }

    #[test]
    fn filtered_view_matches_predicates_for_every_category() {
        for category in Category::ALL {
            for search in ["", "a", "yojana", "zzz"] {
                let expected: Vec<u32> = all_schemes()
                    .iter()
                    .filter(|s| category == Category::All || s.category == category.as_str())
                    .filter(|s| s.title.to_lowercase().contains(search))
                    .map(|s| s.id)
                    .collect();
                assert_eq!(ids(&filter_schemes(category, search)), expected);
            }
        }
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let mut view = CatalogView::new();
        view.set_filter_str("Farming");
        assert_eq!(view.category(), Category::Farming);
        view.set_filter_str("Space Travel");
        assert_eq!(view.category(), Category::All);
    }

    #[test]
    fn detail_toggles_are_independent() {
        let mut view = CatalogView::new();
        view.toggle_details(2);
        view.toggle_details(5);
        assert!(view.is_expanded(2));
        assert!(view.is_expanded(5));

        view.toggle_details(2);
        assert!(!view.is_expanded(2));
        assert!(view.is_expanded(5));
    }

    #[test]
    fn view_applies_filter_and_search() {
        let mut view = CatalogView::new();
        view.set_filter(Category::Education);
        view.set_search("portal");
        assert_eq!(ids(&view.visible()), vec![2]);
    }
}
