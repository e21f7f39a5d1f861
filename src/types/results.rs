//! Derived score records. Everything here is computed fresh from the response
//! map on each scoring call and lives only as long as a single render.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    pub percentage: u8,
}

// ---- Section 1: preferences (interest x confidence) ----

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceSubScores {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub interest: f64,
    pub confidence: f64,
    pub combined: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceCategoryScores {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub subcategories: Vec<PreferenceSubScores>,
    pub interest: f64,
    pub confidence: f64,
    pub combined: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantItem {
    pub category: &'static str,
    pub subcategory: &'static str,
    pub interest: f64,
    pub confidence: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Quadrants {
    pub strongest: Vec<QuadrantItem>,
    pub high_interest: Vec<QuadrantItem>,
    pub high_confidence: Vec<QuadrantItem>,
    pub low_both: Vec<QuadrantItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResults {
    pub categories: Vec<PreferenceCategoryScores>,
    pub ranked: Vec<PreferenceCategoryScores>,
    pub quadrants: Quadrants,
}

// ---- Section 2: environment (importance + current/gap) ----

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentSubScores {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub importance: f64,
    pub current: Option<f64>,
    pub gap: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentCategoryScores {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub subcategories: Vec<EnvironmentSubScores>,
    pub importance: f64,
    pub current: Option<f64>,
    pub gap: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapItem {
    pub category: &'static str,
    pub subcategory: &'static str,
    pub importance: f64,
    pub current: Option<f64>,
    pub gap: Option<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnvironmentTiers {
    pub urgent_gaps: Vec<GapItem>,
    pub working_well: Vec<GapItem>,
    pub low_priority: Vec<GapItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentResults {
    pub categories: Vec<EnvironmentCategoryScores>,
    pub ranked: Vec<EnvironmentCategoryScores>,
    /// Categories with an answered current, importance >= 3, and gap >= 1.5,
    /// sorted by gap descending.
    pub gaps: Vec<EnvironmentCategoryScores>,
    pub tiers: EnvironmentTiers,
}

// ---- Section 3: accommodations (need + non-negotiable) ----

#[derive(Debug, Clone, Serialize)]
pub struct StatementNeed {
    pub id: &'static str,
    pub text: &'static str,
    pub need: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccommodationSubScores {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub need_level: f64,
    pub non_negotiable: bool,
    pub statements: Vec<StatementNeed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccommodationCategoryScores {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub subcategories: Vec<AccommodationSubScores>,
    pub need_level: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityItem {
    pub category: &'static str,
    pub subcategory: &'static str,
    pub need_level: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccommodationTiers {
    pub non_negotiable: Vec<PriorityItem>,
    pub high_priority: Vec<PriorityItem>,
    pub helpful: Vec<PriorityItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccommodationsResults {
    pub categories: Vec<AccommodationCategoryScores>,
    pub ranked: Vec<AccommodationCategoryScores>,
    pub tiers: AccommodationTiers,
}

/// Combined report for the no-argument `results` command.
#[derive(Debug, Clone, Serialize)]
pub struct AllResults {
    pub completion: Completion,
    pub preferences: PreferencesResults,
    pub environment: EnvironmentResults,
    pub accommodations: AccommodationsResults,
}
