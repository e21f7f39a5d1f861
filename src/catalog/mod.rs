pub mod accommodations;
pub mod environment;
pub mod preferences;

use crate::types::response::{Dimension, SectionId};

/// A single ratable prompt. The variant fixes which dimensions are legal, so
/// each section's calculator can match exhaustively instead of probing for
/// optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Rated on exactly one scale dimension (S1 interest/confidence, S3 need).
    Scale {
        id: &'static str,
        text: &'static str,
        dimension: Dimension,
    },
    /// S2 statement collected on both importance and current scales.
    Dual {
        id: &'static str,
        text: &'static str,
    },
    /// S2 per-subcategory "current vs ideal" statement.
    Current {
        id: &'static str,
        text: &'static str,
    },
    /// S3 per-subcategory non-negotiable toggle.
    Toggle {
        id: &'static str,
        text: &'static str,
    },
}

impl Statement {
    pub fn id(&self) -> &'static str {
        match self {
            Statement::Scale { id, .. }
            | Statement::Dual { id, .. }
            | Statement::Current { id, .. }
            | Statement::Toggle { id, .. } => id,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Statement::Scale { text, .. }
            | Statement::Dual { text, .. }
            | Statement::Current { text, .. }
            | Statement::Toggle { text, .. } => text,
        }
    }

    pub fn dimensions(&self) -> Vec<Dimension> {
        match self {
            Statement::Scale { dimension, .. } => vec![*dimension],
            Statement::Dual { .. } => vec![Dimension::Importance, Dimension::Current],
            Statement::Current { .. } => vec![Dimension::Current],
            Statement::Toggle { .. } => vec![Dimension::Toggle],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subcategory {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub statements: Vec<Statement>,
    pub current: Option<Statement>,
    pub non_negotiable: Option<Statement>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub subcategories: Vec<Subcategory>,
}

/// One entry in a section's flattened question list, in catalog order.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub category_id: &'static str,
    pub category_name: &'static str,
    pub subcategory_name: &'static str,
    pub text: &'static str,
    pub dimensions: Vec<Dimension>,
}

/// The full static question catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    preferences: Vec<Category>,
    environment: Vec<Category>,
    accommodations: Vec<Category>,
    preferences_questions: Vec<Question>,
    environment_questions: Vec<Question>,
    accommodations_questions: Vec<Question>,
}

impl Catalog {
    pub fn build() -> Self {
        let preferences = preferences::categories();
        let environment = environment::categories();
        let accommodations = accommodations::categories();
        let preferences_questions = flatten(&preferences);
        let environment_questions = flatten(&environment);
        let accommodations_questions = flatten(&accommodations);
        Self {
            preferences,
            environment,
            accommodations,
            preferences_questions,
            environment_questions,
            accommodations_questions,
        }
    }

    pub fn categories(&self, section: SectionId) -> &[Category] {
        match section {
            SectionId::Preferences => &self.preferences,
            SectionId::Environment => &self.environment,
            SectionId::Accommodations => &self.accommodations,
        }
    }

    pub fn questions(&self, section: SectionId) -> &[Question] {
        match section {
            SectionId::Preferences => &self.preferences_questions,
            SectionId::Environment => &self.environment_questions,
            SectionId::Accommodations => &self.accommodations_questions,
        }
    }

    pub fn question(&self, section: SectionId, id: &str) -> Option<&Question> {
        self.questions(section)
            .iter()
            .find(|question| question.id == id)
    }

    pub fn has_category(&self, section: SectionId, category_id: &str) -> bool {
        self.categories(section)
            .iter()
            .any(|category| category.id == category_id)
    }

    /// Total number of `(statement, dimension)` inputs across all sections.
    pub fn total_inputs(&self) -> usize {
        SectionId::ALL
            .iter()
            .flat_map(|section| self.questions(*section))
            .map(|question| question.dimensions.len())
            .sum()
    }
}

/// Flattens categories into catalog order: the subcategory's rated statements
/// first, then its current statement, then its toggle.
fn flatten(categories: &[Category]) -> Vec<Question> {
    let mut questions = Vec::new();
    for category in categories {
        for subcategory in &category.subcategories {
            for statement in &subcategory.statements {
                questions.push(to_question(category, subcategory, statement));
            }
            if let Some(current) = &subcategory.current {
                questions.push(to_question(category, subcategory, current));
            }
            if let Some(toggle) = &subcategory.non_negotiable {
                questions.push(to_question(category, subcategory, toggle));
            }
        }
    }
    questions
}

fn to_question(category: &Category, subcategory: &Subcategory, statement: &Statement) -> Question {
    Question {
        id: statement.id(),
        category_id: category.id,
        category_name: category.name,
        subcategory_name: subcategory.name,
        text: statement.text(),
        dimensions: statement.dimensions(),
    }
}

pub(crate) fn interest(id: &'static str, text: &'static str) -> Statement {
    Statement::Scale {
        id,
        text,
        dimension: Dimension::Interest,
    }
}

pub(crate) fn confidence(id: &'static str, text: &'static str) -> Statement {
    Statement::Scale {
        id,
        text,
        dimension: Dimension::Confidence,
    }
}

pub(crate) fn need(id: &'static str, text: &'static str) -> Statement {
    Statement::Scale {
        id,
        text,
        dimension: Dimension::Need,
    }
}

pub(crate) fn dual(id: &'static str, text: &'static str) -> Statement {
    Statement::Dual { id, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_all_three_sections() {
        let catalog = Catalog::build();
        assert_eq!(catalog.categories(SectionId::Preferences).len(), 6);
        assert_eq!(catalog.categories(SectionId::Environment).len(), 9);
        assert_eq!(catalog.categories(SectionId::Accommodations).len(), 6);
    }

    #[test]
    fn statement_ids_are_unique_across_sections() {
        let catalog = Catalog::build();
        let mut seen = std::collections::HashSet::new();
        for section in SectionId::ALL {
            for question in catalog.questions(section) {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
            }
        }
    }

    #[test]
    fn flattened_order_places_current_and_toggle_after_rated_statements() {
        let catalog = Catalog::build();
        let questions = catalog.questions(SectionId::Environment);
        let current_idx = questions
            .iter()
            .position(|question| question.id == "s2_team_struct_c")
            .expect("current statement should be present");
        // Immediately after the three rated statements of its subcategory.
        assert_eq!(questions[current_idx - 1].id, "s2_team_struct_3");
        assert_eq!(questions[current_idx].dimensions, vec![Dimension::Current]);
    }

    #[test]
    fn dual_statements_count_two_legal_dimensions() {
        let catalog = Catalog::build();
        let question = catalog
            .question(SectionId::Environment, "s2_team_struct_1")
            .expect("statement should exist");
        assert_eq!(
            question.dimensions,
            vec![Dimension::Importance, Dimension::Current]
        );
    }

    #[test]
    fn preferences_statements_carry_exactly_one_dimension() {
        let catalog = Catalog::build();
        for question in catalog.questions(SectionId::Preferences) {
            assert_eq!(question.dimensions.len(), 1, "{}", question.id);
        }
    }
}
