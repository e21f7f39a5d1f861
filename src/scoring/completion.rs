//! Completion counters and catalog-order navigation over `(statement,
//! dimension)` pairs.

use crate::catalog::{Catalog, Question};
use crate::types::response::{Responses, SectionId};
use crate::types::results::Completion;

pub fn section_completion(
    catalog: &Catalog,
    section: SectionId,
    responses: &Responses,
) -> Completion {
    tally(catalog.questions(section).iter(), responses)
}

pub fn category_completion(
    catalog: &Catalog,
    section: SectionId,
    category_id: &str,
    responses: &Responses,
) -> Completion {
    tally(
        catalog
            .questions(section)
            .iter()
            .filter(|question| question.category_id == category_id),
        responses,
    )
}

/// Sums answered/total across all three sections before dividing, so sections
/// with more inputs weigh proportionally more than in an average of
/// percentages.
pub fn overall_completion(catalog: &Catalog, responses: &Responses) -> Completion {
    let mut answered = 0;
    let mut total = 0;
    for section in SectionId::ALL {
        let completion = section_completion(catalog, section, responses);
        answered += completion.answered;
        total += completion.total;
    }
    Completion {
        answered,
        total,
        percentage: percentage(answered, total),
    }
}

/// Index (into the section's flattened question list) of the first question
/// in the category with any unanswered legal dimension. Falls back to the
/// category's first question when everything is answered; `None` only when
/// the category id does not exist in the section.
pub fn first_unanswered_in_category(
    catalog: &Catalog,
    section: SectionId,
    category_id: &str,
    responses: &Responses,
) -> Option<usize> {
    let questions = catalog.questions(section);
    for (index, question) in questions.iter().enumerate() {
        if question.category_id != category_id {
            continue;
        }
        if question
            .dimensions
            .iter()
            .any(|dimension| !responses.is_answered(question.id, *dimension))
        {
            return Some(index);
        }
    }
    questions
        .iter()
        .position(|question| question.category_id == category_id)
}

fn tally<'a>(questions: impl Iterator<Item = &'a Question>, responses: &Responses) -> Completion {
    let mut answered = 0;
    let mut total = 0;
    for question in questions {
        for dimension in &question.dimensions {
            total += 1;
            if responses.is_answered(question.id, *dimension) {
                answered += 1;
            }
        }
    }
    Completion {
        answered,
        total,
        percentage: percentage(answered, total),
    }
}

fn percentage(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (answered as f64 / total as f64 * 100.0).round() as u8
}
