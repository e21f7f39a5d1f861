//! Section 3 calculator: need levels plus non-negotiable flags, bucketed into
//! exclusive priority tiers.

use crate::catalog::Category;
use crate::scoring::num::mean;
use crate::types::response::{Dimension, Responses};
use crate::types::results::{
    AccommodationCategoryScores, AccommodationSubScores, AccommodationTiers,
    AccommodationsResults, PriorityItem, StatementNeed,
};

const HIGH_NEED: f64 = 3.0;
const HELPFUL_NEED: f64 = 1.5;

pub fn calculate(categories: &[Category], responses: &Responses) -> AccommodationsResults {
    let mut results = Vec::with_capacity(categories.len());

    for category in categories {
        let mut cat_needs = Vec::new();
        let mut subcategories = Vec::with_capacity(category.subcategories.len());

        for subcategory in &category.subcategories {
            let mut sub_needs = Vec::new();
            let mut statements = Vec::with_capacity(subcategory.statements.len());
            for statement in &subcategory.statements {
                let need = responses.rating(statement.id(), Dimension::Need);
                if let Some(value) = need {
                    sub_needs.push(f64::from(value));
                    cat_needs.push(f64::from(value));
                }
                statements.push(StatementNeed {
                    id: statement.id(),
                    text: statement.text(),
                    need,
                });
            }

            // The flag is set only by a literal 1; an answered-but-off toggle
            // (0) stays false.
            let non_negotiable = subcategory
                .non_negotiable
                .as_ref()
                .map_or(false, |statement| {
                    responses.rating(statement.id(), Dimension::Toggle) == Some(1)
                });

            subcategories.push(AccommodationSubScores {
                id: subcategory.id,
                name: subcategory.name,
                subtitle: subcategory.subtitle,
                need_level: mean(&sub_needs),
                non_negotiable,
                statements,
            });
        }

        results.push(AccommodationCategoryScores {
            id: category.id,
            name: category.name,
            description: category.description,
            color: category.color,
            subcategories,
            need_level: mean(&cat_needs),
        });
    }

    let mut ranked = results.clone();
    ranked.sort_by(|a, b| b.need_level.total_cmp(&a.need_level));

    let tiers = classify_tiers(&results);

    AccommodationsResults {
        categories: results,
        ranked,
        tiers,
    }
}

/// Exclusive tiers; the first matching rule wins.
fn classify_tiers(categories: &[AccommodationCategoryScores]) -> AccommodationTiers {
    let mut tiers = AccommodationTiers::default();
    for category in categories {
        for sub in &category.subcategories {
            let item = PriorityItem {
                category: category.name,
                subcategory: sub.name,
                need_level: sub.need_level,
                color: category.color,
            };
            if sub.non_negotiable && sub.need_level >= HIGH_NEED {
                tiers.non_negotiable.push(item);
            } else if sub.need_level >= HIGH_NEED {
                tiers.high_priority.push(item);
            } else if sub.need_level >= HELPFUL_NEED {
                tiers.helpful.push(item);
            }
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::response::{ResponseKey, SectionId};

    fn rate(responses: &mut Responses, id: &str, dimension: Dimension, value: u8) {
        responses.insert(ResponseKey::new(id, dimension), value);
    }

    fn meeting_support(results: &AccommodationsResults) -> &AccommodationSubScores {
        &results.categories[0].subcategories[0]
    }

    #[test]
    fn need_level_is_mean_of_answered_statements() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s3_comm_meet_1", Dimension::Need, 4);
        rate(&mut responses, "s3_comm_meet_2", Dimension::Need, 2);

        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        let sub = meeting_support(&results);
        assert_eq!(sub.need_level, 3.0);
        assert_eq!(sub.statements[0].need, Some(4));
        assert_eq!(sub.statements[2].need, None);
    }

    #[test]
    fn non_negotiable_requires_literal_one() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s3_comm_meet_1", Dimension::Need, 4);
        rate(&mut responses, "s3_comm_meet_2", Dimension::Need, 4);
        rate(&mut responses, "s3_comm_meet_3", Dimension::Need, 4);

        // Answered with 0: flag stays off.
        rate(&mut responses, "s3_comm_meet_nn", Dimension::Toggle, 0);
        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        assert!(!meeting_support(&results).non_negotiable);
        assert!(results
            .tiers
            .high_priority
            .iter()
            .any(|item| item.subcategory == "Meeting Support"));

        // A stray 2 must not count either.
        rate(&mut responses, "s3_comm_meet_nn", Dimension::Toggle, 2);
        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        assert!(!meeting_support(&results).non_negotiable);

        rate(&mut responses, "s3_comm_meet_nn", Dimension::Toggle, 1);
        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        assert!(meeting_support(&results).non_negotiable);
        assert!(results
            .tiers
            .non_negotiable
            .iter()
            .any(|item| item.subcategory == "Meeting Support"));
    }

    #[test]
    fn tiers_are_exclusive_and_thresholded() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        // Meeting Support: need 4 with the toggle on.
        rate(&mut responses, "s3_comm_meet_1", Dimension::Need, 4);
        rate(&mut responses, "s3_comm_meet_nn", Dimension::Toggle, 1);
        // Clarity & Preparation: need 2 -> helpful.
        rate(&mut responses, "s3_comm_clar_1", Dimension::Need, 2);
        // Communication Mode: need 1 -> below every tier.
        rate(&mut responses, "s3_comm_async_1", Dimension::Need, 1);

        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        let tiers = &results.tiers;
        assert!(tiers
            .non_negotiable
            .iter()
            .any(|item| item.subcategory == "Meeting Support"));
        assert!(!tiers
            .high_priority
            .iter()
            .any(|item| item.subcategory == "Meeting Support"));
        assert!(tiers
            .helpful
            .iter()
            .any(|item| item.subcategory == "Clarity & Preparation"));
        assert!(!tiers
            .helpful
            .iter()
            .any(|item| item.subcategory == "Communication Mode"));
    }

    #[test]
    fn toggle_on_with_low_need_is_not_non_negotiable_tier() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s3_comm_meet_1", Dimension::Need, 2);
        rate(&mut responses, "s3_comm_meet_nn", Dimension::Toggle, 1);

        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        let sub = meeting_support(&results);
        assert!(sub.non_negotiable);
        assert!(results.tiers.non_negotiable.is_empty());
        assert!(results
            .tiers
            .helpful
            .iter()
            .any(|item| item.subcategory == "Meeting Support"));
    }

    #[test]
    fn ranked_orders_categories_by_need_level() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s3_time_sched_1", Dimension::Need, 4);
        rate(&mut responses, "s3_comm_meet_1", Dimension::Need, 2);

        let results = calculate(catalog.categories(SectionId::Accommodations), &responses);
        assert_eq!(results.ranked[0].id, "s3_time");
        assert_eq!(results.ranked[1].id, "s3_communication");
    }
}
