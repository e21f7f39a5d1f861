//! Section 2 calculator: importance scores, current-vs-ideal satisfaction,
//! and gap analysis with urgency tiers.

use crate::catalog::Category;
use crate::scoring::num::mean;
use crate::types::response::{Dimension, Responses};
use crate::types::results::{
    EnvironmentCategoryScores, EnvironmentResults, EnvironmentSubScores, EnvironmentTiers, GapItem,
};

/// Internal-scale thresholds for the gap list and the urgency tiers.
const HIGH_IMPORTANCE: f64 = 3.0;
const URGENT_GAP: f64 = 1.5;

pub fn calculate(categories: &[Category], responses: &Responses) -> EnvironmentResults {
    let mut results = Vec::with_capacity(categories.len());

    for category in categories {
        let mut cat_importance = Vec::new();
        let mut cat_current = Vec::new();
        let mut subcategories = Vec::with_capacity(category.subcategories.len());

        for subcategory in &category.subcategories {
            let mut sub_importance = Vec::new();
            for statement in &subcategory.statements {
                if let Some(value) = responses.rating(statement.id(), Dimension::Importance) {
                    sub_importance.push(f64::from(value));
                    cat_importance.push(f64::from(value));
                }
            }

            // One current-vs-ideal statement per subcategory, if defined.
            let current = subcategory
                .current
                .as_ref()
                .and_then(|statement| responses.rating(statement.id(), Dimension::Current))
                .map(f64::from);
            if let Some(value) = current {
                cat_current.push(value);
            }

            let importance = mean(&sub_importance);
            subcategories.push(EnvironmentSubScores {
                id: subcategory.id,
                name: subcategory.name,
                subtitle: subcategory.subtitle,
                importance,
                current,
                // Unclamped: current above importance yields a negative gap.
                gap: current.map(|value| importance - value),
            });
        }

        let importance = mean(&cat_importance);
        let current = if cat_current.is_empty() {
            None
        } else {
            Some(mean(&cat_current))
        };
        results.push(EnvironmentCategoryScores {
            id: category.id,
            name: category.name,
            description: category.description,
            color: category.color,
            subcategories,
            importance,
            current,
            gap: current.map(|value| importance - value),
        });
    }

    let mut ranked = results.clone();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));

    let mut gaps: Vec<EnvironmentCategoryScores> = results
        .iter()
        .filter(|category| match category.gap {
            Some(gap) => category.importance >= HIGH_IMPORTANCE && gap >= URGENT_GAP,
            None => false,
        })
        .cloned()
        .collect();
    gaps.sort_by(|a, b| {
        b.gap
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&a.gap.unwrap_or(f64::NEG_INFINITY))
    });

    let tiers = classify_tiers(&results);

    EnvironmentResults {
        categories: results,
        ranked,
        gaps,
        tiers,
    }
}

fn classify_tiers(categories: &[EnvironmentCategoryScores]) -> EnvironmentTiers {
    let mut tiers = EnvironmentTiers::default();
    for category in categories {
        for sub in &category.subcategories {
            let item = GapItem {
                category: category.name,
                subcategory: sub.name,
                importance: sub.importance,
                current: sub.current,
                gap: sub.gap,
                color: category.color,
            };
            if sub.importance >= HIGH_IMPORTANCE {
                if sub.gap.is_some_and(|gap| gap >= URGENT_GAP) {
                    tiers.urgent_gaps.push(item);
                } else if sub.current.is_some() && sub.gap.map_or(true, |gap| gap < 1.0) {
                    tiers.working_well.push(item);
                }
            } else if sub.importance <= 1.0 {
                tiers.low_priority.push(item);
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

    fn team_structure(results: &EnvironmentResults) -> &EnvironmentSubScores {
        &results.categories[0].subcategories[0]
    }

    #[test]
    fn subcategory_gap_is_importance_minus_current() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 3);
        rate(&mut responses, "s2_team_struct_2", Dimension::Importance, 4);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 1);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let sub = team_structure(&results);
        assert_eq!(sub.importance, 3.5);
        assert_eq!(sub.current, Some(1.0));
        assert_eq!(sub.gap, Some(2.5));
        assert!(results
            .tiers
            .urgent_gaps
            .iter()
            .any(|item| item.subcategory == "Team Structure"));
    }

    #[test]
    fn gap_without_an_answered_current_is_none() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 4);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let sub = team_structure(&results);
        assert_eq!(sub.current, None);
        assert_eq!(sub.gap, None);
    }

    #[test]
    fn negative_gap_is_kept_raw_and_excluded_from_gap_list() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 1);
        rate(&mut responses, "s2_team_struct_2", Dimension::Importance, 1);
        rate(&mut responses, "s2_team_struct_3", Dimension::Importance, 1);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 4);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let sub = team_structure(&results);
        assert_eq!(sub.gap, Some(-3.0));
        assert!(results.gaps.is_empty());
    }

    #[test]
    fn category_current_pools_answered_subcategory_currents() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        // Team Dynamics has three subcategories; only two define a current
        // statement, and only those answered contribute.
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 1);
        rate(&mut responses, "s2_team_collab_c", Dimension::Current, 3);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let team = &results.categories[0];
        assert_eq!(team.current, Some(2.0));
        assert_eq!(team.gap, Some(2.0));
    }

    #[test]
    fn gap_list_requires_high_importance_and_wide_gap() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        // Team Dynamics: importance 4, current 1 -> gap 3, qualifies.
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 1);
        // Autonomy: importance 4, current 3 -> gap 1, below threshold.
        rate(&mut responses, "s2_auto_approach_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_auto_approach_c", Dimension::Current, 3);
        // Communication: importance 2 (low), current 0 -> gap 2, still out.
        rate(&mut responses, "s2_comm_mode_1", Dimension::Importance, 2);
        rate(&mut responses, "s2_comm_mode_c", Dimension::Current, 0);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let ids: Vec<_> = results.gaps.iter().map(|category| category.id).collect();
        assert_eq!(ids, vec!["s2_team"]);
    }

    #[test]
    fn gap_list_is_sorted_by_gap_descending() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 2);
        rate(&mut responses, "s2_auto_approach_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_auto_approach_c", Dimension::Current, 0);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        let ids: Vec<_> = results.gaps.iter().map(|category| category.id).collect();
        assert_eq!(ids, vec!["s2_autonomy", "s2_team"]);
    }

    #[test]
    fn tiers_split_working_well_and_low_priority() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        // Important and satisfied: gap below 1.
        rate(&mut responses, "s2_team_struct_1", Dimension::Importance, 4);
        rate(&mut responses, "s2_team_struct_c", Dimension::Current, 4);
        // Unimportant subcategory.
        rate(&mut responses, "s2_team_culture_1", Dimension::Importance, 1);
        rate(&mut responses, "s2_team_culture_2", Dimension::Importance, 0);

        let results = calculate(catalog.categories(SectionId::Environment), &responses);
        assert!(results
            .tiers
            .working_well
            .iter()
            .any(|item| item.subcategory == "Team Structure"));
        assert!(results
            .tiers
            .low_priority
            .iter()
            .any(|item| item.subcategory == "Team Culture"));
        assert!(results.tiers.urgent_gaps.is_empty());
    }
}
