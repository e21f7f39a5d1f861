//! Section 1 calculator: combined interest x confidence via geometric mean,
//! with quadrant classification at the subcategory level.

use crate::catalog::{Category, Statement};
use crate::scoring::num::{geometric_mean, mean};
use crate::types::response::{Dimension, Responses};
use crate::types::results::{
    PreferenceCategoryScores, PreferenceSubScores, PreferencesResults, QuadrantItem, Quadrants,
};

pub fn calculate(categories: &[Category], responses: &Responses) -> PreferencesResults {
    let mut results = Vec::with_capacity(categories.len());

    for category in categories {
        // Category scores pool raw statement values across all subcategories;
        // averaging the subcategory means would weight unequal-sized
        // subcategories incorrectly.
        let mut cat_interest = Vec::new();
        let mut cat_confidence = Vec::new();
        let mut subcategories = Vec::with_capacity(category.subcategories.len());

        for subcategory in &category.subcategories {
            let mut sub_interest = Vec::new();
            let mut sub_confidence = Vec::new();

            for statement in &subcategory.statements {
                let Statement::Scale { id, dimension, .. } = statement else {
                    continue;
                };
                let Some(value) = responses.rating(id, *dimension) else {
                    continue;
                };
                let value = f64::from(value);
                match dimension {
                    Dimension::Interest => {
                        sub_interest.push(value);
                        cat_interest.push(value);
                    }
                    Dimension::Confidence => {
                        sub_confidence.push(value);
                        cat_confidence.push(value);
                    }
                    _ => {}
                }
            }

            let interest = mean(&sub_interest);
            let confidence = mean(&sub_confidence);
            subcategories.push(PreferenceSubScores {
                id: subcategory.id,
                name: subcategory.name,
                subtitle: subcategory.subtitle,
                interest,
                confidence,
                combined: geometric_mean(interest, confidence),
            });
        }

        let interest = mean(&cat_interest);
        let confidence = mean(&cat_confidence);
        results.push(PreferenceCategoryScores {
            id: category.id,
            name: category.name,
            description: category.description,
            color: category.color,
            subcategories,
            interest,
            confidence,
            combined: geometric_mean(interest, confidence),
        });
    }

    let quadrants = classify_quadrants(&results);

    let mut ranked = results.clone();
    // Stable sort: ties keep catalog order.
    ranked.sort_by(|a, b| b.combined.total_cmp(&a.combined));

    PreferencesResults {
        categories: results,
        ranked,
        quadrants,
    }
}

fn classify_quadrants(categories: &[PreferenceCategoryScores]) -> Quadrants {
    let mut quadrants = Quadrants::default();
    for category in categories {
        for sub in &category.subcategories {
            let item = QuadrantItem {
                category: category.name,
                subcategory: sub.name,
                interest: sub.interest,
                confidence: sub.confidence,
                color: category.color,
            };
            if sub.interest >= 3.0 && sub.confidence >= 3.0 {
                quadrants.strongest.push(item);
            } else if sub.interest >= 3.0 {
                quadrants.high_interest.push(item);
            } else if sub.confidence >= 3.0 {
                quadrants.high_confidence.push(item);
            } else if sub.interest <= 1.0 && sub.confidence <= 1.0 {
                quadrants.low_both.push(item);
            }
        }
    }
    quadrants
}
