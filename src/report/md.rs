//! Markdown rendering of scored results. All values are shown on the 1..5
//! display scale; unanswered optional values render as the em-dash sentinel.

use crate::scoring::num::{to_display, to_percent};
use crate::types::results::{
    AccommodationsResults, AllResults, EnvironmentResults, PreferencesResults,
};

/// Ten-slot text bar for a 0..4 score, the terminal stand-in for the score
/// bars on the results screen.
fn bar(value: Option<f64>) -> String {
    let filled = ((to_percent(value) / 10.0).round() as usize).min(10);
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}

pub fn preferences_markdown(results: &PreferencesResults) -> String {
    let mut output = String::new();
    output.push_str("# Design Work Preferences\n\n");
    output.push_str("Ranked by combined interest and confidence.\n\n");

    for category in &results.ranked {
        output.push_str(&format!(
            "## {} (combined {}) `{}`\n\n",
            category.name,
            to_display(Some(category.combined)),
            bar(Some(category.combined))
        ));
        output.push_str(&format!(
            "interest {}, confidence {}\n\n",
            to_display(Some(category.interest)),
            to_display(Some(category.confidence))
        ));
        for sub in &category.subcategories {
            output.push_str(&format!(
                "- {} — interest {}, confidence {}, combined {}\n",
                sub.name,
                to_display(Some(sub.interest)),
                to_display(Some(sub.confidence)),
                to_display(Some(sub.combined))
            ));
        }
        output.push('\n');
    }

    output.push_str("## Quadrants\n\n");
    quadrant_block(&mut output, "Strongest areas", &results.quadrants.strongest);
    quadrant_block(
        &mut output,
        "High interest, growing confidence",
        &results.quadrants.high_interest,
    );
    quadrant_block(
        &mut output,
        "High confidence, lower interest",
        &results.quadrants.high_confidence,
    );
    quadrant_block(&mut output, "Low priority", &results.quadrants.low_both);

    output
}

fn quadrant_block(
    output: &mut String,
    title: &str,
    items: &[crate::types::results::QuadrantItem],
) {
    output.push_str(&format!("### {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!(
            "- {} / {} (interest {}, confidence {})\n",
            item.category,
            item.subcategory,
            to_display(Some(item.interest)),
            to_display(Some(item.confidence))
        ));
    }
    output.push('\n');
}

pub fn environment_markdown(results: &EnvironmentResults) -> String {
    let mut output = String::new();
    output.push_str("# Work Environment Needs\n\n");
    output.push_str("Ranked by importance.\n\n");

    for category in &results.ranked {
        output.push_str(&format!(
            "## {} (importance {}) `{}`\n\n",
            category.name,
            to_display(Some(category.importance)),
            bar(Some(category.importance))
        ));
        output.push_str(&format!(
            "current {}, gap {}\n\n",
            to_display(category.current),
            to_display(category.gap)
        ));
        for sub in &category.subcategories {
            output.push_str(&format!(
                "- {} — importance {}, current {}, gap {}\n",
                sub.name,
                to_display(Some(sub.importance)),
                to_display(sub.current),
                to_display(sub.gap)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Areas of Concern\n\n");
    if results.gaps.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("High importance but low current satisfaction:\n\n");
        for category in &results.gaps {
            output.push_str(&format!(
                "- {} — gap {} (importance {}, current {})\n",
                category.name,
                to_display(category.gap),
                to_display(Some(category.importance)),
                to_display(category.current)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Tiers\n\n");
    gap_tier_block(&mut output, "Urgent gaps", &results.tiers.urgent_gaps);
    gap_tier_block(&mut output, "Working well", &results.tiers.working_well);
    gap_tier_block(&mut output, "Low priority", &results.tiers.low_priority);

    output
}

fn gap_tier_block(output: &mut String, title: &str, items: &[crate::types::results::GapItem]) {
    output.push_str(&format!("### {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!(
            "- {} / {} (importance {}, current {}, gap {})\n",
            item.category,
            item.subcategory,
            to_display(Some(item.importance)),
            to_display(item.current),
            to_display(item.gap)
        ));
    }
    output.push('\n');
}

pub fn accommodations_markdown(results: &AccommodationsResults) -> String {
    let mut output = String::new();
    output.push_str("# Accommodations\n\n");
    output.push_str("Ranked by need level.\n\n");

    for category in &results.ranked {
        output.push_str(&format!(
            "## {} (need {}) `{}`\n\n",
            category.name,
            to_display(Some(category.need_level)),
            bar(Some(category.need_level))
        ));
        for sub in &category.subcategories {
            let flag = if sub.non_negotiable {
                " [non-negotiable]"
            } else {
                ""
            };
            output.push_str(&format!(
                "- {} — need {}{}\n",
                sub.name,
                to_display(Some(sub.need_level)),
                flag
            ));
        }
        output.push('\n');
    }

    output.push_str("## Priority Tiers\n\n");
    priority_block(
        &mut output,
        "Non-negotiable",
        &results.tiers.non_negotiable,
    );
    priority_block(&mut output, "High priority", &results.tiers.high_priority);
    priority_block(&mut output, "Helpful", &results.tiers.helpful);

    output
}

fn priority_block(
    output: &mut String,
    title: &str,
    items: &[crate::types::results::PriorityItem],
) {
    output.push_str(&format!("### {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!(
            "- {} / {} (need {})\n",
            item.category,
            item.subcategory,
            to_display(Some(item.need_level))
        ));
    }
    output.push('\n');
}

pub fn all_markdown(results: &AllResults) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Results\n\n");
    output.push_str(&format!(
        "Overall completion: {}/{} ({}%)\n\n",
        results.completion.answered, results.completion.total, results.completion.percentage
    ));
    output.push_str(&preferences_markdown(&results.preferences));
    output.push('\n');
    output.push_str(&environment_markdown(&results.environment));
    output.push('\n');
    output.push_str(&accommodations_markdown(&results.accommodations));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring;
    use crate::types::response::{Dimension, ResponseKey, Responses, SectionId};

    #[test]
    fn preferences_markdown_contains_ranked_and_quadrant_sections() {
        let catalog = Catalog::build();
        let results =
            scoring::preferences::calculate(catalog.categories(SectionId::Preferences), &Responses::new());

        let rendered = preferences_markdown(&results);
        assert!(rendered.contains("# Design Work Preferences"));
        assert!(rendered.contains("## Quadrants"));
        assert!(rendered.contains("## Research"));
    }

    #[test]
    fn environment_markdown_shows_sentinel_for_missing_current() {
        let catalog = Catalog::build();
        let results =
            scoring::environment::calculate(catalog.categories(SectionId::Environment), &Responses::new());

        let rendered = environment_markdown(&results);
        assert!(rendered.contains("current \u{2014}"));
        assert!(rendered.contains("## Areas of Concern\n\n- none"));
    }

    #[test]
    fn accommodations_markdown_marks_non_negotiable_subcategories() {
        let catalog = Catalog::build();
        let mut responses = Responses::new();
        responses.insert(ResponseKey::new("s3_comm_meet_1", Dimension::Need), 4);
        responses.insert(ResponseKey::new("s3_comm_meet_nn", Dimension::Toggle), 1);
        let results = scoring::accommodations::calculate(
            catalog.categories(SectionId::Accommodations),
            &responses,
        );

        let rendered = accommodations_markdown(&results);
        assert!(rendered.contains("Meeting Support — need 5.0 [non-negotiable]"));
        assert!(rendered.contains("### Non-negotiable\n\n- Communication Accommodations"));
    }

    #[test]
    fn all_markdown_leads_with_overall_completion() {
        let catalog = Catalog::build();
        let results = scoring::all_results(&catalog, &Responses::new());

        let rendered = all_markdown(&results);
        assert!(rendered.starts_with("# Assessment Results"));
        assert!(rendered.contains("Overall completion: 0/"));
    }
}
