use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring;
    use crate::types::response::Responses;

    #[test]
    fn json_report_carries_ranked_and_tier_sections() {
        let catalog = Catalog::build();
        let results = scoring::all_results(&catalog, &Responses::new());

        let rendered = to_json(&results).expect("results should serialize");
        assert!(rendered.contains("\"ranked\""));
        assert!(rendered.contains("\"quadrants\""));
        assert!(rendered.contains("\"urgent_gaps\""));
        assert!(rendered.contains("\"non_negotiable\""));
        assert!(rendered.contains("\"percentage\": 0"));
    }
}
