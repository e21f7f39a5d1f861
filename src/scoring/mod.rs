//! The scoring engine: pure reads of the static catalog plus a snapshot of
//! the response map, producing fresh derived records on every call. Nothing
//! in here holds state or mutates the inputs.

pub mod accommodations;
pub mod completion;
pub mod environment;
pub mod num;
pub mod preferences;

use crate::catalog::Catalog;
use crate::types::response::{Responses, SectionId};
use crate::types::results::AllResults;

pub fn all_results(catalog: &Catalog, responses: &Responses) -> AllResults {
    AllResults {
        completion: completion::overall_completion(catalog, responses),
        preferences: preferences::calculate(
            catalog.categories(SectionId::Preferences),
            responses,
        ),
        environment: environment::calculate(catalog.categories(SectionId::Environment), responses),
        accommodations: accommodations::calculate(
            catalog.categories(SectionId::Accommodations),
            responses,
        ),
    }
}
