use std::collections::BTreeSet;

use crate::domain::{
    compliance::entities::{ComplianceEvaluation, ComplianceReport, NonComplianceResult},
    diet::entities::DietTag,
};

/// Match selected diet names against the report's flags by name, ignoring case.
pub fn find_non_compliant(
    report: &ComplianceReport,
    selected_diets: &BTreeSet<String>,
) -> NonComplianceResult {
    let selection: Vec<DietTag> = selected_diets
        .iter()
        .map(|name| DietTag::named(name))
        .collect();

    find_non_compliant_with(report, &selection)
}

/// Match each diet through its classifier flag mapping.
///
/// A diet fails when any flag it maps to is `false`. When none of its flags
/// appear in the report it is unassessed rather than failed.
pub fn find_non_compliant_with(
    report: &ComplianceReport,
    selection: &[DietTag],
) -> NonComplianceResult {
    let mut result = NonComplianceResult::default();

    for diet in selection {
        let name = diet.name.trim();
        if name.is_empty() {
            continue;
        }

        let verdicts: Vec<bool> = diet
            .flag_keys()
            .iter()
            .filter_map(|key| report.flag(key))
            .collect();

        if verdicts.is_empty() {
            result.unassessed_diets.insert(name.to_string());
        } else if verdicts.contains(&false) {
            result.non_compliant_diets.insert(name.to_string());
        }
    }

    result
}

/// Package a match result with the diets it was computed for.
pub fn assemble_evaluation(
    result: NonComplianceResult,
    chosen_diets: Vec<DietTag>,
) -> ComplianceEvaluation {
    ComplianceEvaluation {
        chosen_diets,
        non_compliant_diets: result.non_compliant_diets,
        unassessed_diets: result.unassessed_diets,
    }
}
