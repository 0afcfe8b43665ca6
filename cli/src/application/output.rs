use std::collections::BTreeSet;
use std::fmt::Write;

use clap::ValueEnum;
use nutree_core::domain::{compliance::entities::ComplianceEvaluation, diet::entities::DietTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_evaluation(
    evaluation: &ComplianceEvaluation,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(evaluation);
    }

    if evaluation.chosen_diets.is_empty() {
        return Ok("No diets selected; nothing to check.".to_string());
    }

    let mut out = String::new();
    let chosen: Vec<&str> = evaluation
        .chosen_diets
        .iter()
        .map(|diet| diet.name.as_str())
        .collect();
    let _ = writeln!(out, "Chosen diets: {}", chosen.join(", "));

    if evaluation.is_compliant() {
        let _ = writeln!(out, "Compliant with every assessed diet.");
    } else {
        let _ = writeln!(out, "Not compliant: {}", join(&evaluation.non_compliant_diets));
    }

    if !evaluation.unassessed_diets.is_empty() {
        let _ = writeln!(out, "Not assessed: {}", join(&evaluation.unassessed_diets));
    }

    Ok(out.trim_end().to_string())
}

pub fn render_diets(diets: &[DietTag], format: OutputFormat) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(diets);
    }

    let lines: Vec<String> = diets
        .iter()
        .map(|diet| match &diet.description {
            Some(description) => format!("{:>3}  {} - {}", diet.id, diet.name, description),
            None => format!("{:>3}  {}", diet.id, diet.name),
        })
        .collect();

    Ok(lines.join("\n"))
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(non_compliant: &[&str], unassessed: &[&str]) -> ComplianceEvaluation {
        ComplianceEvaluation {
            chosen_diets: vec![
                DietTag::new(2, "vegan".to_string(), None),
                DietTag::named("paleo"),
            ],
            non_compliant_diets: non_compliant.iter().map(|s| s.to_string()).collect(),
            unassessed_diets: unassessed.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_text_lists_failures() {
        let text = render_evaluation(&evaluation(&["vegan"], &["paleo"]), OutputFormat::Text)
            .unwrap();
        assert_eq!(
            text,
            "Chosen diets: vegan, paleo\nNot compliant: vegan\nNot assessed: paleo"
        );
    }

    #[test]
    fn test_render_text_compliant() {
        let text = render_evaluation(&evaluation(&[], &[]), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Chosen diets: vegan, paleo\nCompliant with every assessed diet."
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_evaluation(&evaluation(&["vegan"], &[]), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["non_compliant_diets"], serde_json::json!(["vegan"]));
        assert_eq!(value["chosen_diets"][0]["id"], 2);
    }

    #[test]
    fn test_render_diets_text() {
        let diets = vec![
            DietTag::new(1, "vegetarian".to_string(), Some("No meat.".to_string())),
            DietTag::new(12, "paleo".to_string(), None),
        ];
        assert_eq!(
            render_diets(&diets, OutputFormat::Text).unwrap(),
            "  1  vegetarian - No meat.\n 12  paleo"
        );
    }
}
