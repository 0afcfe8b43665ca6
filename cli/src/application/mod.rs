use nutree_core::domain::common::entities::app_errors::CoreError;

pub mod commands;
pub mod logging;
pub mod output;

/// Process exit code for a failed run.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<CoreError>() {
        Some(CoreError::Validation { .. }) => 2,
        Some(CoreError::ClassifierUnavailable(_)) | Some(CoreError::ClassifierResponse(_)) => 3,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes() {
        let validation: Result<(), CoreError> = Err(CoreError::validation("title", "required"));
        let validation = validation.context("evaluating recipe").unwrap_err();
        assert_eq!(exit_code_for(&validation), 2);

        let unavailable = anyhow::Error::new(CoreError::ClassifierUnavailable("down".to_string()));
        assert_eq!(exit_code_for(&unavailable), 3);

        assert_eq!(exit_code_for(&anyhow::anyhow!("missing api key")), 1);
    }
}
