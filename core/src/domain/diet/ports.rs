use std::collections::BTreeSet;
use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet::{entities::DietTag, value_objects::UserDietSelection},
};

/// Read-only access to the seeded diet catalog
#[cfg_attr(test, mockall::automock)]
pub trait DietRepository: Send + Sync {
    fn fetch_diets(&self) -> impl Future<Output = Result<Vec<DietTag>, CoreError>> + Send;

    /// Diets with the given ids, ordered by id. Unknown ids are skipped.
    fn get_by_ids(
        &self,
        ids: BTreeSet<i32>,
    ) -> impl Future<Output = Result<Vec<DietTag>, CoreError>> + Send;

    /// Case-insensitive lookup. Unknown names are skipped.
    fn get_by_names(
        &self,
        names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<DietTag>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietService: Send + Sync {
    fn get_diets(&self) -> impl Future<Output = Result<Vec<DietTag>, CoreError>> + Send;

    fn resolve_selection(
        &self,
        selection: UserDietSelection,
    ) -> impl Future<Output = Result<Vec<DietTag>, CoreError>> + Send;
}
