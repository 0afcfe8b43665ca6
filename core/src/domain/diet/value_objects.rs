use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Diet identifiers a user has opted into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDietSelection {
    pub diet_ids: BTreeSet<i32>,
}

impl UserDietSelection {
    pub fn new(diet_ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            diet_ids: diet_ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diet_ids.is_empty()
    }
}
