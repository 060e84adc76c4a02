//! Generation requests: a length plus the enabled character classes.

use std::collections::{BTreeSet, HashSet};

use super::catalog::{CharacterClass, DEFAULT_LENGTH};

/// What to generate. Rebuilt from form or flag state for every generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: i64,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    pub fn new(length: i64, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Union of the enabled classes' code points, in catalog order.
    pub fn pool(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.classes
            .iter()
            .flat_map(|class| class.code_points().iter().copied())
            .filter(|cp| seen.insert(*cp))
            .collect()
    }

    pub fn pool_size(&self) -> usize {
        self.pool().len()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_LENGTH as i64,
            CharacterClass::ALL
                .into_iter()
                .filter(|c| c.enabled_by_default()),
        )
    }
}
