//! StageRegistry resource providing lookup of loaded stage layouts by index.

use bevy::prelude::*;

use super::data::StageDef;
use crate::core::StageIndex;

/// All playable stages, ordered by stage index.
#[derive(Resource, Debug, Default)]
pub struct StageRegistry {
    stages: Vec<StageDef>,
}

impl StageRegistry {
    pub fn new(mut stages: Vec<StageDef>) -> Self {
        stages.sort_by_key(|s| s.index);
        Self { stages }
    }

    pub fn get(&self, index: StageIndex) -> Option<&StageDef> {
        self.stages.iter().find(|s| s.index == index.get())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns a summary of loaded stages for logging.
    pub fn summary(&self) -> String {
        let names: Vec<String> = self
            .stages
            .iter()
            .map(|s| format!("{} '{}' ({} cols)", s.index + 1, s.name, s.columns()))
            .collect();
        format!("StageRegistry loaded {} stages: {}", self.len(), names.join(", "))
    }
}
