//! Content domain: stage layouts loaded from RON with an embedded fallback.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{Cell, StageDef, TileKind};
pub use registry::StageRegistry;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::{embedded_stages, load_stages};
use crate::content::validation::validate_stages;
use crate::core::STAGE_COUNT;

/// Directory holding the RON data files, relative to the working directory.
const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_stage_registry);
    }
}

fn load_stage_registry(mut commands: Commands) {
    let stages = match load_stages(Path::new(DATA_DIR)) {
        Ok(stages) => {
            let errors = validate_stages(&stages, STAGE_COUNT);
            if errors.is_empty() {
                Some(stages)
            } else {
                for e in &errors {
                    warn!("{}", e);
                }
                None
            }
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    let stages = match stages {
        Some(stages) => stages,
        None => {
            warn!("Falling back to embedded stage layouts");
            match embedded_stages() {
                Ok(stages) => stages,
                Err(e) => {
                    error!("{}", e);
                    Vec::new()
                }
            }
        }
    };

    let registry = StageRegistry::new(stages);
    info!("{}", registry.summary());
    commands.insert_resource(registry);
}
