//! Movement domain: press input resource.

use bevy::prelude::*;

/// Binary press flag: set on press-begin, cleared on press-end or cancel.
#[derive(Resource, Debug, Default)]
pub struct PressState {
    pub pressed: bool,
}

impl PressState {
    pub fn begin(&mut self) {
        self.pressed = true;
    }

    pub fn end(&mut self) {
        self.pressed = false;
    }

    pub fn cancel(&mut self) {
        self.pressed = false;
    }

    pub fn reset(&mut self) {
        self.pressed = false;
    }
}
