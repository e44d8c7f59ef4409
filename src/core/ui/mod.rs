//! Core domain: scene flow screens (start banner, outcome menu, rebuild fade).

pub(crate) mod fade;
pub(crate) mod go_banner;
pub(crate) mod outcome;

pub use fade::{FadeDirection, FadeOverlay, fade_alpha};
pub use go_banner::{GoBanner, go_banner_scale};
pub use outcome::{OutcomeScreenUI, RebuildButton};
