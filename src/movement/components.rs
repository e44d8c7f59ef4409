//! Movement domain: player marker and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering. A tile's membership bits are its
/// gameplay category.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Player character
    Player,
    /// Solid floors and walls of the tile map
    Ground,
    /// Hazards; touching one ends the run
    Enemy,
    /// Collectible coins
    Coin,
    /// Collectible items shown in the HUD slots
    Item,
}

#[derive(Component, Debug)]
pub struct Player;
