//! Collision domain: contact classification by category bitmask.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// What the player touched, resolved once from the other body's category bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Enemy,
    Coin,
    Item,
    Other,
}

impl ContactKind {
    /// Categories are bitmasks; when several bits are set the first match in
    /// Enemy, Coin, Item order wins.
    pub fn from_category_bits(bits: u32) -> Self {
        if bits & GameLayer::Enemy.to_bits() != 0 {
            ContactKind::Enemy
        } else if bits & GameLayer::Coin.to_bits() != 0 {
            ContactKind::Coin
        } else if bits & GameLayer::Item.to_bits() != 0 {
            ContactKind::Item
        } else {
            ContactKind::Other
        }
    }

    pub fn from_layers(layers: &CollisionLayers) -> Self {
        Self::from_category_bits(layers.memberships.0)
    }
}

/// Order a collision pair as (player, other). None when neither side is the player.
pub fn player_pair(
    a: Entity,
    b: Entity,
    is_player: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_player(a) {
        Some((a, b))
    } else if is_player(b) {
        Some((b, a))
    } else {
        None
    }
}
