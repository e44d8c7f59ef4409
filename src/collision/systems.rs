//! Collision domain: dispatch of player contacts to game events.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::collision::contact::{ContactKind, player_pair};
use crate::core::{GameOverCause, GameOverEvent, LevelSession};
use crate::effects::{PlaySound, SoundEffect};
use crate::movement::Player;

/// Route every new player contact to the handler for its category.
/// Contact response is left to the physics world in all cases.
pub(crate) fn dispatch_player_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut game_over_events: MessageWriter<GameOverEvent>,
    mut sounds: MessageWriter<PlaySound>,
    mut session: ResMut<LevelSession>,
    player_query: Query<&Transform, With<Player>>,
    layers_query: Query<&CollisionLayers>,
) {
    for event in collision_events.read() {
        let Some((player, other)) = player_pair(event.collider1, event.collider2, |e| {
            player_query.contains(e)
        }) else {
            debug!(
                "Ignoring contact without player: {:?} / {:?}",
                event.collider1, event.collider2
            );
            continue;
        };

        let kind = layers_query
            .get(other)
            .map(ContactKind::from_layers)
            .unwrap_or(ContactKind::Other);

        match kind {
            ContactKind::Enemy => {
                let position = player_query
                    .get(player)
                    .map(|t| t.translation.truncate())
                    .unwrap_or_default();

                if session.game_over().is_some() {
                    info!("Player hit an enemy at ({:.0}, {:.0})", position.x, position.y);
                    game_over_events.write(GameOverEvent {
                        stage: session.stage(),
                        cause: GameOverCause::EnemyContact,
                        position,
                    });
                }
            }
            ContactKind::Coin => {
                if let Some(total) = session.collect_coin() {
                    commands.entity(other).try_despawn();
                    sounds.write(PlaySound(SoundEffect::Coin));
                    debug!("Coin collected ({} total)", total);
                }
            }
            ContactKind::Item => {
                if let Some(total) = session.collect_item() {
                    commands.entity(other).try_despawn();
                    sounds.write(PlaySound(SoundEffect::Food));
                    info!("Item collected ({} total)", total);
                }
            }
            ContactKind::Other => {}
        }
    }
}
