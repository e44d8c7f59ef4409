//! Core domain: game over and clear banners with their rebuild control.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::{GameOverCause, GameOverEvent, StageClearedEvent};
use crate::core::resources::StageRequest;
use crate::core::session::StageIndex;
use crate::core::state::ScenePhase;
use crate::core::SceneEntity;
use crate::effects::{
    BackgroundMusic, PlaySound, SoundEffect, Track, play_track, spawn_explosion, stop_tracks,
};
use crate::movement::{Player, PressState};

/// Marker for the outcome overlay root
#[derive(Component, Debug)]
pub struct OutcomeScreenUI;

/// The single menu control; rebuilds the scene for `stage` when chosen
#[derive(Component, Debug)]
pub struct RebuildButton {
    pub stage: StageIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutcomeKind {
    GameOver,
    Clear,
}

impl OutcomeKind {
    pub(crate) fn banner(&self) -> &'static str {
        match self {
            OutcomeKind::GameOver => "GAME OVER",
            OutcomeKind::Clear => "CLEAR!",
        }
    }

    pub(crate) fn button_label(&self) -> &'static str {
        match self {
            OutcomeKind::GameOver => "REPLAY",
            OutcomeKind::Clear => "NEXT",
        }
    }

    fn banner_color(&self) -> Color {
        match self {
            OutcomeKind::GameOver => Color::srgb(0.85, 0.2, 0.15),
            OutcomeKind::Clear => Color::srgb(0.95, 0.85, 0.3),
        }
    }
}

pub(crate) fn on_game_over(
    mut commands: Commands,
    mut events: MessageReader<GameOverEvent>,
    mut sounds: MessageWriter<PlaySound>,
    player_query: Query<Entity, With<Player>>,
    music_query: Query<Entity, With<BackgroundMusic>>,
) {
    for event in events.read() {
        info!(
            "Game over on stage {} ({:?})",
            event.stage.display_number(),
            event.cause
        );

        for player in &player_query {
            commands.entity(player).try_despawn();
        }

        stop_tracks(&mut commands, &music_query);
        sounds.write(PlaySound(SoundEffect::Explode));

        if event.cause == GameOverCause::EnemyContact {
            spawn_explosion(&mut commands, event.position);
        }

        spawn_outcome_screen(&mut commands, OutcomeKind::GameOver, event.stage);
    }
}

pub(crate) fn on_stage_cleared(
    mut commands: Commands,
    mut events: MessageReader<StageClearedEvent>,
    asset_server: Res<AssetServer>,
    mut press: ResMut<PressState>,
    player_query: Query<Entity, With<Player>>,
    music_query: Query<Entity, With<BackgroundMusic>>,
) {
    for event in events.read() {
        // Freeze the player where it crossed the goal
        for player in &player_query {
            commands.entity(player).insert(RigidBodyDisabled);
        }
        press.reset();

        stop_tracks(&mut commands, &music_query);
        play_track(&mut commands, &asset_server, Track::Clear);

        debug!(
            "Stage {} cleared, next is {}",
            event.stage.display_number(),
            event.next.display_number()
        );
        spawn_outcome_screen(&mut commands, OutcomeKind::Clear, event.next);
    }
}

fn spawn_outcome_screen(commands: &mut Commands, kind: OutcomeKind, target: StageIndex) {
    commands
        .spawn((
            OutcomeScreenUI,
            SceneEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(96.0),
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(kind.banner()),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(kind.banner_color()),
            ));

            parent
                .spawn((
                    RebuildButton { stage: target },
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.4, 0.4, 0.5)),
                ))
                .with_child((
                    Text::new(kind.button_label()),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));
        });
}

pub(crate) fn handle_rebuild_button(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut button_query: Query<
        (
            &Interaction,
            &RebuildButton,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    all_buttons: Query<&RebuildButton>,
    mut request: ResMut<StageRequest>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    let mut target = None;

    for (interaction, button, mut bg_color, mut border_color) in &mut button_query {
        match *interaction {
            Interaction::Pressed => {
                *bg_color = BackgroundColor(Color::srgb(0.3, 0.3, 0.35));
                target = Some(button.stage);
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(Color::srgb(0.25, 0.25, 0.3));
                *border_color = BorderColor::all(Color::srgb(0.5, 0.5, 0.6));
            }
            Interaction::None => {
                *bg_color = BackgroundColor(Color::srgb(0.2, 0.2, 0.25));
                *border_color = BorderColor::all(Color::srgb(0.4, 0.4, 0.5));
            }
        }
    }

    if target.is_none()
        && (keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter))
    {
        target = all_buttons.iter().next().map(|button| button.stage);
    }

    let Some(stage) = target else {
        return;
    };

    info!("Rebuilding scene for stage {}", stage.display_number());
    request.stage = stage;
    next_phase.set(ScenePhase::Reloading);
}
