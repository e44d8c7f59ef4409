//! UI domain: stage label and coin counter.

use bevy::prelude::*;

use crate::core::{LevelSession, SceneEntity, StageRequest};

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the stage/coin HUD container
#[derive(Component)]
pub struct CoinDisplayUI;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

/// Text shown on the stage label.
pub fn stage_label(display_number: usize) -> String {
    format!("STAGE {display_number}")
}

pub(crate) fn spawn_coin_display_ui(mut commands: Commands, request: Res<StageRequest>) {
    commands
        .spawn((
            CoinDisplayUI,
            SceneEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(stage_label(request.stage.display_number())),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::right(Val::Px(16.0)),
                    ..default()
                },
            ));

            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.95, 0.8, 0.2)),
            ));

            parent.spawn((
                CoinAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.5)),
            ));
        });
}

pub(crate) fn update_coin_display(
    session: Option<Res<LevelSession>>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    let Some(session) = session else {
        return;
    };
    if session.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", session.coins());
        }
    }
}
