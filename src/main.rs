mod collision;
mod content;
mod core;
mod effects;
mod movement;
mod scenery;
mod stage;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.insert_resource(ClearColor(Color::srgb(0.05, 0.06, 0.12)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Jet Runner".to_string(),
                resolution: (960, 640).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            stage::StagePlugin,
            collision::CollisionPlugin,
            effects::EffectsPlugin,
            scenery::SceneryPlugin,
            ui::UiPlugin,
        ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(PhysicsDebugPlugin::default());

    app.run();
}
