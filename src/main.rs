mod coins;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod motion;
mod sprites;
mod tween;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() {
    let scene = content::load_scene(Path::new(content::SCENE_CONFIG_PATH));
    let window = scene.config.window.clone();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window.title,
            resolution: WindowResolution::new(window.width, window.height),
            resizable: window.resizable,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin::new(scene),
        core::CorePlugin,
        sprites::SpritesPlugin,
        tween::TweenPlugin,
        coins::CoinsPlugin,
        motion::MotionPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
