use bevy::{prelude::*, window::WindowResolution};

mod food;
mod game;
mod grid;
mod rendering;
mod snake;
mod ui;

use game::{BACKGROUND_COLOR, Game, GameConfig, RngSource};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    let config = GameConfig::default();
    if let Err(err) = config.validate() {
        eprintln!("invalid game configuration: {err}");
        return AppExit::error();
    }

    let game = Game::new(&config, RngSource::from_os());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: WindowResolution::new(config.window_width, config.window_height),
                title: "Snake".to_string(),
                resizable: false,
                ..Default::default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(config)
        .insert_resource(game)
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .run()
}
