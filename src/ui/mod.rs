//! UI plugin - HUD text, game over screen, restart and quit.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::game::{
    FpsText, GAME_OVER_TEXT_COLOR, Game, GameConfig, GameOverEvent, GameOverUI, HUD_TEXT_COLOR,
    RngSource, ScoreText, SpeedText,
};
use crate::snake::GameTick;

/// Plugin for the HUD and session flow.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Startup, setup_hud)
            .add_systems(
                Update,
                (
                    quit_game,
                    restart_game,
                    update_score_text,
                    update_speed_text,
                    update_fps_text,
                    spawn_game_over_screen_system,
                )
                    .chain()
                    .after(GameTick),
            );
    }
}

fn hud_text(content: impl Into<String>, font_size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(content),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(HUD_TEXT_COLOR),
    )
}

/// Startup system spawning score, speed and frame rate displays.
fn setup_hud(mut commands: Commands) {
    commands.spawn((
        hud_text("Score: 1", 20.0),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        hud_text("Speed: 500 ms", 20.0),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(34.0),
            left: Val::Px(10.0),
            ..default()
        },
        SpeedText,
    ));

    commands.spawn((
        hud_text("FPS: --", 20.0),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
        FpsText,
    ));
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, event: &GameOverEvent) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(GAME_OVER_TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                hud_text(
                    format!("Final Score: {} ({})", event.score, event.cause),
                    30.0,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press SPACE to restart, Q to quit"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to show the game over overlay once per ended session. A message
/// from a session that was already replaced is dropped.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOverEvent>,
    game: Res<Game>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if let Some(event) = game_over_reader.read().last()
        && game.is_over()
        && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands, event);
    }
}

/// System to start a new session from the game over screen.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut game: ResMut<Game>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game.is_over() && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }

        if let Some(cause) = game.cause() {
            info!("restarting after the snake {cause}");
        }
        *game = Game::new(&config, RngSource::from_os());
    }
}

/// System to close the app on `Q`.
fn quit_game(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::KeyQ) {
        info!("quit requested");
        exit.write(AppExit::Success);
    }
}

/// System to update the score display.
fn update_score_text(game: Res<Game>, mut query: Query<&mut Text, With<ScoreText>>) {
    if game.is_changed()
        && let Ok(mut text) = query.single_mut()
    {
        *text = Text::from(format!("Score: {}", game.score()));
    }
}

/// System to update the tick interval display.
fn update_speed_text(game: Res<Game>, mut query: Query<&mut Text, With<SpeedText>>) {
    if game.is_changed()
        && let Ok(mut text) = query.single_mut()
    {
        *text = Text::from(format!("Speed: {} ms", game.speed_interval().as_millis()));
    }
}

/// System to update the frame rate display.
fn update_fps_text(diagnostics: Res<DiagnosticsStore>, mut query: Query<&mut Text, With<FpsText>>) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
    else {
        return;
    };
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("FPS: {fps:.0}"));
    }
}
