//! Rendering plugin - camera setup and per-frame drawing of the grid and the snake.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    FOOD_EATEN_FLASH_COLOR, FoodEatenEvent, Game, GameConfig, PulseEffect, Z_EFFECT, Z_GRID,
    Z_SNAKE,
};
use crate::snake::GameTick;

/// Plugin for immediate-mode drawing of the playing field.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Shape2dPlugin::default())
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    draw_grid,
                    draw_snake,
                    spawn_food_eaten_effect,
                    pulse_effect_system,
                )
                    .chain()
                    .after(GameTick),
            );
    }
}

/// Something that can fill axis-aligned pixel rectangles.
///
/// Rectangles are given in window pixels with the origin at the top-left
/// corner and `y` growing downwards.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// [`Surface`] over a Bevy shape painter for a window of `extent` pixels.
pub struct Canvas<'a, 'w, 's> {
    painter: &'a mut ShapePainter<'w, 's>,
    extent: Vec2,
    z: f32,
}

impl<'a, 'w, 's> Canvas<'a, 'w, 's> {
    pub fn new(painter: &'a mut ShapePainter<'w, 's>, extent: Vec2, z: f32) -> Self {
        painter.reset();
        Canvas { painter, extent, z }
    }
}

impl Surface for Canvas<'_, '_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let world = to_world(rect.center(), self.extent);
        self.painter.set_translation(world.extend(self.z));
        self.painter.color = color;
        self.painter.rect(rect.size());
    }
}

/// Window pixel (top-left origin, `y` down) to 2D world space (centered, `y` up).
pub fn to_world(pixel: Vec2, extent: Vec2) -> Vec2 {
    Vec2::new(pixel.x - extent.x / 2.0, extent.y / 2.0 - pixel.y)
}

fn window_extent(config: &GameConfig) -> Vec2 {
    Vec2::new(config.window_width as f32, config.window_height as f32)
}

/// Startup system spawning the 2D camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System to paint every grid cell.
fn draw_grid(game: Res<Game>, config: Res<GameConfig>, mut painter: ShapePainter) {
    let mut canvas = Canvas::new(&mut painter, window_extent(&config), Z_GRID);
    game.grid().draw(&mut canvas);
}

/// System to paint the snake over the grid.
fn draw_snake(game: Res<Game>, config: Res<GameConfig>, mut painter: ShapePainter) {
    let mut canvas = Canvas::new(&mut painter, window_extent(&config), Z_SNAKE);
    game.snake().draw(game.grid(), &mut canvas);
}

/// System to spawn a flash where food was eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    game: Res<Game>,
    config: Res<GameConfig>,
) {
    for event in food_eaten_reader.read() {
        let rect = game.grid().cell_rect(event.position.x, event.position.y);
        let center = to_world(rect.center(), window_extent(&config));

        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FOOD_EATEN_FLASH_COLOR,
                    transform: Transform::from_translation(center.extend(Z_EFFECT)),
                    ..ShapeConfig::default_2d()
                },
                rect.width() / 2.0,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to grow and then despawn food flashes.
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}

/// Records fills instead of drawing them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub fills: Vec<(Rect, Color)>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }
}
