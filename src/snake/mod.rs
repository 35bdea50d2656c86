//! Snake plugin - the snake body model, keyboard steering and the tick system.

use bevy::prelude::*;

use crate::game::{
    Direction, FoodEatenEvent, Game, GameOverEvent, Position, SNAKE_COLOR, TickOutcome,
};
use crate::grid::Grid;
use crate::rendering::Surface;

/// Steering keys in the order they are polled; the first accepted one wins
/// the turn of a tick.
const STEERING_KEYS: [KeyCode; 8] = [
    KeyCode::ArrowUp,
    KeyCode::KeyW,
    KeyCode::ArrowDown,
    KeyCode::KeyS,
    KeyCode::ArrowRight,
    KeyCode::KeyD,
    KeyCode::ArrowLeft,
    KeyCode::KeyA,
];

/// Steering and the game tick. Drawing and the HUD run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameTick;

/// Plugin for snake steering and the game tick.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FoodEatenEvent>()
            .add_message::<GameOverEvent>()
            .add_systems(
                Update,
                (snake_movement_input, advance_game).chain().in_set(GameTick),
            );
    }
}

/// Ordered body segments (head first) and the current heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
    heading: Option<Direction>,
    turned: bool,
}

impl Snake {
    /// A one-segment snake at `head`. `None` keeps it still until the first turn.
    pub fn new(head: Position, heading: Option<Direction>) -> Self {
        Snake {
            body: vec![head],
            heading,
            turned: false,
        }
    }

    /// A snake laid out along `body`, head first.
    ///
    /// Panics when `body` is empty.
    #[cfg(test)]
    pub fn from_body(body: Vec<Position>, heading: Option<Direction>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Snake {
            body,
            heading,
            turned: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Applies a directional key. Returns whether the heading changed.
    pub fn handle_input(&mut self, key: KeyCode) -> bool {
        Direction::from_key(key).is_some_and(|direction| self.turn(direction))
    }

    /// Turns onto `direction` unless a turn was already taken this tick or the
    /// snake already travels along that axis.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.turned {
            return false;
        }
        if self
            .heading
            .is_some_and(|current| current.is_vertical() == direction.is_vertical())
        {
            return false;
        }
        self.heading = Some(direction);
        self.turned = true;
        true
    }

    /// Moves one cell: every segment takes its predecessor's place, then the
    /// head advances along the heading.
    pub fn step(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(direction) = self.heading {
            self.body[0] = self.body[0].moved(direction);
        }
        self.turned = false;
    }

    /// Appends a segment on top of the tail; it fills in on the next step.
    pub fn grow(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    /// Whether the head overlaps another segment. Bodies of two or fewer
    /// segments cannot fold onto themselves.
    pub fn collides_with_self(&self) -> bool {
        if self.body.len() <= 2 {
            return false;
        }
        let head = self.head();
        self.body[1..].iter().any(|segment| head.collides_with(segment))
    }

    /// Paints one grid cell per segment.
    pub fn draw(&self, grid: &Grid, surface: &mut impl Surface) {
        for segment in &self.body {
            surface.fill_rect(grid.cell_rect(segment.x, segment.y), SNAKE_COLOR);
        }
    }
}

/// System to steer the snake from freshly pressed keys.
fn snake_movement_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game: ResMut<Game>) {
    for key in STEERING_KEYS {
        if keyboard_input.just_pressed(key) && game.handle_input(key) {
            debug!("heading changed to {:?}", game.snake().heading());
        }
    }
}

/// System to run the tick gate once per frame against the real-time clock.
fn advance_game(
    time: Res<Time<Real>>,
    mut game: ResMut<Game>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    match game.update(time.elapsed()) {
        TickOutcome::Ate(position) => {
            info!(
                "food eaten at ({}, {}), length {}, interval {:?}",
                position.x,
                position.y,
                game.score(),
                game.speed_interval()
            );
            food_eaten_writer.write(FoodEatenEvent { position });
        }
        TickOutcome::Ended(cause) => {
            info!(
                "Game Over ({cause}) after {} meals. Final score: {}",
                game.meals(),
                game.score()
            );
            game_over_writer.write(GameOverEvent {
                cause,
                score: game.score(),
            });
        }
        TickOutcome::Waiting | TickOutcome::Moved | TickOutcome::Halted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GamePhase, ScriptedRandom};

    #[test]
    fn three_steps_right_from_the_middle() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        for _ in 0..3 {
            snake.step();
        }
        assert_eq!(snake.head(), Position::new(8, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn still_snake_does_not_move() {
        let mut snake = Snake::new(Position::new(2, 2), None);
        snake.step();
        assert_eq!(snake.head(), Position::new(2, 2));
    }

    #[test]
    fn step_preserves_length_and_follows_the_head() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        snake.grow();
        snake.step();
        snake.grow();
        snake.step();
        assert_eq!(
            snake.body(),
            &[Position::new(7, 5), Position::new(6, 5), Position::new(5, 5)]
        );

        snake.step();
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body(),
            &[Position::new(8, 5), Position::new(7, 5), Position::new(6, 5)]
        );
    }

    #[test]
    fn grow_at_length_one_duplicates_the_head() {
        let mut snake = Snake::new(Position::new(1, 1), None);
        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body(), &[Position::new(1, 1), Position::new(1, 1)]);
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn grown_segment_catches_up_without_a_jump() {
        let mut snake = Snake::new(Position::new(0, 0), Some(Direction::Down));
        snake.step();
        snake.grow();
        assert_eq!(snake.body(), &[Position::new(0, 1), Position::new(0, 1)]);
        snake.step();
        assert_eq!(snake.body(), &[Position::new(0, 2), Position::new(0, 1)]);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        assert!(!snake.turn(Direction::Left));
        assert!(!snake.turn(Direction::Right));
        assert_eq!(snake.heading(), Some(Direction::Right));

        assert!(snake.turn(Direction::Up));
        snake.step();
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.heading(), Some(Direction::Up));
    }

    #[test]
    fn still_snake_accepts_any_first_direction() {
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let mut snake = Snake::new(Position::new(5, 5), None);
            assert!(snake.turn(direction));
            assert_eq!(snake.heading(), Some(direction));
        }
    }

    #[test]
    fn only_one_turn_per_step() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        assert!(snake.turn(Direction::Up));
        // Up then Left in the same tick would otherwise allow a reversal.
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.heading(), Some(Direction::Up));

        snake.step();
        assert!(snake.turn(Direction::Left));
    }

    #[test]
    fn input_changes_heading_but_not_position() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        assert!(snake.handle_input(KeyCode::ArrowDown));
        assert_eq!(snake.head(), Position::new(5, 5));
        snake.step();
        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn non_directional_keys_are_ignored() {
        let mut snake = Snake::new(Position::new(5, 5), Some(Direction::Right));
        assert!(!snake.handle_input(KeyCode::Space));
        assert!(!snake.handle_input(KeyCode::KeyQ));
        assert!(snake.handle_input(KeyCode::KeyW));
    }

    #[test]
    fn self_collision_needs_overlap_past_the_head() {
        let mut snake = Snake::from_body(
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(0, 2),
            ],
            Some(Direction::Left),
        );
        assert!(!snake.collides_with_self());

        assert!(snake.turn(Direction::Down));
        snake.step();
        assert_eq!(snake.head(), Position::new(1, 2));
        assert!(snake.collides_with_self());
    }

    #[test]
    fn short_bodies_never_collide() {
        let snake = Snake::from_body(
            vec![Position::new(3, 3), Position::new(3, 3)],
            Some(Direction::Up),
        );
        assert!(!snake.collides_with_self());
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn empty_body_is_rejected() {
        Snake::from_body(Vec::new(), None);
    }

    #[test]
    fn draw_paints_each_segment() {
        let grid = Grid::new(10, 10, 20);
        let mut snake = Snake::new(Position::new(4, 4), Some(Direction::Right));
        snake.grow();
        snake.step();

        let mut surface = crate::rendering::RecordingSurface::default();
        snake.draw(&grid, &mut surface);

        assert_eq!(
            surface.fills,
            vec![
                (grid.cell_rect(5, 4), SNAKE_COLOR),
                (grid.cell_rect(4, 4), SNAKE_COLOR),
            ]
        );
    }

    fn app_with_game(game: Game) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(game)
            .add_plugins(SnakePlugin);
        app
    }

    #[test]
    fn pressed_key_steers_the_snake() {
        let config = GameConfig::for_grid(10, 10);
        let game = Game::new(&config, ScriptedRandom::new([0.0]));
        let mut app = app_with_game(game);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowUp);
        app.update();

        let game = app.world().resource::<Game>();
        assert_eq!(game.snake().heading(), Some(Direction::Up));
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn simultaneous_keys_resolve_in_polling_order() {
        let config = GameConfig::for_grid(10, 10);
        let game = Game::new(&config, ScriptedRandom::new([0.0]));
        let mut app = app_with_game(game);

        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.press(KeyCode::ArrowLeft);
        input.press(KeyCode::KeyD);
        input.press(KeyCode::ArrowUp);
        app.update();

        let game = app.world().resource::<Game>();
        assert_eq!(game.snake().heading(), Some(Direction::Up));
        assert_eq!(game.snake().head(), Position::new(5, 4));
    }

    #[test]
    fn first_frame_runs_a_tick() {
        let config = GameConfig::for_grid(10, 10);
        let mut game = Game::new(&config, ScriptedRandom::new([0.0]));
        game.handle_input(KeyCode::ArrowRight);
        let start = game.snake().head();
        let mut app = app_with_game(game);

        app.update();

        let game = app.world().resource::<Game>();
        assert_eq!(game.snake().head(), start.moved(Direction::Right));
    }
}
