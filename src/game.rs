//! Snake state machine: input, per-tick transitions, render commands

use crate::config::GameConfig;
use crate::display::GameKey;
use crate::geometry::Position;
use crate::renderer::Renderer;
use serde::{Deserialize, Serialize};

/// Uniform integer source, injected so the transition function stays
/// deterministic under test.
pub trait RandomSource {
    /// Uniformly distributed integer in the closed range `[min, max]`.
    fn gen_range(&mut self, min: i32, max: i32) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector in screen coordinates (y grows downward).
    pub fn vector(self) -> Position {
        match self {
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Paused,
    Running,
}

/// The whole mutable game state. Index 0 of the body is the tail, the last
/// element is the head. All positions are multiples of the segment size and
/// inside the board.
#[derive(Debug, Clone)]
pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub state: GameState,
}

/// Fixed-tick game driver. Consumes key events as they arrive and advances
/// one simulation + render step per `tick` call.
pub struct Game<R: RandomSource> {
    snake: Snake,
    config: GameConfig,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    /// Panics if the board dimensions are not positive multiples of the
    /// segment size.
    pub fn new(config: GameConfig, rng: R) -> Self {
        assert!(
            config.board_width > 0 && config.board_height > 0 && config.segment_size > 0,
            "board dimensions and segment size must be positive"
        );
        assert!(
            config.board_width % config.segment_size == 0
                && config.board_height % config.segment_size == 0,
            "board dimensions must be multiples of the segment size"
        );

        let mut game = Self {
            snake: Snake {
                body: Vec::new(),
                direction: config.initial_direction,
                food: Position::default(),
                state: GameState::Paused,
            },
            config,
            rng,
        };
        game.snake = game.fresh_snake();
        game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply a key press. Direction changes take effect at the next movement
    /// step; a change that would directly reverse the current direction is
    /// rejected. The pause key toggles Paused/Running.
    pub fn handle_key(&mut self, key: GameKey) {
        let snake = &mut self.snake;
        match key {
            GameKey::MoveRight if snake.direction != Direction::Left => {
                snake.direction = Direction::Right;
            },
            GameKey::MoveDown if snake.direction != Direction::Up => {
                snake.direction = Direction::Down;
            },
            GameKey::MoveLeft if snake.direction != Direction::Right => {
                snake.direction = Direction::Left;
            },
            GameKey::MoveUp if snake.direction != Direction::Down => {
                snake.direction = Direction::Up;
            },
            GameKey::TogglePause => {
                snake.state = match snake.state {
                    GameState::Paused => GameState::Running,
                    GameState::Running => GameState::Paused,
                };
            },
            _ => {},
        }
    }

    /// Run one simulation + render step. Returns `false` when a game-over or
    /// board-full condition replaced the snake instead; nothing is rendered
    /// on that tick and the previous frame stays on screen.
    pub fn tick(&mut self, renderer: &mut Renderer) -> bool {
        if self.is_game_over() || self.snake.body.len() == self.config.max_snake_length() {
            self.snake = self.fresh_snake();
            return false;
        }

        self.eat_food_if_possible();
        self.render(renderer);

        if self.snake.state != GameState::Paused {
            self.advance_head();
        }

        true
    }

    /// Self-collision: the head also appears somewhere in the body prefix
    /// that excludes the final (threshold - 1) elements. A snake shorter
    /// than the threshold can never reach itself.
    fn is_game_over(&self) -> bool {
        let body = &self.snake.body;
        let min_len = self.config.min_self_collision_len;
        if body.len() < min_len {
            return false;
        }

        let head = body[body.len() - 1];
        body[..body.len() - (min_len - 1)].contains(&head)
    }

    fn eat_food_if_possible(&mut self) {
        let head = self.snake.body[self.snake.body.len() - 1];
        if head == self.snake.food {
            self.snake.body.push(head);
            self.snake.food = next_food_position(&mut self.rng, &self.config, &self.snake.body);
        }
    }

    /// Paint the pre-movement state: background, one inset square per body
    /// segment, one inset square for the food.
    fn render(&self, renderer: &mut Renderer) {
        let config = &self.config;
        let snake_side = config.segment_size - config.snake_padding * 2;
        let food_side = config.segment_size - config.food_padding * 2;

        renderer.set_fill_color(config.background_color);
        renderer.clear();

        renderer.set_fill_color(config.snake_color);
        for segment in &self.snake.body {
            renderer.fill_rect(
                segment.x + config.snake_padding,
                segment.y + config.snake_padding,
                snake_side,
                snake_side,
            );
        }

        renderer.set_fill_color(config.food_color);
        renderer.fill_rect(
            self.snake.food.x + config.food_padding,
            self.snake.food.y + config.food_padding,
            food_side,
            food_side,
        );
    }

    /// Classic follow-the-leader movement: rotate the body one slot toward
    /// the tail, then overwrite the head slot with the new location.
    ///
    /// The wraparound branches are a mutually exclusive chain on purpose:
    /// a single axis-aligned step can only ever leave the board on one axis.
    fn advance_head(&mut self) {
        let snake = &mut self.snake;
        let step = snake.direction.vector() * self.config.segment_size;
        let mut new_head = snake.body[snake.body.len() - 1] + step;

        if new_head.x < 0 {
            new_head.x = self.config.board_width - self.config.segment_size;
        } else if new_head.x == self.config.board_width {
            new_head.x = 0;
        } else if new_head.y < 0 {
            new_head.y = self.config.board_height - self.config.segment_size;
        } else if new_head.y == self.config.board_height {
            new_head.y = 0;
        }

        snake.body.rotate_left(1);
        let last = snake.body.len() - 1;
        snake.body[last] = new_head;
    }

    /// Single head segment at the origin, paused, heading in the configured
    /// initial direction, with food placed off the body.
    fn fresh_snake(&mut self) -> Snake {
        let body = vec![Position::default()];
        let food = next_food_position(&mut self.rng, &self.config, &body);
        Snake {
            body,
            direction: self.config.initial_direction,
            food,
            state: GameState::Paused,
        }
    }
}

/// Uniform draw over all grid cells, redrawn while it lands on the body.
/// Terminates with probability 1 as long as at least one cell is free.
fn next_food_position<R: RandomSource>(
    rng: &mut R,
    config: &GameConfig,
    body: &[Position],
) -> Position {
    loop {
        let position = Position::new(
            rng.gen_range(0, config.grid_columns() - 1) * config.segment_size,
            rng.gen_range(0, config.grid_rows() - 1) * config.segment_size,
        );
        if !body.contains(&position) {
            return position;
        }
    }
}
