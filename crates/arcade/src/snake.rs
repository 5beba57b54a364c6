//! Snake engine: one growing entity, one food cell, wall/self collision.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Direction, Position, SNAKE_GRID_SIZE};

const INITIAL_HEAD: Position = Position::new(10, 10);
const INITIAL_FOOD: Position = Position::new(5, 5);

/// Snake game state. Advanced by [`SnakeGame::tick`] on the caller's
/// fixed-interval scheduler; all accessors are read-only snapshots.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Occupied cells, head first.
    body: Vec<Position>,
    heading: Direction,
    food: Position,
    score: u32,
    game_over: bool,
    grid_size: i32,
    rng: SmallRng,
}

impl SnakeGame {
    /// Creates a fresh game. `seed` drives food placement so replays and
    /// tests are deterministic.
    pub fn new(seed: u64) -> Self {
        Self {
            body: vec![INITIAL_HEAD],
            heading: Direction::Up,
            food: INITIAL_FOOD,
            score: 0,
            game_over: false,
            grid_size: SNAKE_GRID_SIZE,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Requests a heading change. A direct reversal of the current heading
    /// is silently rejected, as is any input after game over. Nothing else
    /// is validated; steering into the body is allowed and resolved by the
    /// next tick.
    pub fn set_heading(&mut self, heading: Direction) {
        if self.game_over || heading == self.heading.opposite() {
            return;
        }
        self.heading = heading;
    }

    /// Advances the simulation one step.
    ///
    /// The self-collision check runs against the pre-move body, including
    /// the tail cell that is about to be dropped on a non-growing move.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        let next = self.head().step(self.heading);
        if !next.in_bounds(self.grid_size) || self.body.contains(&next) {
            self.game_over = true;
            return;
        }

        self.body.insert(0, next);
        if next == self.food {
            self.score += 1;
            self.respawn_food();
        } else {
            self.body.pop();
        }
    }

    // Uniform per axis over the full grid; landing on the body is allowed.
    fn respawn_food(&mut self) {
        self.food = Position::new(
            self.rng.random_range(0..self.grid_size),
            self.rng.random_range(0..self.grid_size),
        );
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_with_single_segment_heading_up() {
        let game = SnakeGame::new(0);
        assert_eq!(game.body(), &[Position::new(10, 10)]);
        assert_eq!(game.heading(), Direction::Up);
        assert_eq!(game.food(), Position::new(5, 5));
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_over());
    }

    #[test]
    fn reversal_input_is_rejected_for_every_heading() {
        for heading in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut game = SnakeGame::new(0);
            game.heading = heading;
            game.set_heading(heading.opposite());
            assert_eq!(game.heading(), heading);
        }
    }

    #[test]
    fn perpendicular_input_is_accepted() {
        let mut game = SnakeGame::new(0);
        game.set_heading(Direction::Left);
        assert_eq!(game.heading(), Direction::Left);
    }

    #[test]
    fn eating_food_grows_and_scores_and_resamples() {
        let mut game = SnakeGame::new(7);
        game.body = vec![Position::new(5, 5)];
        game.food = Position::new(6, 5);
        game.heading = Direction::Right;

        game.tick();

        assert_eq!(game.body(), &[Position::new(6, 5), Position::new(5, 5)]);
        assert_eq!(game.score(), 1);
        assert!(game.food().in_bounds(SNAKE_GRID_SIZE));
    }

    #[test]
    fn food_respawn_is_deterministic_under_a_seed() {
        let run = |seed: u64| {
            let mut game = SnakeGame::new(seed);
            game.body = vec![Position::new(5, 5)];
            game.food = Position::new(6, 5);
            game.heading = Direction::Right;
            game.tick();
            game.food()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn moving_without_food_keeps_length_constant() {
        let mut game = SnakeGame::new(0);
        game.body = vec![Position::new(5, 5), Position::new(5, 6)];
        game.heading = Direction::Up;

        game.tick();

        assert_eq!(game.body(), &[Position::new(5, 4), Position::new(5, 5)]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn hitting_the_wall_ends_the_game_with_body_unchanged() {
        let mut game = SnakeGame::new(0);
        game.body = vec![Position::new(0, 0)];
        game.heading = Direction::Left;

        game.tick();

        assert!(game.is_game_over());
        assert_eq!(game.body(), &[Position::new(0, 0)]);
    }

    #[test]
    fn self_collision_includes_the_tail_cell_about_to_drop() {
        // Head at (5,5) turning into a ring; the target cell (5,6) is the
        // current tail, which a post-drop check would treat as free.
        let mut game = SnakeGame::new(0);
        game.body = vec![
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ];
        game.heading = Direction::Down;

        game.tick();

        assert!(game.is_game_over());
        assert_eq!(game.body().len(), 4);
    }

    #[test]
    fn ticks_after_game_over_are_inert() {
        let mut game = SnakeGame::new(0);
        game.body = vec![Position::new(0, 0)];
        game.heading = Direction::Left;
        game.tick();
        let frozen = game.body().to_vec();

        game.tick();
        game.set_heading(Direction::Down);
        game.tick();

        assert!(game.is_game_over());
        assert_eq!(game.body(), frozen.as_slice());
        assert_eq!(game.heading(), Direction::Left);
    }
}
