//! Headless grid-game engines for the terminal arcade: Snake and Tron
//! light cycles.
//!
//! Both engines are pure state machines driven by an external fixed-interval
//! scheduler: the UI layer owns the 150ms timer and calls [`SnakeGame::tick`]
//! or [`TronGame::tick`], then renders from read-only accessors. Collision is
//! a terminal state, never an error; after game over only teardown applies.

mod grid;
mod snake;
mod tron;

pub use grid::{Direction, Position, SNAKE_GRID_SIZE, TICK_INTERVAL_MS, TRON_GRID_SIZE};
pub use snake::SnakeGame;
pub use tron::{TronGame, Winner};
