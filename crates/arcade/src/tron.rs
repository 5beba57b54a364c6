//! Tron light-cycle engine: two entities, ever-growing trails, and a greedy
//! chase opponent.

use crate::grid::{Direction, Position, TRON_GRID_SIZE};

const PLAYER_START: Position = Position::new(5, 5);
const OPPONENT_START: Position = Position::new(34, 34);

/// Terminal outcome of a Tron round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
}

#[derive(Debug, Clone)]
struct Cycle {
    position: Position,
    heading: Direction,
    /// Every cell this cycle has occupied, current position included.
    trail: Vec<Position>,
}

impl Cycle {
    fn new(position: Position, heading: Direction) -> Self {
        Self {
            position,
            heading,
            trail: vec![position],
        }
    }

    fn advance(&mut self, next: Position) {
        self.position = next;
        self.trail.push(next);
    }
}

/// Tron game state. Both cycles advance once per [`TronGame::tick`].
#[derive(Debug, Clone)]
pub struct TronGame {
    player: Cycle,
    opponent: Cycle,
    winner: Option<Winner>,
    grid_size: i32,
}

impl Default for TronGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TronGame {
    pub fn new() -> Self {
        Self {
            player: Cycle::new(PLAYER_START, Direction::Right),
            opponent: Cycle::new(OPPONENT_START, Direction::Left),
            winner: None,
            grid_size: TRON_GRID_SIZE,
        }
    }

    /// Player steering input. A direct 180-degree reversal is silently
    /// rejected, as is any input after the round has ended.
    pub fn steer(&mut self, heading: Direction) {
        if self.winner.is_some() || heading == self.player.heading.opposite() {
            return;
        }
        self.player.heading = heading;
    }

    /// Advances both cycles one step.
    ///
    /// Each cycle's move is validated against the snapshot of both trails
    /// taken before this tick's extensions, so neither look-ahead accounts
    /// for the other's simultaneous move. The player's failure check runs
    /// first (winner = Opponent), then the opponent's (winner = Player);
    /// when both fail in the same tick the later verdict stands.
    pub fn tick(&mut self) {
        if self.winner.is_some() {
            return;
        }

        self.opponent.heading = self.choose_opponent_heading();

        let player_next = self.player.position.step(self.player.heading);
        let opponent_next = self.opponent.position.step(self.opponent.heading);
        let player_blocked = self.is_blocked(player_next);
        let opponent_blocked = self.is_blocked(opponent_next);

        let mut winner = None;
        if player_blocked {
            winner = Some(Winner::Opponent);
        }
        if opponent_blocked {
            winner = Some(Winner::Player);
        }

        if !player_blocked {
            self.player.advance(player_next);
        }
        if !opponent_blocked {
            self.opponent.advance(opponent_next);
        }
        self.winner = winner;
    }

    // Greedy chase: close the axis with the strictly larger absolute
    // distance, ties toward the y axis. When the chosen cell is blocked,
    // try Up/Down/Left/Right in that order, skipping the current heading;
    // when nothing is free keep the greedy (losing) choice.
    fn choose_opponent_heading(&self) -> Direction {
        let dx = self.player.position.x - self.opponent.position.x;
        let dy = self.player.position.y - self.opponent.position.y;

        let mut heading = if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };

        if self.is_blocked(self.opponent.position.step(heading)) {
            for candidate in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                if candidate == self.opponent.heading {
                    continue;
                }
                if !self.is_blocked(self.opponent.position.step(candidate)) {
                    heading = candidate;
                    break;
                }
            }
        }
        heading
    }

    fn is_blocked(&self, cell: Position) -> bool {
        !cell.in_bounds(self.grid_size)
            || self.player.trail.contains(&cell)
            || self.opponent.trail.contains(&cell)
    }

    pub fn player_position(&self) -> Position {
        self.player.position
    }

    pub fn player_heading(&self) -> Direction {
        self.player.heading
    }

    pub fn player_trail(&self) -> &[Position] {
        &self.player.trail
    }

    pub fn opponent_position(&self) -> Position {
        self.opponent.position
    }

    pub fn opponent_heading(&self) -> Direction {
        self.opponent.heading
    }

    pub fn opponent_trail(&self) -> &[Position] {
        &self.opponent.trail
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
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
    fn opening_positions_and_trails() {
        let game = TronGame::new();
        assert_eq!(game.player_position(), Position::new(5, 5));
        assert_eq!(game.player_heading(), Direction::Right);
        assert_eq!(game.player_trail(), &[Position::new(5, 5)]);
        assert_eq!(game.opponent_position(), Position::new(34, 34));
        assert_eq!(game.opponent_heading(), Direction::Left);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn player_reversal_input_is_rejected() {
        let mut game = TronGame::new();
        game.steer(Direction::Left);
        assert_eq!(game.player_heading(), Direction::Right);

        game.steer(Direction::Up);
        assert_eq!(game.player_heading(), Direction::Up);
        game.steer(Direction::Down);
        assert_eq!(game.player_heading(), Direction::Up);
    }

    #[test]
    fn trails_grow_by_one_cell_per_tick_and_never_truncate() {
        let mut game = TronGame::new();
        game.tick();
        game.tick();
        assert_eq!(game.player_trail().len(), 3);
        assert_eq!(game.opponent_trail().len(), 3);
        assert_eq!(game.player_trail()[0], Position::new(5, 5));
    }

    #[test]
    fn opponent_closes_the_strictly_larger_axis() {
        let mut game = TronGame::new();
        game.opponent = Cycle::new(Position::new(0, 0), Direction::Down);
        game.player = Cycle::new(Position::new(3, 1), Direction::Down);

        game.tick();

        // |dx| = 3 > |dy| = 1, dx positive: Right, not Down.
        assert_eq!(game.opponent_position(), Position::new(1, 0));
        assert_eq!(game.opponent_heading(), Direction::Right);
    }

    #[test]
    fn distance_ties_break_toward_the_y_axis() {
        let mut game = TronGame::new();
        game.opponent = Cycle::new(Position::new(0, 0), Direction::Right);
        game.player = Cycle::new(Position::new(2, 2), Direction::Down);

        game.tick();

        assert_eq!(game.opponent_position(), Position::new(0, 1));
        assert_eq!(game.opponent_heading(), Direction::Down);
    }

    #[test]
    fn blocked_greedy_choice_falls_back_to_the_free_direction() {
        let mut game = TronGame::new();
        // Corner at (0,0): Up and Left are out of bounds, the greedy Right
        // target (1,0) is on the player's trail, so only Down remains.
        game.opponent = Cycle::new(Position::new(0, 0), Direction::Right);
        game.player = Cycle::new(Position::new(3, 0), Direction::Down);
        game.player.trail = vec![Position::new(1, 0), Position::new(3, 0)];

        game.tick();

        assert_eq!(game.opponent_position(), Position::new(0, 1));
        assert_eq!(game.opponent_heading(), Direction::Down);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn boxed_in_opponent_keeps_the_losing_heading_and_loses() {
        let mut game = TronGame::new();
        game.opponent = Cycle::new(Position::new(0, 0), Direction::Left);
        game.opponent.trail = vec![
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(0, 0),
        ];
        game.player = Cycle::new(Position::new(0, 3), Direction::Down);

        game.tick();

        assert_eq!(game.winner(), Some(Winner::Player));
        assert_eq!(game.opponent_position(), Position::new(0, 0));
        // The surviving cycle still completed its move this tick.
        assert_eq!(game.player_position(), Position::new(0, 4));
        assert_eq!(game.player_trail().len(), 2);
    }

    #[test]
    fn player_wall_crash_hands_the_round_to_the_opponent() {
        let mut game = TronGame::new();
        game.player = Cycle::new(Position::new(0, 0), Direction::Up);
        game.opponent = Cycle::new(Position::new(20, 20), Direction::Left);

        game.tick();

        assert_eq!(game.winner(), Some(Winner::Opponent));
        assert_eq!(game.player_position(), Position::new(0, 0));
    }

    #[test]
    fn simultaneous_failure_resolves_to_the_last_evaluated_check() {
        let mut game = TronGame::new();
        // Player exits the arena; the opponent is walled into a corner so
        // both failure checks fire in the same tick. The opponent's check
        // runs last, so its verdict (winner = Player) stands.
        game.player = Cycle::new(Position::new(0, 0), Direction::Left);
        game.opponent = Cycle::new(Position::new(39, 39), Direction::Left);
        game.opponent.trail = vec![
            Position::new(39, 38),
            Position::new(38, 39),
            Position::new(39, 39),
        ];

        game.tick();

        assert_eq!(game.winner(), Some(Winner::Player));
    }

    #[test]
    fn both_cycles_may_enter_the_same_free_cell_in_one_tick() {
        let mut game = TronGame::new();
        // Pre-tick trail snapshots do not see the other's simultaneous
        // move, so a convergence onto one empty cell is not a collision.
        game.player = Cycle::new(Position::new(9, 10), Direction::Right);
        game.opponent = Cycle::new(Position::new(11, 10), Direction::Left);

        game.tick();

        assert_eq!(game.winner(), None);
        assert_eq!(game.player_position(), Position::new(10, 10));
        assert_eq!(game.opponent_position(), Position::new(10, 10));
    }

    #[test]
    fn ticks_after_the_round_ends_are_inert() {
        let mut game = TronGame::new();
        game.player = Cycle::new(Position::new(0, 0), Direction::Up);
        game.tick();
        assert!(game.is_game_over());
        let player_trail = game.player_trail().to_vec();
        let opponent_trail = game.opponent_trail().to_vec();

        game.tick();
        game.steer(Direction::Down);
        game.tick();

        assert_eq!(game.player_trail(), player_trail.as_slice());
        assert_eq!(game.opponent_trail(), opponent_trail.as_slice());
    }
}
