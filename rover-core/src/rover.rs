//! Rover state machine.
//!
//! The controller owns the only mutable copy of [`RoverState`]. Every command
//! is applied atomically; a move that would cross the grid edge leaves the
//! state untouched and is not reported as an error.

use crate::command::Command;
use crate::config::{ConfigError, RoverConfig};
use crate::coordinates::Position;
use crate::grid::GridBounds;
use crate::heading::{Heading, TravelDirection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverState {
    pub position: Position,
    pub heading: Heading,
}

impl RoverState {
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }
}

impl Default for RoverState {
    fn default() -> Self {
        Self::new(Position::new(200, 250), Heading::FORWARD)
    }
}

/// How `MoveBackward` picks its direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStrategy {
    /// Both move commands travel the way the heading points.
    #[default]
    HeadingOnly,
    /// `MoveBackward` travels opposite to the heading.
    Reversing,
}

impl MoveStrategy {
    fn direction_for(self, command: Command, heading: Heading) -> TravelDirection {
        let ahead = heading.travel_direction();
        match (self, command) {
            (MoveStrategy::Reversing, Command::MoveBackward) => ahead.reversed(),
            _ => ahead,
        }
    }
}

/// What a command did. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Turned,
    Moved,
    Blocked,
}

#[derive(Debug, Clone)]
pub struct RoverController {
    grid: GridBounds,
    state: RoverState,
    strategy: MoveStrategy,
}

impl RoverController {
    /// Fails when `start` is not one of the grid's positions.
    pub fn new(
        grid: GridBounds,
        start: RoverState,
        strategy: MoveStrategy,
    ) -> Result<Self, ConfigError> {
        if !grid.contains(start.position) {
            return Err(ConfigError::StartOutsideGrid(start.position));
        }
        Ok(Self {
            grid,
            state: start,
            strategy,
        })
    }

    pub fn from_config(config: &RoverConfig) -> Result<Self, ConfigError> {
        Self::new(config.grid, config.start, config.move_strategy)
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn grid(&self) -> GridBounds {
        self.grid
    }

    pub fn apply_command(&mut self, command: Command) -> RoverState {
        self.apply_command_reporting(command).0
    }

    pub fn apply_command_reporting(&mut self, command: Command) -> (RoverState, Outcome) {
        let outcome = match command {
            Command::TurnLeft => {
                self.state.heading = self.state.heading.turn_left();
                Outcome::Turned
            }
            Command::TurnRight => {
                self.state.heading = self.state.heading.turn_right();
                Outcome::Turned
            }
            Command::MoveForward | Command::MoveBackward => {
                let direction = self.strategy.direction_for(command, self.state.heading);
                self.step(direction)
            }
        };
        (self.state, outcome)
    }

    fn step(&mut self, direction: TravelDirection) -> Outcome {
        if self.grid.at_edge(self.state.position, direction) {
            return Outcome::Blocked;
        }
        let (dx, dy) = direction.unit_delta();
        let cell = self.grid.cell_size();
        self.state.position = self.state.position.offset(dx * cell, dy * cell);
        Outcome::Moved
    }
}

impl Default for RoverController {
    fn default() -> Self {
        Self {
            grid: GridBounds::default(),
            state: RoverState::default(),
            strategy: MoveStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastrand::Rng;

    fn heading(degrees: i32) -> Heading {
        Heading::from_degrees(degrees).unwrap()
    }

    fn controller_at(x: i32, y: i32, degrees: i32, strategy: MoveStrategy) -> RoverController {
        RoverController::new(
            GridBounds::default(),
            RoverState::new(Position::new(x, y), heading(degrees)),
            strategy,
        )
        .unwrap()
    }

    #[test]
    fn rejects_start_off_the_grid() {
        for position in [Position::new(225, 0), Position::new(500, 0), Position::new(0, -50)] {
            let result = RoverController::new(
                GridBounds::default(),
                RoverState::new(position, heading(-90)),
                MoveStrategy::HeadingOnly,
            );
            assert_eq!(result.unwrap_err(), ConfigError::StartOutsideGrid(position));
        }
    }

    #[test]
    fn forward_moves_reach_top_edge_then_stop() {
        let mut rover = RoverController::default();
        for _ in 0..5 {
            rover.apply_command(Command::MoveForward);
        }
        assert_eq!(rover.state().position, Position::new(200, 0));

        let (state, outcome) = rover.apply_command_reporting(Command::MoveForward);
        assert_eq!(state.position, Position::new(200, 0));
        assert_eq!(outcome, Outcome::Blocked);
    }

    #[test]
    fn blocked_moves_are_idempotent_on_every_edge() {
        let cases = [(200, 0, 0), (450, 200, 90), (200, 450, 180), (0, 200, -90)];
        for (x, y, degrees) in cases {
            let mut rover = controller_at(x, y, degrees, MoveStrategy::HeadingOnly);
            let before = rover.state();
            for _ in 0..10 {
                assert_eq!(rover.apply_command(Command::MoveForward), before);
            }
        }
    }

    #[test]
    fn movement_follows_heading_not_command() {
        let mut rover = controller_at(200, 250, 90, MoveStrategy::HeadingOnly);
        let state = rover.apply_command(Command::MoveForward);
        assert_eq!(state.position, Position::new(250, 250));

        let mut rover = controller_at(200, 250, 270, MoveStrategy::HeadingOnly);
        let state = rover.apply_command(Command::MoveForward);
        assert_eq!(state.position, Position::new(150, 250));

        let mut rover = controller_at(200, 250, -180, MoveStrategy::HeadingOnly);
        let state = rover.apply_command(Command::MoveForward);
        assert_eq!(state.position, Position::new(200, 300));
    }

    #[test]
    fn turn_right_then_move_scenario() {
        let mut rover = RoverController::default();
        let turned = rover.apply_command(Command::TurnRight);
        assert_eq!(turned, RoverState::new(Position::new(200, 250), heading(90)));

        let moved = rover.apply_command(Command::MoveForward);
        assert_eq!(moved, RoverState::new(Position::new(250, 250), heading(90)));
    }

    #[test]
    fn heading_only_backward_matches_forward() {
        let mut forward = RoverController::default();
        let mut backward = RoverController::default();
        assert_eq!(
            forward.apply_command(Command::MoveForward),
            backward.apply_command(Command::MoveBackward)
        );
        assert_eq!(backward.state().position, Position::new(200, 200));
    }

    #[test]
    fn reversing_backward_travels_against_heading() {
        let mut rover = controller_at(200, 250, 0, MoveStrategy::Reversing);
        assert_eq!(
            rover.apply_command(Command::MoveBackward).position,
            Position::new(200, 300)
        );

        let mut rover = controller_at(450, 200, -90, MoveStrategy::Reversing);
        let (state, outcome) = rover.apply_command_reporting(Command::MoveBackward);
        assert_eq!(state.position, Position::new(450, 200));
        assert_eq!(outcome, Outcome::Blocked);
    }

    #[test]
    fn turns_never_move_the_rover() {
        let mut rover = RoverController::default();
        let (state, outcome) = rover.apply_command_reporting(Command::TurnLeft);
        assert_eq!(outcome, Outcome::Turned);
        assert_eq!(state.position, Position::new(200, 250));
        assert_eq!(state.heading.degrees(), -90);
    }

    #[test]
    fn random_command_sequences_stay_on_grid() {
        let commands = [
            Command::TurnLeft,
            Command::TurnRight,
            Command::MoveForward,
            Command::MoveBackward,
        ];
        for strategy in [MoveStrategy::HeadingOnly, MoveStrategy::Reversing] {
            let mut rng = Rng::with_seed(42);
            let mut rover = RoverController::new(
                GridBounds::default(),
                RoverState::default(),
                strategy,
            )
            .unwrap();
            for _ in 0..2_000 {
                let command = commands[rng.usize(..commands.len())];
                let state = rover.apply_command(command);
                assert!(rover.grid().contains(state.position), "{:?}", state);
                assert!(Heading::from_degrees(state.heading.degrees()).is_some());
            }
        }
    }
}
