pub mod command;
pub mod config;
pub mod coordinates;
pub mod grid;
pub mod heading;
pub mod rover;

pub use command::{Command, CommandError, InputFilter};
pub use config::{ConfigError, RoverConfig};
pub use coordinates::Position;
pub use grid::{DEFAULT_CELL_SIZE, DEFAULT_GRID_MAX, GridBounds, GridError};
pub use heading::{Heading, TravelDirection};
pub use rover::{MoveStrategy, Outcome, RoverController, RoverState};
