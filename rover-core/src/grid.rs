use crate::coordinates::Position;
use crate::heading::TravelDirection;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SIZE: i32 = 50;
pub const DEFAULT_GRID_MAX: i32 = 450;

/// Square grid spanning `0..=max` on both axes in steps of `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridBounds")]
pub struct GridBounds {
    cell_size: i32,
    max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NonPositiveCellSize(i32),
    NegativeMax(i32),
    MisalignedMax { max: i32, cell_size: i32 },
    TooLarge { max: i32, cell_size: i32 },
}

#[derive(Deserialize)]
struct RawGridBounds {
    cell_size: i32,
    max: i32,
}

impl TryFrom<RawGridBounds> for GridBounds {
    type Error = String;

    fn try_from(raw: RawGridBounds) -> Result<Self, Self::Error> {
        GridBounds::new(raw.cell_size, raw.max).map_err(|err| format!("{:?}", err))
    }
}

impl GridBounds {
    pub fn new(cell_size: i32, max: i32) -> Result<Self, GridError> {
        if cell_size <= 0 {
            return Err(GridError::NonPositiveCellSize(cell_size));
        }
        if max < 0 {
            return Err(GridError::NegativeMax(max));
        }
        if max % cell_size != 0 {
            return Err(GridError::MisalignedMax { max, cell_size });
        }
        if max.checked_add(cell_size).is_none() {
            return Err(GridError::TooLarge { max, cell_size });
        }
        Ok(Self { cell_size, max })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn cells_per_axis(&self) -> i32 {
        self.max / self.cell_size + 1
    }

    /// Outer extent in logical units, one cell past the last position.
    pub fn extent(&self) -> i32 {
        self.max + self.cell_size
    }

    pub fn contains(&self, position: Position) -> bool {
        let on_axis = |value: i32| {
            (0..=self.max).contains(&value) && value % self.cell_size == 0
        };
        on_axis(position.x) && on_axis(position.y)
    }

    pub fn at_edge(&self, position: Position, direction: TravelDirection) -> bool {
        match direction {
            TravelDirection::Up => position.y == 0,
            TravelDirection::Right => position.x == self.max,
            TravelDirection::Down => position.y == self.max,
            TravelDirection::Left => position.x == 0,
        }
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max: DEFAULT_GRID_MAX,
        }
    }
}
