pub mod coords;

pub use coords::{parse_coordinate, Coordinate, CoordinateParseError};
