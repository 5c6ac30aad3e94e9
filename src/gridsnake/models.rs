use serde::Serialize;

use crate::gridsnake::types::{Direction, Food, Point};

/// Read-model of one game for presentation layers. Only the live segments
/// are included, head first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width:     i64,
    pub height:    i64,
    pub segments:  Vec<Point>,
    pub direction: Direction,
    pub food:      Food,
    pub score:     i64,
    pub game_over: bool,
}
