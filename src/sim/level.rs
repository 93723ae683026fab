//! Level descriptors and brick layout
//!
//! A descriptor is a text grid of tile codes, one row per line:
//! `0` is empty, `1` a solid brick, anything higher a breakable brick whose
//! code picks its tint. The grid is stretched to fill the whole view.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::shapes::Rect;
use crate::error::LevelError;

/// Tile code for an empty cell
pub const TILE_EMPTY: u32 = 0;
/// Tile code for an indestructible brick
pub const TILE_SOLID: u32 = 1;

/// Parsed tile grid, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGrid {
    rows: Vec<Vec<u32>>,
}

impl LevelGrid {
    /// Parse a whitespace-separated grid. Blank lines are skipped; all rows
    /// must have the same number of cells.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<u32>> = Vec::new();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row_index = rows.len();
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    token.parse::<u32>().map_err(|_| LevelError::InvalidTile {
                        row: row_index,
                        column,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LevelError::RaggedRow {
                        row: row_index,
                        expected: first.len(),
                        actual: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Iterate `(column, row, code)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &code)| (x, y, code))
        })
    }
}

/// A static rectangular obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Solid bricks are never destroyed and score nothing
    pub is_solid: bool,
    /// Set on first hit for breakable bricks; cleared only by reloading the level
    pub destroyed: bool,
    /// Sprite tint
    pub color: Vec3,
}

impl Brick {
    pub fn solid(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            is_solid: true,
            destroyed: false,
            color: Vec3::new(0.8, 0.8, 0.7),
        }
    }

    pub fn breakable(pos: Vec2, size: Vec2, code: u32) -> Self {
        Self {
            pos,
            size,
            is_solid: false,
            destroyed: false,
            color: breakable_color(code),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

fn breakable_color(code: u32) -> Vec3 {
    match code {
        2 => Vec3::new(0.2, 0.6, 1.0),
        3 => Vec3::new(0.0, 0.7, 0.0),
        4 => Vec3::new(0.8, 0.8, 0.4),
        5 => Vec3::new(1.0, 0.5, 0.0),
        _ => Vec3::ONE,
    }
}

/// The bricks of one level, in descriptor order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub bricks: Vec<Brick>,
}

impl Level {
    /// Parse a descriptor and lay it out over a `view_width` x `view_height` view
    pub fn load(descriptor: &str, view_width: f32, view_height: f32) -> Result<Self, LevelError> {
        let grid = LevelGrid::parse(descriptor)?;
        Ok(Self::from_grid(&grid, view_width, view_height))
    }

    /// One brick per non-empty cell, each cell `view / grid` in size
    pub fn from_grid(grid: &LevelGrid, view_width: f32, view_height: f32) -> Self {
        let unit = Vec2::new(
            view_width / grid.width() as f32,
            view_height / grid.height() as f32,
        );

        let bricks = grid
            .cells()
            .filter(|&(_, _, code)| code != TILE_EMPTY)
            .map(|(x, y, code)| {
                let pos = Vec2::new(unit.x * x as f32, unit.y * y as f32);
                if code == TILE_SOLID {
                    Brick::solid(pos, unit)
                } else {
                    Brick::breakable(pos, unit, code)
                }
            })
            .collect();

        Self { bricks }
    }

    /// Bricks still in play
    pub fn remaining(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }
}
