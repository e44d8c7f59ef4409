//! Data definitions for the stage RON content file.
//!
//! These structs mirror the structure in assets/data/stages.ron and are used
//! for deserialization. The StageRegistry provides lookup by stage index.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Stages (stages.ron)
// ============================================================================

/// Gameplay role of a solid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ground,
    Enemy,
    Coin,
    Item,
}

/// One parsed character of a stage row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Tile(TileKind),
    PlayerStart,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Tile(TileKind::Ground)),
            'E' => Some(Cell::Tile(TileKind::Enemy)),
            'C' => Some(Cell::Tile(TileKind::Coin)),
            'I' => Some(Cell::Tile(TileKind::Item)),
            'P' => Some(Cell::PlayerStart),
            _ => None,
        }
    }
}

/// A tile-grid stage. `rows[0]` is the top row of the map.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StageDef {
    pub index: usize,
    pub name: String,
    pub tile_size: f32,
    pub scale: f32,
    pub rows: Vec<String>,
}

impl StageDef {
    pub fn columns(&self) -> usize {
        self.rows.first().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// Edge length of one tile in world units (tile size times map scale).
    pub fn tile_extent(&self) -> f32 {
        self.tile_size * self.scale
    }

    /// Scaled map width; reaching it clears the stage.
    pub fn map_width(&self) -> f32 {
        self.columns() as f32 * self.tile_extent()
    }

    pub fn map_height(&self) -> f32 {
        self.rows.len() as f32 * self.tile_extent()
    }

    /// World-space center of a cell, with the map's bottom-left corner at the origin.
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        let extent = self.tile_extent();
        let flipped_row = self.rows.len() - row - 1;
        Vec2::new(
            (col as f32 + 0.5) * extent,
            (flipped_row as f32 + 0.5) * extent,
        )
    }

    /// Every recognised cell as (column, row, cell). Unknown characters are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter_map(move |(col, c)| Cell::from_char(c).map(|cell| (col, row, cell)))
        })
    }

    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.cells().filter_map(|(col, row, cell)| match cell {
            Cell::Tile(kind) => Some((col, row, kind)),
            _ => None,
        })
    }

    pub fn player_start(&self) -> Option<Vec2> {
        self.cells()
            .find(|(_, _, cell)| *cell == Cell::PlayerStart)
            .map(|(col, row, _)| self.cell_center(col, row))
    }
}
