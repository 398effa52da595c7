// view.rs - Rendering parameters and screen <-> grid geometry

use conway::{Cell, GridSize};
use egui::{Color32, Pos2, Rect, Vec2};

pub const DEFAULT_TILE_WIDTH: f32 = 15.0;

/// How boards are drawn. Fixed for the lifetime of the window except for
/// the colors, which the user can edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub tile_width: f32,
    pub spacing: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            spacing: 0.5,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl ViewConfig {
    /// Distance between the top-left corners of neighbouring tiles.
    pub fn pitch(&self) -> f32 {
        self.tile_width + self.spacing
    }

    /// Size of the painted board.
    pub fn board_size(&self, grid: GridSize) -> Vec2 {
        Vec2::splat(self.pitch() * grid.get() as f32 - self.spacing)
    }

    /// Screen rectangle of `cell` for a board whose top-left corner is `origin`.
    pub fn tile(&self, origin: Pos2, cell: Cell) -> Rect {
        let min = origin + Vec2::new(cell.x as f32, cell.y as f32) * self.pitch();
        Rect::from_min_size(min, Vec2::splat(self.tile_width))
    }

    /// Cell under `pos`, if it lies on the board.
    pub fn cell_at(&self, origin: Pos2, pos: Pos2, grid: GridSize) -> Option<Cell> {
        let offset = pos - origin;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }
        let cell = Cell::new((offset.x / self.pitch()) as u32, (offset.y / self.pitch()) as u32);
        grid.contains(cell).then_some(cell)
    }
}
