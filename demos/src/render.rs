//! Console and PPM renderings of a searched grid.

use std::path::Path;

use gridstar_core::{CellState, Grid};
use image::{ImageFormat, Rgb, RgbImage};

pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Unvisited => '⬜',
        CellState::Open => '🟧',
        CellState::Closed => '🟫',
        CellState::Blocked => '🟥',
        CellState::OnPath => '🟩',
    }
}

pub fn color(state: CellState) -> Rgb<u8> {
    match state {
        CellState::Unvisited => Rgb([255, 255, 255]),
        CellState::Open => Rgb([255, 165, 0]),
        CellState::Closed => Rgb([139, 90, 43]),
        CellState::Blocked => Rgb([200, 30, 30]),
        CellState::OnPath => Rgb([40, 180, 60]),
    }
}

/// One line per row, glyphs separated by spaces.
pub fn grid_to_string(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 6);
    for (p, cell) in grid.iter() {
        out.push(glyph(cell.state));
        out.push(' ');
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Pixels per cell so that the smaller image side reaches `min_res`.
pub fn image_scale(width: i32, height: i32, min_res: u32) -> u32 {
    let short = width.min(height).max(1) as u32;
    (min_res / short).max(1)
}

/// Draw every cell as a `scale × scale` block.
pub fn grid_to_image(grid: &Grid, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let w = grid.width() as u32 * scale;
    let h = grid.height() as u32 * scale;
    RgbImage::from_fn(w, h, |px, py| {
        let idx = (py / scale) as usize * grid.width() as usize + (px / scale) as usize;
        color(grid.cells()[idx].state)
    })
}

pub fn save_ppm(grid: &Grid, scale: u32, path: &Path) -> image::ImageResult<()> {
    grid_to_image(grid, scale).save_with_format(path, ImageFormat::Pnm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Point;

    #[test]
    fn console_rows() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_blocked(Point::new(1, 0), true).unwrap();
        let s = grid_to_string(&grid);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "⬜ 🟥 ⬜ ");
        assert_eq!(lines[1], "⬜ ⬜ ⬜ ");
    }

    #[test]
    fn console_shows_each_state() {
        let mut grid = Grid::new(5, 1).unwrap();
        let states = [
            CellState::Unvisited,
            CellState::Open,
            CellState::Closed,
            CellState::Blocked,
            CellState::OnPath,
        ];
        for (cell, state) in grid.cells_mut().iter_mut().zip(states) {
            cell.state = state;
        }
        assert_eq!(grid_to_string(&grid), "⬜ 🟧 🟫 🟥 🟩 \n");
    }

    #[test]
    fn scale_reaches_min_resolution() {
        assert_eq!(image_scale(50, 50, 300), 6);
        assert_eq!(image_scale(50, 10, 300), 30);
        assert_eq!(image_scale(600, 400, 300), 1);
    }

    #[test]
    fn image_blocks_follow_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_blocked(Point::new(1, 1), true).unwrap();
        let img = grid_to_image(&grid, 3);
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(*img.get_pixel(0, 0), color(CellState::Unvisited));
        assert_eq!(*img.get_pixel(5, 5), color(CellState::Blocked));
        assert_eq!(*img.get_pixel(3, 3), color(CellState::Blocked));
        assert_eq!(*img.get_pixel(2, 3), color(CellState::Unvisited));
    }
}
