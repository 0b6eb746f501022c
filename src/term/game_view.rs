//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::tank::Tank;
use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the 416x416 world into terminal cells.
pub struct GameView {
    /// Maze tile width in terminal columns.
    cell_w: u16,
    /// Maze tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WALL: CellStyle = CellStyle {
    fg: Rgb::new(150, 75, 0),
    bg: Rgb::new(20, 20, 25),
    bold: false,
};
const PLAYER: CellStyle = CellStyle {
    fg: Rgb::new(0, 255, 0),
    bg: Rgb::new(20, 20, 25),
    bold: true,
};
const ENEMY: CellStyle = CellStyle {
    fg: Rgb::new(255, 0, 0),
    bg: Rgb::new(20, 20, 25),
    bold: true,
};
const BULLET: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 0),
    bg: Rgb::new(20, 20, 25),
    bold: false,
};
const FLOOR: CellStyle = CellStyle {
    fg: Rgb::new(60, 60, 70),
    bg: Rgb::new(20, 20, 25),
    bold: false,
};
const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};
const VALUE: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = GRID_WIDTH as u16 * self.cell_w;
        let board_h = GRID_HEIGHT as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', FLOOR);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        for wall in &state.obstacles {
            let (cx, cy) = self.world_to_cell(wall.x, wall.y);
            fb.fill_rect(
                start_x + 1 + cx,
                start_y + 1 + cy,
                self.cell_w,
                self.cell_h,
                '█',
                WALL,
            );
        }

        if state.enemy.alive {
            self.draw_tank(&mut fb, start_x, start_y, &state.enemy, ENEMY);
        }
        if state.player.alive {
            self.draw_tank(&mut fb, start_x, start_y, &state.player, PLAYER);
        }

        for bullet in state.bullets.live() {
            let (bx, by) = bullet.rect.center();
            let (cx, cy) = self.world_to_cell(bx, by);
            fb.put_char(start_x + 1 + cx, start_y + 1 + cy, '•', BULLET);
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);
        fb
    }

    /// World units to board-local terminal cells.
    fn world_to_cell(&self, x: i32, y: i32) -> (u16, u16) {
        let cx = (x.max(0) * self.cell_w as i32 / TILE_SIZE) as u16;
        let cy = (y.max(0) * self.cell_h as i32 / TILE_SIZE) as u16;
        (cx, cy)
    }

    fn draw_tank(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        tank: &Tank,
        style: CellStyle,
    ) {
        let glyph = match tank.facing {
            Direction::Up => '▲',
            Direction::Down => '▼',
            Direction::Left => '◀',
            Direction::Right => '▶',
        };
        let (cx, cy) = self.world_to_cell(tank.rect.x, tank.rect.y);
        fb.fill_rect(
            start_x + 1 + cx,
            start_y + 1 + cy,
            self.cell_w,
            self.cell_h,
            glyph,
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "TICK", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.tick_count), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ENEMY", LABEL);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            if state.enemy.alive { "alive" } else { "down" },
            VALUE,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SHOTS", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.bullets.live_count()), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "arrows move", VALUE);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "space fires", VALUE);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quits", VALUE);
    }
}
