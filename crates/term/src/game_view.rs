//! GameView: maps a [`SessionView`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, HighScore, SessionView};
use crate::fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, Phase, BOARD_HEIGHT, BOARD_WIDTH};

const SCORE_LABEL: &str = "Score: ";
const HIGH_SCORE_LABEL: &str = "High Score: ";

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

/// Screen color of a block.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(0, 255, 255),
        BlockColor::Yellow => Rgb::new(255, 255, 0),
        BlockColor::Magenta => Rgb::new(255, 0, 255),
        BlockColor::Red => Rgb::new(255, 0, 0),
        BlockColor::Green => Rgb::new(0, 255, 0),
        BlockColor::Blue => Rgb::new(0, 0, 255),
        BlockColor::Orange => Rgb::new(255, 165, 0),
    }
}

/// Where the board frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Board frame placement for a viewport: two text rows, then the bordered
    /// board, the whole block centered.
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        let block_h = h + 2;
        BoardRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(block_h) / 2 + 2,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, view: &SessionView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match view.phase {
            Phase::AwaitingStart => self.draw_start(fb, viewport),
            Phase::Playing => self.draw_play(fb, &view.game, view.best, viewport),
            Phase::NameEntry => self.draw_name_entry(fb, view.name_entry, viewport),
            Phase::GameOver => self.draw_game_over(fb, view.game.score, viewport),
            Phase::Exited => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &SessionView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_start(&self, fb: &mut FrameBuffer, vp: Viewport) {
        let text = CellStyle::default();
        fb.put_str_centered(0, vp.width, vp.height / 4, "TETRIS", text.bold());
        fb.put_str_centered(0, vp.width, vp.height / 2, "Press any key to begin", text);

        let hint = CellStyle::new(Rgb::GRAY, Rgb::BLACK);
        fb.put_str_centered(
            0,
            vp.width,
            vp.height * 3 / 4,
            "arrows/wasd/hjkl move, up rotates, down drops, q quits",
            hint,
        );
    }

    fn draw_name_entry(&self, fb: &mut FrameBuffer, name: &str, vp: Viewport) {
        let text = CellStyle::default();
        fb.put_str_centered(0, vp.width, vp.height / 3, "Enter your name:", text.bold());

        let name_w = name.chars().count() as u16 + 1;
        let x = vp.width.saturating_sub(name_w) / 2;
        let end = fb.put_str(x, vp.height / 2, name, text);
        fb.put_char(end, vp.height / 2, '_', text);

        fb.put_str_centered(0, vp.width, vp.height * 2 / 3, "Press ENTER when done", text);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, score: u32, vp: Viewport) {
        let text = CellStyle::default();
        fb.put_str_centered(0, vp.width, vp.height / 4, "GAME OVER", text.bold());
        self.draw_score_line(fb, 0, vp.width, vp.height / 2, score);
        fb.put_str_centered(
            0,
            vp.width,
            vp.height * 3 / 4,
            "Press any key to play again",
            text,
        );
    }

    fn draw_play(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, best: &HighScore, vp: Viewport) {
        let rect = self.board_rect(vp);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        draw_border(fb, rect, border);

        let grid = CellStyle::new(Rgb::GRAY, Rgb::BLACK);
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', CellStyle::new(block_rgb(*color), Rgb::BLACK)),
                    None => ('·', grid),
                };
                self.fill_cell(fb, rect, row as u16, col as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            let base = block_rgb(active.color);
            let style = CellStyle::new(base, base.darken(50)).bold();
            for (row, col) in active.cells() {
                if row >= 0 && col >= 0 && row < BOARD_HEIGHT as i8 && col < BOARD_WIDTH as i8 {
                    self.fill_cell(fb, rect, row as u16, col as u16, '▓', style);
                }
            }
        }

        let header_y = rect.y.saturating_sub(2);
        self.draw_score_line(fb, rect.x, rect.w, header_y, snap.score);
        if best.score > 0 {
            draw_high_score_line(fb, rect.x, rect.w, header_y + 1, best);
        }
    }

    fn draw_score_line(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, score: u32) {
        let style = CellStyle::default();
        let len = SCORE_LABEL.len() as u16 + decimal_width(score);
        let start = x.saturating_add(w.saturating_sub(len) / 2);
        let cx = fb.put_str(start, y, SCORE_LABEL, style);
        fb.put_u32(cx, y, score, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = rect.x + 1 + col * self.cell_w;
        let py = rect.y + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

/// `High Score: N (name)`
fn draw_high_score_line(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, best: &HighScore) {
    let style = CellStyle::default();
    let len = HIGH_SCORE_LABEL.len() as u16
        + decimal_width(best.score)
        + 3
        + best.name.chars().count() as u16;
    let start = x.saturating_add(w.saturating_sub(len) / 2);

    let mut cx = fb.put_str(start, y, HIGH_SCORE_LABEL, style);
    cx = fb.put_u32(cx, y, best.score, style);
    cx = fb.put_str(cx, y, " (", style);
    cx = fb.put_str(cx, y, &best.name, style);
    fb.put_char(cx, y, ')', style);
}

fn draw_border(fb: &mut FrameBuffer, rect: BoardRect, style: CellStyle) {
    let BoardRect { x, y, w, h } = rect;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
