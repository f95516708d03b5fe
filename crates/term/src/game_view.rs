//! GameView: draws a [`Session`] into a [`FrameBuffer`].
//!
//! Pure (no I/O). Each grid cell is two terminal columns wide so blocks look
//! roughly square.

use crossterm::style::Color;

use crate::core::{block_offsets, Block, Shape};
use crate::engine::Session;
use crate::fb::{FrameBuffer, Style};
use crate::types::{BlockColor, GamePhase, NUM_COLUMNS, NUM_ROWS};

const CELL_W: u16 = 2;
const WELL_W: u16 = NUM_COLUMNS as u16 * CELL_W + 2;
const WELL_H: u16 = NUM_ROWS as u16 + 2;
const PANEL_GAP: u16 = 3;
const PANEL_W: u16 = 16;

/// Smallest terminal that fits the whole view
pub const MIN_WIDTH: u16 = WELL_W + PANEL_GAP + PANEL_W;
pub const MIN_HEIGHT: u16 = WELL_H;

const BACKGROUND: Style = Style::new(Color::DarkGrey, Color::Black);
const BORDER: Style = Style::new(Color::White, Color::Black);
const LABEL: Style = Style::new(Color::DarkGrey, Color::Black);
const VALUE: Style = Style::new(Color::White, Color::Black).bold();
const BANNER: Style = Style::new(Color::Black, Color::Yellow).bold();

pub fn block_style(color: BlockColor) -> Style {
    let fg = match color {
        BlockColor::Blue => Color::Rgb { r: 60, g: 110, b: 230 },
        BlockColor::Orange => Color::Rgb { r: 240, g: 150, b: 40 },
        BlockColor::Purple => Color::Rgb { r: 160, g: 70, b: 210 },
        BlockColor::Red => Color::Rgb { r: 220, g: 50, b: 50 },
        BlockColor::Teal => Color::Rgb { r: 40, g: 190, b: 180 },
        BlockColor::Yellow => Color::Rgb { r: 235, g: 215, b: 50 },
    };
    Style::new(fg, Color::Black)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Top-left corner of the well border
    origin: (u16, u16),
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center the view in a terminal of the given size
    pub fn centered(width: u16, height: u16) -> Self {
        Self {
            origin: (
                width.saturating_sub(MIN_WIDTH) / 2,
                height.saturating_sub(MIN_HEIGHT) / 2,
            ),
        }
    }

    pub fn render(&self, session: &Session, fb: &mut FrameBuffer) {
        let game = session.game();
        let (ox, oy) = self.origin;

        self.draw_well(fb);
        for block in game.grid().blocks() {
            self.draw_block(fb, block);
        }
        if let Some(shape) = game.falling_shape() {
            for block in shape.blocks() {
                self.draw_block(fb, block);
            }
        }

        let px = ox + WELL_W + PANEL_GAP;
        fb.put_str(px, oy + 1, "NEXT", LABEL);
        if let Some(next) = game.next_shape() {
            draw_preview(fb, next, px, oy + 3);
        }

        let stats = session.stats();
        let rows = [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("LINES", stats.lines_cleared),
            ("GROUPS", stats.groups_removed),
            ("TICK MS", session.tick_ms()),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = oy + 8 + i as u16 * 2;
            fb.put_str(px, y, label, LABEL);
            fb.put_str(px + 8, y, &value.to_string(), VALUE);
        }

        let banner = match game.phase() {
            GamePhase::GameOver => Some(" GAME OVER - r "),
            GamePhase::NotStarted => Some(" PRESS r "),
            GamePhase::Playing if session.is_paused() => Some(" PAUSED "),
            GamePhase::Playing => None,
        };
        if let Some(text) = banner {
            let x = ox + (WELL_W.saturating_sub(text.len() as u16)) / 2;
            fb.put_str(x, oy + WELL_H / 2, text, BANNER);
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer) {
        let (ox, oy) = self.origin;
        let right = ox + WELL_W - 1;
        let bottom = oy + WELL_H - 1;

        for y in oy + 1..bottom {
            fb.put(ox, y, '│', BORDER);
            fb.put(right, y, '│', BORDER);
            for column in 0..NUM_COLUMNS as u16 {
                let x = ox + 1 + column * CELL_W;
                fb.put(x, y, ' ', BACKGROUND);
                fb.put(x + 1, y, '·', BACKGROUND);
            }
        }
        for x in ox + 1..right {
            fb.put(x, oy, '─', BORDER);
            fb.put(x, bottom, '─', BORDER);
        }
        fb.put(ox, oy, '┌', BORDER);
        fb.put(right, oy, '┐', BORDER);
        fb.put(ox, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, block: &Block) {
        if block.column < 0 || block.row < 0 {
            return;
        }
        let (ox, oy) = self.origin;
        let x = ox + 1 + block.column as u16 * CELL_W;
        let y = oy + 1 + block.row as u16;
        let style = block_style(block.color);
        fb.put(x, y, '█', style);
        fb.put(x + 1, y, '█', style);
    }
}

/// Draw a shape from its orientation table, bounding box top-left at (x, y)
fn draw_preview(fb: &mut FrameBuffer, shape: &Shape, x: u16, y: u16) {
    let style = shape
        .blocks()
        .first()
        .map(|b| block_style(b.color))
        .unwrap_or_default();
    let offsets = block_offsets(shape.kind(), shape.orientation());
    let min_c = offsets.iter().map(|o| o.0).min().unwrap_or(0);
    let min_r = offsets.iter().map(|o| o.1).min().unwrap_or(0);
    for &(dc, dr) in offsets {
        let cx = x + (dc - min_c) as u16 * CELL_W;
        let cy = y + (dr - min_r) as u16;
        fb.put(cx, cy, '█', style);
        fb.put(cx + 1, cy, '█', style);
    }
}
