//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::scores::HighScores;
use crate::types::{Point, BOARD_COLS, BOARD_ROWS};

/// High-score rows listed in the side panel
const PANEL_SCORES: usize = 5;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [&str; 5] = [
    "A/D  move",
    "S    drop",
    "Q/E  rotate",
    "ARROWS snake",
    "R/G/ESC",
];

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

/// Pending leaderboard entry shown over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePrompt<'a> {
    pub name: &'a str,
    pub rank: usize,
}

/// Things drawn beside the game that the snapshot does not carry
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelExtras<'a> {
    pub high_scores: Option<&'a HighScores>,
    pub name_prompt: Option<NamePrompt<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the shared board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_COLS as u16) * self.cell_w + 2,
            (BOARD_ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the border
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Top-left terminal position of board cell `(x, y)`
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let (fx, fy) = self.frame_origin(viewport);
        (fx + 1 + x * self.cell_w, fy + 1 + y * self.cell_h)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        extras: &PanelExtras<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        let border = if snap.disable_game_over {
            CellStyle::new(Rgb::new(120, 200, 255), PANEL_BG)
        } else {
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
        };
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        let solid = CellStyle::new(Rgb::new(170, 170, 180), PLAY_BG);
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = if cell.is_solid() {
                    ('█', solid)
                } else {
                    ('·', empty)
                };
                self.fill_cell(fb, viewport, x as u16, y as u16, ch, style);
            }
        }

        let active = CellStyle::new(Rgb::from_array(snap.active.color), PLAY_BG).bold();
        for p in snap.active.cells {
            self.fill_point(fb, viewport, p, '█', active);
        }

        if let Some(apple) = snap.apple {
            let style = CellStyle::new(Rgb::new(230, 60, 60), PLAY_BG).bold();
            self.fill_point(fb, viewport, apple, '●', style);
        }

        let body = CellStyle::new(Rgb::new(60, 180, 60), PLAY_BG);
        for &p in snap.snake.iter().skip(1) {
            self.fill_point(fb, viewport, p, '▓', body);
        }
        if let Some(&head) = snap.snake.first() {
            let style = CellStyle::new(Rgb::new(140, 255, 140), PLAY_BG).bold();
            self.fill_point(fb, viewport, head, '█', style);
        }

        self.draw_side_panel(fb, snap, extras, viewport, start_x + frame_w + 2, start_y);

        if let Some(prompt) = extras.name_prompt {
            draw_name_prompt(fb, start_x, start_y, frame_w, frame_h, prompt);
        } else if let Some(reason) = snap.game_over {
            let lines = ["GAME OVER", reason.as_str(), "R to restart"];
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        extras: &PanelExtras<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, extras, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(viewport, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Cells outside the board (a piece poking above the top) are skipped.
    fn fill_point(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.in_bounds() {
            self.fill_cell(fb, viewport, p.x as u16, p.y as u16, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        extras: &PanelExtras<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        for (name, score) in [
            ("TETRIS", snap.tetris_score),
            ("SNAKE", snap.snake_score),
            ("TOTAL", snap.total_score()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, score, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        let next = CellStyle::new(Rgb::from_array(crate::core::piece_color(snap.next)), PANEL_BG)
            .bold();
        fb.put_str(panel_x, y + 1, snap.next.as_str(), next);
        y += 3;

        if snap.disable_game_over {
            let practice = CellStyle::new(Rgb::new(120, 200, 255), PANEL_BG).bold();
            fb.put_str(panel_x, y, "PRACTICE", practice);
        }
        y += 2;

        if let Some(scores) = extras.high_scores {
            fb.put_str(panel_x, y, "HIGH SCORES", label);
            y += 1;
            if scores.is_empty() {
                fb.put_str(panel_x, y, "-", dim);
                y += 1;
            }
            for (i, entry) in scores.iter().take(PANEL_SCORES).enumerate() {
                let x = fb.put_u32(panel_x, y, (i + 1) as u32, dim);
                let x = fb.put_str(x + 1, y, &entry.name, value);
                fb.put_u32(x + 1, y, entry.score, label);
                y += 1;
            }
            y += 1;
        }

        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Centered block of lines on a cleared band across the board.
fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[&str],
) {
    let band = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG);
    let count = lines.len() as u16;
    let top = start_y + frame_h.saturating_sub(count) / 2;

    fb.fill_rect(start_x + 1, top.saturating_sub(1), frame_w - 2, count + 2, ' ', band);
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 { band.bold() } else { band };
        fb.put_str_centered(start_x, frame_w, top + i as u16, line, style);
    }
}

fn draw_name_prompt(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    prompt: NamePrompt<'_>,
) {
    let rank = format!("NEW HIGH SCORE #{}", prompt.rank);

    draw_overlay(
        fb,
        start_x,
        start_y,
        frame_w,
        frame_h,
        &[&rank, "NAME:", "", "ENTER save  ESC skip"],
    );

    // Name line, with a block cursor after the text
    let top = start_y + frame_h.saturating_sub(4) / 2;
    let input = CellStyle::new(Rgb::new(255, 230, 120), PANEL_BG).bold();
    let name_w = prompt.name.chars().count() as u16 + 1;
    let x = start_x + frame_w.saturating_sub(name_w) / 2;
    let end = fb.put_str(x, top + 2, prompt.name, input);
    fb.put_char(end, top + 2, '▏', input);
}
