//! GameView: maps a [`GameSnapshot`] and session [`Phase`] into a terminal framebuffer.
//!
//! While playing, the side panel can also show the session's [`AudioStatus`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{AudioStatus, GameSnapshot, Phase};
use crate::fb::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Options, Palette, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SCALE_MAX, SCALE_MIN};

const BLOCK: char = '█';
const SCORE_DIGITS: usize = 6;
const PANEL_MIN_W: u16 = 12;
const PREVIEW_CELLS: u16 = 4;
const NOTE: char = '♪';

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

/// Screen placement for one viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left of the LCD screen rectangle.
    pub screen_x: u16,
    pub screen_y: u16,
    pub screen_w: u16,
    pub screen_h: u16,
    /// Top-left of the board frame (border included).
    pub board_x: u16,
    pub board_y: u16,
    /// Left column of the score/next panel.
    pub panel_x: u16,
}

/// Terminal columns per board cell for a scale percentage.
///
/// ```
/// use pocket_tetris_term::cell_width_for_scale;
///
/// assert_eq!(cell_width_for_scale(100), 2);
/// assert_eq!(cell_width_for_scale(50), 1);
/// assert_eq!(cell_width_for_scale(200), 4);
/// ```
pub fn cell_width_for_scale(scale: u16) -> u16 {
    (2 * scale.clamp(SCALE_MIN, SCALE_MAX) / 100).max(1)
}

/// A lightweight terminal renderer for the handheld screen.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    theme: Theme,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(Palette::default(), 100)
    }
}

impl GameView {
    pub fn new(palette: Palette, scale: u16) -> Self {
        Self {
            cell_w: cell_width_for_scale(scale),
            theme: Theme::for_palette(palette),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(options.palette, options.scale)
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let panel_w = PANEL_MIN_W.max(PREVIEW_CELLS * self.cell_w + 2);
        let screen_w = 1 + frame_w + 2 + panel_w + 1;
        let screen_h = frame_h + 2;

        let screen_x = viewport.width.saturating_sub(screen_w) / 2;
        let screen_y = viewport.height.saturating_sub(screen_h) / 2;
        let board_x = screen_x + 1;
        Layout {
            screen_x,
            screen_y,
            screen_w,
            screen_h,
            board_x,
            board_y: screen_y + 1,
            panel_x: board_x + frame_w + 2,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_into_with_audio(snap, phase, None, viewport, fb);
    }

    /// Render into an existing framebuffer, with the sound settings in the panel.
    pub fn render_into_with_audio(
        &self,
        snap: &GameSnapshot,
        phase: Phase,
        audio: Option<&AudioStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.theme.case().cell(' '));

        let layout = self.layout(viewport);
        fb.fill_rect(
            layout.screen_x,
            layout.screen_y,
            layout.screen_w,
            layout.screen_h,
            ' ',
            self.theme.text(),
        );

        match phase {
            Phase::Title => self.draw_message(
                fb,
                layout,
                &[Line::Title("TETRIS"), Line::Blank, Line::Text("PRESS START")],
            ),
            Phase::Paused => self.draw_message(
                fb,
                layout,
                &[Line::Title("PAUSED"), Line::Blank, Line::Text("PRESS START TO CONTINUE")],
            ),
            Phase::GameOver => self.draw_message(
                fb,
                layout,
                &[
                    Line::Title("GAME OVER"),
                    Line::Blank,
                    Line::Number("SCORE: ", snap.score),
                    Line::Number("LINES: ", snap.lines),
                    Line::Blank,
                    Line::Text("PRESS START TO PLAY AGAIN"),
                ],
            ),
            Phase::Playing => {
                self.draw_board(fb, layout, snap);
                self.draw_panel(fb, layout, snap, audio);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, phase, viewport, &mut fb);
        fb
    }

    /// Like [`GameView::render`], with the sound settings in the panel.
    pub fn render_with_audio(
        &self,
        snap: &GameSnapshot,
        phase: Phase,
        audio: &AudioStatus,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_audio(snap, phase, Some(audio), viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: Layout, snap: &GameSnapshot) {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        fb.draw_border(layout.board_x, layout.board_y, frame_w, frame_h, self.theme.text());

        let grid = snap.display_grid();
        for (y, row) in grid.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                if let Some(kind) = PieceKind::from_id(tag) {
                    let px = layout.board_x + 1 + x as u16 * self.cell_w;
                    let py = layout.board_y + 1 + y as u16;
                    self.draw_block(fb, px, py, kind);
                }
            }
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        snap: &GameSnapshot,
        audio: Option<&AudioStatus>,
    ) {
        let x = layout.panel_x;
        let label = self.theme.text().bold();
        let value = self.theme.text();

        let mut y = layout.board_y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32_padded(x, y + 1, snap.score, SCORE_DIGITS, value);
        y += 3;

        fb.put_str(x, y, "LEVEL", label);
        fb.put_u32(x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS + 2;
        fb.draw_border(x, y, box_w, box_h, value);
        for (row, tags) in snap.next_preview().iter().enumerate() {
            for (col, &tag) in tags.iter().enumerate() {
                if let Some(kind) = PieceKind::from_id(tag) {
                    let px = x + 1 + col as u16 * self.cell_w;
                    let py = y + 1 + row as u16;
                    self.draw_block(fb, px, py, kind);
                }
            }
        }

        let Some(audio) = audio else {
            return;
        };
        y += box_h + 1;
        fb.put_str(x, y, "SOUND", label);
        let end = fb.put_str(x, y + 1, if audio.sound_enabled { "ON" } else { "OFF" }, value);
        if audio.music_playing {
            fb.put_char(end + 1, y + 1, NOTE, value);
        }
        fb.put_str(x, y + 2, "VOL", label);
        fb.put_u32(x, y + 3, u32::from(audio.volume), value);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        fb.fill_rect(x, y, self.cell_w, 1, BLOCK, self.theme.block_style(kind));
    }

    fn draw_message(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[Line<'_>]) {
        let style = self.theme.text();
        fb.draw_border(
            layout.screen_x,
            layout.screen_y,
            layout.screen_w,
            layout.screen_h,
            style,
        );

        let top = layout.screen_y + layout.screen_h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let y = top + i as u16;
            match *line {
                Line::Blank => {}
                Line::Title(text) => {
                    fb.put_str_centered(layout.screen_x, layout.screen_w, y, text, style.bold())
                }
                Line::Text(text) => {
                    fb.put_str_centered(layout.screen_x, layout.screen_w, y, text, style)
                }
                Line::Number(label, n) => {
                    let len = label.chars().count() as u16 + digit_count(n);
                    let x = layout.screen_x + layout.screen_w.saturating_sub(len) / 2;
                    let x = fb.put_str(x, y, label, style);
                    fb.put_u32(x, y, n, style);
                }
            }
        }
    }
}

/// One line of a centred message screen
#[derive(Debug, Clone, Copy)]
enum Line<'a> {
    Blank,
    Title(&'a str),
    Text(&'a str),
    Number(&'a str, u32),
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
