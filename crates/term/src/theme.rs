//! Handheld colour palettes.

use crate::fb::{CellStyle, Rgb};
use crate::types::{Palette, PieceKind};

/// Resolved colours for one [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Area around the screen (the handheld's case).
    pub background: Rgb,
    /// LCD screen fill.
    pub screen: Rgb,
    /// Text and border colour.
    pub foreground: Rgb,
    /// Single block colour; `None` means per-kind colours.
    pub block: Option<Rgb>,
}

impl Theme {
    pub const fn for_palette(palette: Palette) -> Self {
        match palette {
            Palette::Classic => Self {
                background: Rgb::hex(0x9bbc0f),
                screen: Rgb::hex(0x8bac0f),
                foreground: Rgb::hex(0x0f380f),
                block: Some(Rgb::hex(0x0f380f)),
            },
            Palette::BlackWhite => Self {
                background: Rgb::hex(0xe0e0e0),
                screen: Rgb::hex(0xc0c0c0),
                foreground: Rgb::hex(0x000000),
                block: None,
            },
            Palette::Blue => Self {
                background: Rgb::hex(0x8ba5ff),
                screen: Rgb::hex(0x7b95ef),
                foreground: Rgb::hex(0x00238b),
                block: None,
            },
            Palette::Red => Self {
                background: Rgb::hex(0xff9b9b),
                screen: Rgb::hex(0xef7b7b),
                foreground: Rgb::hex(0x8b0000),
                block: None,
            },
        }
    }

    pub fn block_color(&self, kind: PieceKind) -> Rgb {
        self.block.unwrap_or_else(|| kind_color(kind))
    }

    /// Text on the screen.
    pub fn text(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.screen)
    }

    pub fn block_style(&self, kind: PieceKind) -> CellStyle {
        CellStyle::new(self.block_color(kind), self.screen)
    }

    pub fn case(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_palette(Palette::default())
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::hex(0x06b6d4),
        PieceKind::O => Rgb::hex(0xfacc15),
        PieceKind::T => Rgb::hex(0xa855f7),
        PieceKind::L => Rgb::hex(0xf97316),
        PieceKind::J => Rgb::hex(0x3b82f6),
        PieceKind::S => Rgb::hex(0x22c55e),
        PieceKind::Z => Rgb::hex(0xef4444),
    }
}
