//! Terminal colours and text width.

/// ANSI colours used on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Yellow,
    Cyan,
    Bold,
}

impl Colour {
    fn sgr(self) -> &'static str {
        match self {
            Colour::Red => "\x1b[1;31m",
            Colour::Green => "\x1b[32m",
            Colour::Yellow => "\x1b[33m",
            Colour::Cyan => "\x1b[36m",
            Colour::Bold => "\x1b[1m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Applies colours, or passes text through when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, colour: Option<Colour>) -> String {
        match colour {
            Some(colour) if self.enabled => format!("{}{text}{RESET}", colour.sgr()),
            _ => text.to_string(),
        }
    }
}

/// Columns a string occupies in a terminal.
///
/// Emoji are two columns wide and variation selectors take no space.
/// Everything else counts as one column, which is right for the text the
/// board shows.
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0xFE00..=0xFE0F | 0x200D => 0,
            0x1F300..=0x1FAFF | 0x2600..=0x27BF => 2,
            _ => 1,
        })
        .sum()
}

/// Pad `s` with spaces to `width` display columns.
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}
