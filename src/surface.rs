//! Output surfaces: where a render pass writes its styled lines.
//!
//! The engine only needs to clear, print whole lines, and know the size.
//! [`TerminalSurface`] turns ratatui `Line`s into ANSI via crossterm;
//! [`BufferSurface`] keeps them in memory.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use ratatui::layout::Size;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Size assumed when the terminal cannot report one.
pub const FALLBACK_SIZE: Size = Size {
    width: 80,
    height: 24,
};

pub trait Surface {
    /// Wipe everything and move to the top-left corner.
    fn clear(&mut self);

    /// Append one line.
    fn print(&mut self, line: Line<'static>);

    fn size(&self) -> Size;

    /// Lines printed since the last [`Surface::clear`].
    fn lines_printed(&self) -> usize;

    /// Make pending output visible.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain text of a styled line.
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Terminal columns a line occupies.
pub fn display_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Cut `line` to at most `width` columns so the terminal never wraps it.
/// A wide character that would straddle the edge is dropped.
pub fn clip_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    if display_width(&line) <= width {
        return line;
    }
    let mut used = 0;
    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        let mut kept = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            kept.push(c);
        }
        let full = kept.len() == span.content.len();
        if !kept.is_empty() {
            spans.push(Span::styled(kept, span.style));
        }
        if !full {
            break;
        }
    }
    line.spans = spans;
    line
}

// ============================================================================
// IN-MEMORY SURFACE
// ============================================================================

#[derive(Debug, Clone)]
pub struct BufferSurface {
    size: Size,
    lines: Vec<Line<'static>>,
    clears: usize,
    presents: usize,
}

impl BufferSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size { width, height },
            lines: Vec::new(),
            clears: 0,
            presents: 0,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Printed lines as plain text.
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(plain_text).collect()
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn present_count(&self) -> usize {
        self.presents
    }
}

impl Surface for BufferSurface {
    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn print(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn lines_printed(&self) -> usize {
        self.lines.len()
    }

    fn present(&mut self) -> io::Result<()> {
        self.presents += 1;
        Ok(())
    }
}

// ============================================================================
// TERMINAL SURFACE
// ============================================================================

/// Stream the terminal is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Stdout,
    /// Leaves stdout free for a result, e.g. under `$(...)`.
    Stderr,
}

impl Target {
    /// Write and flush in one go.
    pub fn write_all(self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Target::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
        }
    }
}

/// Output is buffered until [`Surface::present`].
pub struct TerminalSurface {
    target: Target,
    pending: Vec<u8>,
    lines: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::to(Target::Stdout)
    }

    pub fn to(target: Target) -> Self {
        Self {
            target,
            pending: Vec::with_capacity(4096),
            lines: 0,
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.pending.clear();
        self.lines = 0;
        // Writes into a Vec cannot fail.
        let _ = queue!(self.pending, Clear(ClearType::All), MoveTo(0, 0));
    }

    fn print(&mut self, line: Line<'static>) {
        let _ = write_line(&mut self.pending, &line);
        self.lines += 1;
    }

    fn size(&self) -> Size {
        terminal::size()
            .map(|(width, height)| Size { width, height })
            .unwrap_or(FALLBACK_SIZE)
    }

    fn lines_printed(&self) -> usize {
        self.lines
    }

    fn present(&mut self) -> io::Result<()> {
        self.target.write_all(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}

// ============================================================================
// ANSI ENCODING
// ============================================================================

/// Encode one line as ANSI, terminated by CRLF and a full style reset.
pub fn write_line<W: Write>(out: &mut W, line: &Line<'_>) -> io::Result<()> {
    for span in &line.spans {
        let style = line.style.patch(span.style);
        write_style(out, style)?;
        queue!(out, Print(span.content.as_ref()))?;
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }
    queue!(out, Print("\r\n"))
}

fn write_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(term_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(term_color(bg)))?;
    }
    for (modifier, attribute) in MODIFIER_ATTRIBUTES {
        if style.add_modifier.contains(*modifier) {
            queue!(out, SetAttribute(*attribute))?;
        }
    }
    Ok(())
}

const MODIFIER_ATTRIBUTES: &[(Modifier, Attribute)] = &[
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::SLOW_BLINK, Attribute::SlowBlink),
    (Modifier::RAPID_BLINK, Attribute::RapidBlink),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::HIDDEN, Attribute::Hidden),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

/// ratatui names the bright variants `Light*`, crossterm names the normal
/// ones `Dark*`.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_surface_counts_lines_since_clear() {
        let mut surface = BufferSurface::new(80, 24);
        surface.print(Line::from("one"));
        surface.print(Line::from("two"));
        assert_eq!(surface.lines_printed(), 2);
        surface.clear();
        assert_eq!(surface.lines_printed(), 0);
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn plain_text_joins_spans() {
        let line = Line::from(vec![Span::raw("> "), Span::styled("Build", Style::new().fg(Color::Cyan))]);
        assert_eq!(plain_text(&line), "> Build");
    }

    #[test]
    fn write_line_emits_colors_and_text() {
        let line = Line::from(Span::styled(
            "hi",
            Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        ));
        let mut out = Vec::new();
        write_line(&mut out, &line).unwrap();
        let encoded = String::from_utf8(out).unwrap();
        assert!(encoded.contains("hi"));
        assert!(encoded.contains("\x1b["), "should contain escape sequences");
        assert!(encoded.ends_with("\r\n"));
    }

    #[test]
    fn unstyled_line_is_text_plus_resets() {
        let mut out = Vec::new();
        write_line(&mut out, &Line::from("plain")).unwrap();
        let encoded = String::from_utf8(out).unwrap();
        assert!(encoded.starts_with("plain"));
    }

    #[test]
    fn clip_line_keeps_lines_that_fit() {
        let line = Line::from(vec![Span::raw("ab"), Span::raw("cd")]);
        assert_eq!(clip_line(line.clone(), 4), line);
    }

    #[test]
    fn clip_line_cuts_across_spans_and_keeps_styles() {
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::raw("abc"), Span::styled("defgh", bold)]);
        let clipped = clip_line(line, 5);
        assert_eq!(plain_text(&clipped), "abcde");
        assert_eq!(clipped.spans[1].style, bold);
    }

    #[test]
    fn clip_line_counts_wide_characters_as_two_columns() {
        let clipped = clip_line(Line::from("a🚀b"), 2);
        assert_eq!(plain_text(&clipped), "a");
        assert_eq!(display_width(&Line::from("a🚀b")), 4);
    }

    #[test]
    fn light_colors_map_to_bright_terminal_colors() {
        assert_eq!(term_color(Color::LightCyan), TermColor::Cyan);
        assert_eq!(term_color(Color::Cyan), TermColor::DarkCyan);
        assert_eq!(term_color(Color::Indexed(94)), TermColor::AnsiValue(94));
    }
}
