//! Status glyphs with an ASCII fallback for dumb terminals and pipes.

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Success,
    Skip,
    Link,
    Submit,
    Error,
}

impl Glyph {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Glyph::Success) => "✓",
            (true, Glyph::Skip) => "⊘",
            (true, Glyph::Link) => "⛓",
            (true, Glyph::Submit) => "→",
            (true, Glyph::Error) => "✗",
            (false, Glyph::Success) => "[ok]",
            (false, Glyph::Skip) => "[skip]",
            (false, Glyph::Link) => "[link]",
            (false, Glyph::Submit) => "[tx]",
            (false, Glyph::Error) => "[fail]",
        }
    }
}

/// Unicode output is enabled only when stdout is a terminal and TERM is not
/// "dumb". Piped output always gets the ASCII forms.
pub fn supports_unicode() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }
    !std::env::var("TERM")
        .map(|t| t.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false)
}
