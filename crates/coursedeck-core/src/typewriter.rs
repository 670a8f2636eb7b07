//! Character-by-character text reveal.

/// Default delay per character for page titles.
pub const TITLE_SPEED_MS: u32 = 100;
/// Default delay per character for subtitles.
pub const SUBTITLE_SPEED_MS: u32 = 50;

/// Reveals `text` one character per tick.
///
/// The driver calls [`Typewriter::tick`] every `speed_ms` and renders the
/// returned prefix until it yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    speed_ms: u32,
    /// Byte offset of the end of the visible prefix.
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed_ms: u32) -> Self {
        Self {
            text: text.into(),
            speed_ms,
            revealed: 0,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently visible prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.text.len()
    }

    /// Reveals one more character and returns the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn tick(&mut self) -> Option<&str> {
        let next = self.text[self.revealed..].chars().next()?;
        self.revealed += next.len_utf8();
        Some(self.visible())
    }

    /// Hides the text again so the effect can replay.
    pub fn reset(&mut self) {
        self.revealed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("abc", TITLE_SPEED_MS);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.tick(), Some("a"));
        assert_eq!(tw.tick(), Some("ab"));
        assert_eq!(tw.tick(), Some("abc"));
        assert!(tw.is_finished());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("课程📝", SUBTITLE_SPEED_MS);
        assert_eq!(tw.tick(), Some("课"));
        assert_eq!(tw.tick(), Some("课程"));
        assert_eq!(tw.tick(), Some("课程📝"));
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_reset_replays() {
        let mut tw = Typewriter::new("hi", 10);
        while tw.tick().is_some() {}
        tw.reset();
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_finished());
        assert_eq!(tw.tick(), Some("h"));
    }

    #[test]
    fn test_empty_text_is_finished() {
        let mut tw = Typewriter::new("", 10);
        assert!(tw.is_finished());
        assert_eq!(tw.tick(), None);
    }
}
