//! Pen state: line width and the chosen vs. emitted font

/// Default line width in points (0.2 mm).
pub const DEFAULT_LINE_WIDTH: f64 = 0.567;

/// A font key with the size written to `Tf`.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    pub key: String,
    pub size: f64,
}

impl FontSelection {
    pub fn new(key: impl Into<String>, size: f64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

/// Whether `wanted` has to be written before the next text operator,
/// given what the content stream last selected.
pub fn needs_font_selection(wanted: &FontSelection, last_emitted: Option<&FontSelection>) -> bool {
    last_emitted != Some(wanted)
}

/// The font the caller asked for, and the font the content stream is
/// actually set to. `Tf` is only written when the two disagree at the
/// moment text is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FontState {
    selected: Option<String>,
    size: f64,
    last_emitted: Option<FontSelection>,
}

impl FontState {
    pub fn new(size: f64) -> Self {
        Self {
            selected: None,
            size,
            last_emitted: None,
        }
    }

    pub fn select(&mut self, key: impl Into<String>, size: f64) {
        self.selected = Some(key.into());
        self.size = size;
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn last_emitted(&self) -> Option<&FontSelection> {
        self.last_emitted.as_ref()
    }

    /// Selection to write before drawing text with `tf_size` as the `Tf`
    /// operand, or `None` when the stream already has it.
    pub fn pending(&self, tf_size: f64) -> Option<FontSelection> {
        let key = self.selected.as_ref()?;
        let wanted = FontSelection::new(key.as_str(), tf_size);
        needs_font_selection(&wanted, self.last_emitted.as_ref()).then_some(wanted)
    }

    pub fn mark_emitted(&mut self, selection: FontSelection) {
        self.last_emitted = Some(selection);
    }

    /// Forget what the stream is set to. Used on a new page and after
    /// restoring the graphics state.
    pub fn invalidate(&mut self) {
        self.last_emitted = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub line_width: f64,
    pub font: FontState,
}

impl Pen {
    pub fn new(line_width: f64, font_size: f64) -> Self {
        Self {
            line_width,
            font: FontState::new(font_size),
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH, 10.0)
    }
}
