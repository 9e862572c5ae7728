use std::collections::HashMap;

pub type StyleId = u8;

/// Applies registered styles to standard output. A palette with no registered
/// styles leaves the terminal untouched, which is how `--no-color` is
/// implemented.
pub struct Palette {
    styles: HashMap<StyleId, Style>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: StyleId, style: Style) {
        self.styles.insert(id, style);
    }

    /// Switches standard output to the style registered under `id`. Unknown ids
    /// are ignored.
    pub fn set(&self, id: StyleId) {
        if let Some(style) = self.styles.get(&id) {
            self.clear();
            Self::apply(style);
        }
    }

    pub fn clear(&self) {
        if let Some(mut out) = term::stdout() {
            let _ = out.reset();
        }
    }

    fn apply(style: &Style) {
        if let Some(mut out) = term::stdout() {
            if let Some(color) = style.color {
                let _ = out.fg(color);
            }
            if let Some(attr) = style.attr {
                let _ = out.attr(attr);
            }
        }
    }
}

impl Drop for Palette {
    fn drop(&mut self) {
        if !self.styles.is_empty() {
            self.clear();
        }
    }
}

#[derive(Clone)]
pub struct Style {
    color: Option<term::color::Color>,
    attr: Option<term::Attr>,
}

impl Style {
    pub fn new() -> Self {
        Self {
            color: None,
            attr: None,
        }
    }

    pub fn foreground(self, color: term::color::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn attribute(self, attr: term::Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}
