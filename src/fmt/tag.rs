//! Level indicators need fixed-width rendering so `ERROR` and `WARN` lines keep
//! the message column at the same offset — a configurable tag system avoids
//! hardcoding any single convention.

use crate::level::Level;
use std::collections::HashMap;

/// Casing conventions differ between log consumers — most expect all-caps level names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Some callers already control casing upstream — double-transforming would mangle them.
    None,
    /// `ERROR`/`WARN `/`INFO ` in all-caps for quick scanning — the default convention here.
    #[default]
    Uppercase,
    /// Lowercase for consumers that grep against the raw level names.
    Lowercase,
    /// Title-case (`Info`, `Warn`) for prose-style log formats.
    Capitalize,
}

impl Transform {
    /// Centralized transform avoids duplicating casing logic at every call site.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Uppercase => s.to_uppercase(),
            Self::Lowercase => s.to_lowercase(),
            Self::Capitalize => {
                let mut chars = s.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>()
                        + chars.as_str().to_lowercase().as_str()
                })
            }
        }
    }
}

/// Left alignment keeps the tag start predictable for `grep` and `cut`;
/// the other variants exist for consumers with different column conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Fixed-offset columns — the default because file lines are machine-consumed.
    #[default]
    Left,
    /// Right-aligned tags keep the message column start consistent regardless of tag length.
    Right,
    /// Centered text inside padded width for symmetric visual layouts.
    Center,
}

/// Every knob in one struct so tag rendering doesn't need to accept a handful of loose parameters.
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// Opening delimiter — empty gives bare `INFO `, `[` would produce `[INFO ]`.
    pub prefix: String,
    /// Closing delimiter — pairs with prefix.
    pub suffix: String,
    /// Casing convention for the level name.
    pub transform: Transform,
    /// Level names have different lengths — padding keeps columns aligned across `INFO`/`ERROR`.
    pub min_width: usize,
    /// Placement of the name inside the padded width.
    pub alignment: Alignment,
    /// Custom names instead of the built-in level strings (e.g., "FATAL" for error).
    pub labels: HashMap<Level, String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            transform: Transform::Uppercase,
            min_width: 5,
            alignment: Alignment::Left,
            labels: HashMap::new(),
        }
    }
}

impl TagConfig {
    /// Explicit constructor matches the builder-pattern convention used throughout the crate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Different log formats use different opening delimiters (`[`, `<`, or none).
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Closing delimiter must be independently configurable to pair with any opening delimiter.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Casing preference varies across consumers.
    #[must_use]
    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Without minimum width, `INFO` and `ERROR` produce different column offsets.
    #[must_use]
    pub const fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Alignment within the padded width affects whether tags are human-scannable or machine-parseable.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Domain-specific names ("FATAL", "NOTE") communicate intent better than generic level names.
    #[must_use]
    pub fn label(mut self, level: Level, label: impl Into<String>) -> Self {
        self.labels.insert(level, label.into());
        self
    }

    /// Single entry point for tag rendering — applies transform, padding, and delimiters in order.
    #[must_use]
    pub fn format(&self, level: Level) -> String {
        let label = self
            .labels
            .get(&level)
            .map_or_else(|| level.as_str(), String::as_str);

        let transformed = self.transform.apply(label);
        let padded = self.pad(&transformed);

        format!("{}{}{}", self.prefix, padded, self.suffix)
    }

    fn pad(&self, s: &str) -> String {
        let len = s.chars().count();
        if len >= self.min_width {
            return s.to_string();
        }

        let padding = self.min_width - len;
        match self.alignment {
            Alignment::Left => format!("{}{}", s, " ".repeat(padding)),
            Alignment::Right => format!("{}{}", " ".repeat(padding), s),
            Alignment::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
            }
        }
    }
}
