//! Console and file sinks need different column layouts, and filename patterns
//! reuse the same substitution mechanism — templates make the layout
//! configurable instead of hardcoded per sink.

/// Closed set of known substitution tokens — unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Tag,
    Context,
    Msg,
    Timestamp,
    Level,
    Prefix,
    Year,
    Month,
    Day,
}

impl Placeholder {
    /// Template parsing needs to match brace-delimited names against known placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Context => "context",
            Self::Msg => "msg",
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::Prefix => "prefix",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }

    /// Iteration over all variants avoids forgetting a placeholder when matching by name.
    pub const ALL: &'static [Self] = &[
        Self::Tag,
        Self::Context,
        Self::Msg,
        Self::Timestamp,
        Self::Level,
        Self::Prefix,
        Self::Year,
        Self::Month,
        Self::Day,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Whitespace, separators, and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted with formatted values at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template avoids string scanning on every log call — parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// One-time parse turns `"[{timestamp}] {tag} [{context}] {msg}"` into a
    /// segment list for fast repeated rendering.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut i = 0;
        let chars: Vec<char> = template.chars().collect();

        while i < chars.len() {
            if chars[i] == '{' {
                if let Some(end) = chars[i..].iter().position(|&c| c == '}') {
                    let end = i + end;
                    let name: String = chars[i + 1..end].iter().collect();

                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(current.clone()));
                        current.clear();
                    }

                    if let Some(ph) = Self::match_placeholder(&name) {
                        segments.push(FormatSegment::Placeholder(ph));
                    } else {
                        // Unknown placeholder, keep as literal
                        segments.push(FormatSegment::Literal(format!("{{{name}}}")));
                    }

                    i = end + 1;
                    continue;
                }
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().find(|ph| ph.as_str() == name).copied()
    }

    /// Tests and downstream code need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes formatted values into the pre-parsed segments — the hot path for every log line.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Tag => &values.tag,
                        Placeholder::Context => &values.context,
                        Placeholder::Msg => &values.msg,
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Level => &values.level,
                        Placeholder::Prefix => &values.prefix,
                        Placeholder::Year => &values.year,
                        Placeholder::Month => &values.month,
                        Placeholder::Day => &values.day,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("[{timestamp}] {tag} [{context}] {msg}")
    }
}

/// Typed value bag ensures every placeholder has a corresponding field — no risk of key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub tag: String,
    pub context: String,
    pub msg: String,
    pub timestamp: String,
    pub level: String,
    pub prefix: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl FormatValues {
    /// Empty defaults let callers set only the fields they need without boilerplate for the rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{tag}` placeholder needs the pre-formatted level indicator (e.g., `INFO ` padded to width).
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The `{context}` placeholder carries the subsystem name the call was made under.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// The `{msg}` placeholder carries the actual log content — the most important part of every line.
    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Timestamps come from the record, frozen at the logging call, never at render time.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Raw level name for templates that need it separately from the formatted tag.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Filename patterns use `{prefix}` to keep multiple apps' files distinct in one directory.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Filename patterns use `{year}-{month}-{day}` for the current day's file.
    #[must_use]
    pub fn date(mut self, year: &str, month: &str, day: &str) -> Self {
        self.year = year.to_string();
        self.month = month.to_string();
        self.day = day.to_string();
        self
    }
}
