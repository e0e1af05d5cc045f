//! Both sinks render the same line shape; only color handling differs, so the
//! shared assembly lives here: main line from the template, then `Data:` and
//! `Stack:` continuation blocks indented under it.

use super::tag::TagConfig;
use super::template::{FormatTemplate, FormatValues};
use crate::record::LogRecord;

/// Pre-parsed template plus tag config — everything needed to turn a record into text.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    template: FormatTemplate,
    tag_config: TagConfig,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormatter {
    /// Default layout is `[<timestamp>] <LEVEL> [<context>] <message>` with the
    /// level padded to five columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: FormatTemplate::default(),
            tag_config: TagConfig::default(),
        }
    }

    /// Custom layouts reuse the placeholder set (`{timestamp}`, `{tag}`, `{context}`, `{msg}`, `{level}`).
    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    /// Tag width and casing are configurable where a consumer needs a different convention.
    #[must_use]
    pub fn tag_config(mut self, config: TagConfig) -> Self {
        self.tag_config = config;
        self
    }

    /// The level tag alone, for sinks that colorize it separately from the rest of the line.
    #[must_use]
    pub fn format_tag(&self, record: &LogRecord) -> String {
        self.tag_config.format(record.level)
    }

    /// Renders the full line without a trailing newline; sinks terminate it themselves.
    ///
    /// `Data:` and `Stack:` blocks are indented two spaces so a multi-line entry
    /// still reads as one record when scanning the file.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        if record.raw {
            return record.message.clone();
        }

        let values = FormatValues::new()
            .timestamp(&record.timestamp)
            .tag(self.format_tag(record))
            .context(&record.context)
            .msg(&record.message)
            .level(record.level.as_str());

        let mut line = self.template.render(&values);

        if let Some(data) = &record.data {
            let pretty = serde_json::to_string_pretty(data)
                .unwrap_or_else(|_| data.to_string());
            line.push_str("\n  Data: ");
            line.push_str(&pretty);
        }

        if let Some(err) = &record.error {
            line.push_str("\n  Stack: ");
            line.push_str(&err.message);
            if let Some(stack) = &err.stack {
                for cause in stack.lines() {
                    line.push_str("\n    ");
                    line.push_str(cause);
                }
            }
        }

        line
    }
}
