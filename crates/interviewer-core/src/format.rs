//! Output formats shared by every command
//!
//! `human` is for the terminal, `json` is the stable machine interface and
//! `records` prints one typed record per line (`H` header first) for shell
//! pipelines.

use std::fmt;
use std::str::FromStr;

use crate::error::InterviewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = InterviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InterviewError::UnknownFormat(wanted.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote a value for a records line, escaping embedded quotes and newlines
pub fn quote_record(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}
