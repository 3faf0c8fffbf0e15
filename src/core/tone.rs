//! Semantic color classes shared by every view

use serde::Serialize;
use std::fmt;

/// Semantic tone of a value; the UI layer maps tones to terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
    Info,
    Primary,
    Secondary,
    Accent,
    Muted,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Muted => "muted",
        };
        f.write_str(name)
    }
}
