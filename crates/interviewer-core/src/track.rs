//! Interview tracks
//!
//! A track is the specialization chosen before the interview starts. The
//! unselected state is `Option::<InterviewTrack>::None`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterviewError;

/// Interview specialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewTrack {
    Frontend,
    Backend,
    Fullstack,
}

impl InterviewTrack {
    /// All tracks, in display order
    pub const ALL: [InterviewTrack; 3] = [
        InterviewTrack::Frontend,
        InterviewTrack::Backend,
        InterviewTrack::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewTrack::Frontend => "frontend",
            InterviewTrack::Backend => "backend",
            InterviewTrack::Fullstack => "fullstack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterviewTrack::Frontend => "Senior Frontend",
            InterviewTrack::Backend => "Senior Backend",
            InterviewTrack::Fullstack => "Senior Fullstack",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            InterviewTrack::Frontend => "FE",
            InterviewTrack::Backend => "Node.js + NestJS",
            InterviewTrack::Fullstack => "FE + BE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InterviewTrack::Frontend => "React, TypeScript, Web Performance, Accessibility",
            InterviewTrack::Backend => "Node.js, NestJS, APIs, Databases, System Design",
            InterviewTrack::Fullstack => "Full-stack architecture, End-to-end ownership",
        }
    }
}

impl FromStr for InterviewTrack {
    type Err = InterviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(InterviewTrack::Frontend),
            "backend" => Ok(InterviewTrack::Backend),
            "fullstack" => Ok(InterviewTrack::Fullstack),
            _ => Err(InterviewError::UnknownTrack(s.to_string())),
        }
    }
}

impl fmt::Display for InterviewTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
