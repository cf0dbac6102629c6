//! Categories, statuses and priority levels for plan entities.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the same representation; repositories sort enum-valued
//! fields by that string, so ordering is alphabetical rather than declaration order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TechCategory
// ---------------------------------------------------------------------------

/// Category of a technology in the project's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TechCategory {
    Framework,
    Library,
    Tool,
    Database,
    Authentication,
    UiComponent,
    DevelopmentTool,
    TestingTool,
    DeploymentTool,
    Other,
}

impl TechCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::Library => "library",
            Self::Tool => "tool",
            Self::Database => "database",
            Self::Authentication => "authentication",
            Self::UiComponent => "ui_component",
            Self::DevelopmentTool => "development_tool",
            Self::TestingTool => "testing_tool",
            Self::DeploymentTool => "deployment_tool",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FileType
// ---------------------------------------------------------------------------

/// Whether a documented path is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
}

impl FileType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImplementationStatus
// ---------------------------------------------------------------------------

/// Implementation status of the database and authentication plan.
///
/// Unlike the task/issue statuses of a workflow engine, any status may be
/// replaced by any other through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationStatus {
    Planning,
    InProgress,
    Implemented,
    Testing,
    Completed,
    OnHold,
}

impl ImplementationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Implemented => "implemented",
            Self::Testing => "testing",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// KnowledgeCategory
// ---------------------------------------------------------------------------

/// Organizational bucket for a knowledge management practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeCategory {
    Documentation,
    CodePattern,
    BestPractice,
    Troubleshooting,
    LearningResource,
    ProjectGuideline,
}

impl KnowledgeCategory {
    pub const ALL: [Self; 6] = [
        Self::Documentation,
        Self::CodePattern,
        Self::BestPractice,
        Self::Troubleshooting,
        Self::LearningResource,
        Self::ProjectGuideline,
    ];

    /// Keyword heuristic over a practice name. First match wins; anything
    /// unmatched is `Documentation`.
    ///
    /// Only used when a caller creates an entry without an explicit category.
    #[must_use]
    pub fn infer(practice: &str) -> Self {
        let practice = practice.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| practice.contains(w));

        if has(&["document", "markdown"]) {
            Self::Documentation
        } else if has(&["pattern", "code"]) {
            Self::CodePattern
        } else if has(&["practice", "best"]) {
            Self::BestPractice
        } else if has(&["troubleshoot", "debug"]) {
            Self::Troubleshooting
        } else if has(&["learn", "resource"]) {
            Self::LearningResource
        } else if has(&["guideline", "project"]) {
            Self::ProjectGuideline
        } else {
            Self::Documentation
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::CodePattern => "code_pattern",
            Self::BestPractice => "best_practice",
            Self::Troubleshooting => "troubleshooting",
            Self::LearningResource => "learning_resource",
            Self::ProjectGuideline => "project_guideline",
        }
    }
}

impl fmt::Display for KnowledgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// KnowledgePriority
// ---------------------------------------------------------------------------

/// How strictly an agent must follow a knowledge practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgePriority {
    Critical,
    High,
    Medium,
    Low,
}

impl KnowledgePriority {
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Keyword heuristic over a practice name, checked from most to least severe.
    #[must_use]
    pub fn infer(practice: &str) -> Self {
        let practice = practice.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| practice.contains(w));

        if has(&["read-only", "never", "avoid"]) {
            Self::Critical
        } else if has(&["always", "must", "required"]) {
            Self::High
        } else if has(&["should", "recommend"]) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for KnowledgePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NextStepsPriority
// ---------------------------------------------------------------------------

/// Named priority levels for next steps. The stored value on
/// [`NextSteps`](crate::entities::NextSteps) is the plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NextStepsPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl NextStepsPriority {
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Urgent => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Urgent),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for NextStepsPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Markdown Documentation", KnowledgeCategory::Documentation)]
    #[case("Consistent Code Style", KnowledgeCategory::CodePattern)]
    #[case("Best Effort Reviews", KnowledgeCategory::BestPractice)]
    #[case("Debug Logging", KnowledgeCategory::Troubleshooting)]
    #[case("Knowledge Reuse", KnowledgeCategory::Documentation)]
    #[case("Learning Resources", KnowledgeCategory::LearningResource)]
    #[case("Project Guidelines", KnowledgeCategory::ProjectGuideline)]
    fn infers_knowledge_category(#[case] practice: &str, #[case] expected: KnowledgeCategory) {
        assert_eq!(KnowledgeCategory::infer(practice), expected);
    }

    #[rstest]
    #[case("Read-Only Respect", KnowledgePriority::Critical)]
    #[case("Never skip tests", KnowledgePriority::Critical)]
    #[case("Always run lint", KnowledgePriority::High)]
    #[case("Reviews should be small", KnowledgePriority::Medium)]
    #[case("Version Control", KnowledgePriority::Low)]
    fn infers_knowledge_priority(#[case] practice: &str, #[case] expected: KnowledgePriority) {
        assert_eq!(KnowledgePriority::infer(practice), expected);
    }

    #[test]
    fn next_steps_priority_values_roundtrip() {
        for level in [
            NextStepsPriority::Urgent,
            NextStepsPriority::High,
            NextStepsPriority::Medium,
            NextStepsPriority::Low,
        ] {
            assert_eq!(NextStepsPriority::from_value(level.value()), Some(level));
        }
        assert_eq!(NextStepsPriority::from_value(0), None);
        assert_eq!(NextStepsPriority::from_value(5), None);
    }

    #[test]
    fn as_str_matches_serde() {
        let json = serde_json::to_value(TechCategory::UiComponent).unwrap();
        assert_eq!(json, serde_json::json!(TechCategory::UiComponent.as_str()));
        let json = serde_json::to_value(ImplementationStatus::OnHold).unwrap();
        assert_eq!(json, serde_json::json!("on_hold"));
    }
}
