//! Default dataset loaded by each repository's `initialize()`.

use gnc_core::entities::{
    CreateDatabaseAuthPlan, CreateFileStructure, CreateKnowledgeEntry, CreateLearningStrategy,
    CreateNextStep, CreateTechStack,
};
use gnc_core::enums::{FileType, ImplementationStatus, NextStepsPriority, TechCategory};

const TECH_STACK: [(&str, &str, &str, TechCategory); 6] = [
    ("Next.js", "15+", "React framework for production", TechCategory::Framework),
    ("React", "18+", "Frontend JavaScript library", TechCategory::Library),
    ("TypeScript", "5+", "JavaScript with syntax for types", TechCategory::Tool),
    ("Tailwind CSS", "4.1", "Utility-first CSS framework", TechCategory::Library),
    (
        "Prisma",
        "6+",
        "Next-generation ORM for TypeScript & Node.js",
        TechCategory::Database,
    ),
    (
        "Shadcn UI",
        "Latest",
        "Beautifully designed components built with Radix UI",
        TechCategory::UiComponent,
    ),
];

const FILE_STRUCTURE: [(&str, &str, bool); 9] = [
    ("src/", "Main source code directory", false),
    ("src/components/", "React components directory", false),
    ("src/components/ui/", "Shadcn UI components (read-only)", true),
    ("src/app/", "Next.js app router pages and layouts", false),
    ("src/lib/", "Utility functions and configurations", false),
    ("src/hooks/", "Custom React hooks", false),
    ("notes/", "Project documentation and knowledge base", false),
    ("tests/", "Test files and configurations", false),
    ("prisma/", "Database schema and migrations", false),
];

const LEARNING_STRATEGIES: [(&str, [&str; 5]); 4] = [
    (
        "Learn a new technology or concept",
        [
            "Check existing documentation in notes/ directory",
            "Search for related files and code patterns",
            "Read relevant documentation and examples",
            "Write summary of findings in a new markdown note",
            "Update table of contents if adding significant new topic",
        ],
    ),
    (
        "Understand project structure and organization",
        [
            "Review the project plan template",
            "Examine file structure documentation",
            "Check tech stack information",
            "Review existing code patterns and conventions",
            "Identify read-only directories and components",
        ],
    ),
    (
        "Implement a new feature or functionality",
        [
            "Analyze requirements and break down into tasks",
            "Research existing similar implementations",
            "Create tests before implementation (TDD)",
            "Implement following project conventions",
            "Update documentation and knowledge base",
        ],
    ),
    (
        "Debug and fix issues",
        [
            "Reproduce the issue systematically",
            "Check error logs and stack traces",
            "Review related code and tests",
            "Apply fixes following project patterns",
            "Verify fix with tests and validation",
        ],
    ),
];

const KNOWLEDGE_PRACTICES: [(&str, &str); 8] = [
    (
        "Markdown Documentation",
        "Use markdown format for all documentation in the notes/ directory",
    ),
    (
        "Consistent File Naming",
        "Use descriptive names with hyphens for file names (e.g., project-plan.md)",
    ),
    (
        "Table of Contents Management",
        "Update table of contents when adding significant new topics",
    ),
    (
        "Knowledge Reuse",
        "Search for existing knowledge before creating new documentation",
    ),
    (
        "Version Control",
        "Commit documentation changes with descriptive commit messages",
    ),
    (
        "Read-Only Respect",
        "Never modify read-only directories like src/components/ui/",
    ),
    (
        "Context Preservation",
        "Maintain context and relationships between related documentation",
    ),
    (
        "Update Frequency",
        "Keep documentation current with project changes and improvements",
    ),
];

const DATABASE_AUTH_FEATURES: [&str; 7] = [
    "NextAuth.js authentication",
    "Prisma ORM with SQLite",
    "Role-based access control",
    "Password hashing with bcrypt",
    "Session management",
    "Database migrations",
    "Seed data scripts",
];

const NEXT_STEPS: [(&str, NextStepsPriority); 8] = [
    ("Load README.md and project plan on startup", NextStepsPriority::High),
    ("Search for existing notes or code before any task", NextStepsPriority::High),
    ("Write markdown notes after learning new concepts", NextStepsPriority::Medium),
    ("Verify read-only status of files before writing", NextStepsPriority::High),
    (
        "Update table of contents when adding significant topics",
        NextStepsPriority::Medium,
    ),
    ("Follow test-first development approach", NextStepsPriority::High),
    ("Respect project coding conventions and patterns", NextStepsPriority::High),
    ("Run quality checks before completing tasks", NextStepsPriority::High),
];

#[must_use]
pub fn tech_stack() -> Vec<CreateTechStack> {
    TECH_STACK
        .iter()
        .map(|&(name, version, description, category)| {
            CreateTechStack::new(name, version, description, category)
        })
        .collect()
}

#[must_use]
pub fn file_structures() -> Vec<CreateFileStructure> {
    FILE_STRUCTURE
        .iter()
        .map(|&(path, description, read_only)| {
            CreateFileStructure::new(path, FileType::Directory, description, read_only)
        })
        .collect()
}

#[must_use]
pub fn learning_strategies() -> Vec<CreateLearningStrategy> {
    LEARNING_STRATEGIES
        .iter()
        .map(|(goal, steps)| CreateLearningStrategy::new(*goal, steps.iter().copied()))
        .collect()
}

/// Knowledge practices. Category and priority are left to inference.
#[must_use]
pub fn knowledge_practices() -> Vec<CreateKnowledgeEntry> {
    KNOWLEDGE_PRACTICES
        .iter()
        .map(|&(practice, description)| CreateKnowledgeEntry::new(practice, description))
        .collect()
}

#[must_use]
pub fn database_auth_plans() -> Vec<CreateDatabaseAuthPlan> {
    vec![CreateDatabaseAuthPlan::new(
        ImplementationStatus::Implemented,
        DATABASE_AUTH_FEATURES,
    )]
}

#[must_use]
pub fn next_steps() -> Vec<CreateNextStep> {
    NEXT_STEPS
        .iter()
        .map(|&(step, priority)| CreateNextStep::new(step, priority))
        .collect()
}
