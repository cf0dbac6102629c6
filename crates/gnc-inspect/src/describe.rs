//! Generated descriptions for inspected paths.

/// Description for a path whose last component is `name`.
///
/// Well-known project directories and config files get a fixed description;
/// anything else is described by name and kind.
#[must_use]
pub fn describe(name: &str, is_directory: bool) -> String {
    let known = if is_directory {
        match name {
            "src" => Some("Main source code directory"),
            "components" => Some("React components directory"),
            "ui" => Some("UI components (typically read-only)"),
            "lib" => Some("Utility functions and configurations"),
            "hooks" => Some("Custom React hooks"),
            "app" => Some("Next.js app router pages and layouts"),
            "tests" => Some("Test files and configurations"),
            "notes" => Some("Project documentation and knowledge base"),
            "prisma" => Some("Database schema and migrations"),
            _ => None,
        }
    } else {
        match name {
            "package.json" => Some("Project dependencies and configuration"),
            "tsconfig.json" => Some("TypeScript configuration"),
            "jest.config.mjs" => Some("Jest testing configuration"),
            "eslint.config.mjs" => Some("ESLint configuration"),
            "next.config.ts" => Some("Next.js configuration"),
            _ => None,
        }
    };

    known.map_or_else(
        || format!("{name} {}", if is_directory { "directory" } else { "file" }),
        String::from,
    )
}
