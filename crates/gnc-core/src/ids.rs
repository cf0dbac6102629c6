//! ID prefixes and per-repository ID generation.
//!
//! IDs look like `"tch-0000002a"`: a three-letter entity prefix and an
//! 8-digit hex counter. Each repository owns one [`IdGenerator`], so IDs are
//! unique within that repository for the life of the process, including
//! across `reset()` calls (the counter is never rewound).

pub const PREFIX_TECH_STACK: &str = "tch";
pub const PREFIX_FILE_STRUCTURE: &str = "fil";
pub const PREFIX_LEARNING_STRATEGY: &str = "lrn";
pub const PREFIX_KNOWLEDGE: &str = "knw";
pub const PREFIX_DATABASE_AUTH_PLAN: &str = "dap";
pub const PREFIX_NEXT_STEP: &str = "nxt";
pub const PREFIX_TEMPLATE: &str = "tpl";
pub const PREFIX_SECTION: &str = "sec";

pub const ALL_PREFIXES: [&str; 8] = [
    PREFIX_TECH_STACK,
    PREFIX_FILE_STRUCTURE,
    PREFIX_LEARNING_STRATEGY,
    PREFIX_KNOWLEDGE,
    PREFIX_DATABASE_AUTH_PLAN,
    PREFIX_NEXT_STEP,
    PREFIX_TEMPLATE,
    PREFIX_SECTION,
];

/// Monotonic ID source scoped to a single repository.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Produce the next ID. Never repeats for this generator.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{:08x}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
