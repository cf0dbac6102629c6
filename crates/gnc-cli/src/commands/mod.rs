pub mod check;
pub mod classify;
pub mod dispatch;
pub mod list;
pub mod plan;
pub mod schema;
pub mod stats;
pub mod tree;
