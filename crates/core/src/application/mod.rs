// Application Layer - Use Cases

pub mod quake_list;
pub mod relative_time;

// Re-exports
pub use quake_list::{QuakeBoard, QuakeListService, QuakeRow};
pub use relative_time::RelativeTimeFormatter;
