// Library root - exposes the modules so integration tests in `tests/` can
// reach them. The production entry point is `src/main.rs`.

pub mod cli;
pub mod error;
pub mod github;
pub mod link;
pub mod types;
pub mod watcher;
