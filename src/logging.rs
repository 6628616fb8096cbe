/// Logging setup
///
/// Installs a plain `fmt` subscriber once at startup. Levels are fixed
/// in code since the browser reads no environment.

use tracing::Level;

/// Initialize the global subscriber at the given level
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
