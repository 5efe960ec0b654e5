//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `Notice` for user-visible success / warning / failure messages
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! # Example
//!
//! ```ignore
//! // Simple logging
//! log!("export"; "rasterizing {} at {}px", name, size);
//!
//! // Progress line for a batch
//! let progress = ProgressLine::new("bundle", &[("fetch", 5)]);
//! progress.inc("fetch");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        // Progress line has no trailing newline, clear it first
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
    }

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "export" | "code" => prefix.bright_blue().bold().to_string(),
        "bundle" | "shot" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "fetch" | "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Notice (user-visible outcome of one action)
// ============================================================================

/// Get current time formatted as HH:MM:SS (UTC)
fn now() -> String {
    use std::time::SystemTime;
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Kind of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Failure,
}

/// A user-visible message raised at the boundary of one triggering action.
///
/// Every export job ends in at most one notice. Failures carry a short
/// summary for the user plus the underlying error as detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub summary: String,
    pub detail: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Render the notice as it appears on the terminal (without timestamp).
    fn render(&self) -> String {
        let symbol = match self.kind {
            NoticeKind::Success => "✓".green().to_string(),
            NoticeKind::Warning => "⚠".yellow().to_string(),
            NoticeKind::Failure => "✗".red().to_string(),
        };
        if self.detail.is_empty() {
            format!("{symbol} {}", self.summary)
        } else {
            format!("{symbol} {}\n  {}", self.summary, self.detail.dimmed())
        }
    }

    /// Print the notice with a timestamp.
    pub fn show(&self) {
        let timestamp = format!("[{}]", now()).dimmed().to_string();
        let mut stdout = stdout().lock();
        writeln!(stdout, "{timestamp} {}", self.render()).ok();
        stdout.flush().ok();
    }
}

/// Show a success notice.
pub fn notice_success(summary: &str) -> Notice {
    let notice = Notice::new(NoticeKind::Success, summary, "");
    notice.show();
    notice
}

/// Show a warning notice with detail.
pub fn notice_warning(summary: &str, detail: &str) -> Notice {
    let notice = Notice::new(NoticeKind::Warning, summary, detail);
    notice.show();
    notice
}

/// Show a failure notice with detail.
pub fn notice_error(summary: &str, detail: &str) -> Notice {
    let notice = Notice::new(NoticeKind::Failure, summary, detail);
    notice.show();
    notice
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[bundle] fetch(2/5)`
///
/// All counters update in place on the same line. Uses `try_lock` to avoid
/// blocking fetch tasks - if display is busy, the update is skipped
pub struct ProgressLine {
    module: &'static str,
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display under `module`.
    ///
    /// Only includes counters with total > 0.
    pub fn new(module: &'static str, items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|(name, total)| Counter {
                name,
                total: *total,
                current: AtomicUsize::new(0),
            })
            .collect();

        BAR_COUNT.store(1, Ordering::SeqCst);

        let progress = Self {
            module,
            counters,
            lock: Mutex::new(()),
        };
        progress.display();
        progress
    }

    /// Increment the counter with the given name.
    ///
    /// Non-blocking: if display lock is held, skips refresh.
    #[inline]
    pub fn inc(&self, name: &str) {
        if let Some(counter) = self.counters.iter().find(|c| c.name == name) {
            counter.current.fetch_add(1, Ordering::Relaxed);
            if self.lock.try_lock().is_some() {
                self.display();
            }
        }
    }

    /// Current value of a counter (0 for unknown names).
    pub fn current(&self, name: &str) -> usize {
        self.counters
            .iter()
            .find(|c| c.name == name)
            .map_or(0, |c| c.current.load(Ordering::Relaxed))
    }

    fn line(&self) -> String {
        let parts: Vec<_> = self
            .counters
            .iter()
            .map(|c| {
                format!(
                    "{}({}/{})",
                    c.name,
                    c.current.load(Ordering::Relaxed),
                    c.total
                )
            })
            .collect();
        parts.join(" ")
    }

    /// Display the current progress line (overwrites current line).
    fn display(&self) {
        let prefix = colorize_prefix(self.module, self.module);
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        write!(stdout, "{} {}", prefix, self.line()).ok();
        stdout.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        {
            let _guard = self.lock.lock(); // Wait for any pending display
            let prefix = colorize_prefix(self.module, self.module);
            let mut stdout = stdout().lock();
            execute!(
                stdout,
                cursor::MoveToColumn(0),
                Clear(ClearType::CurrentLine)
            )
            .ok();
            writeln!(stdout, "{} {}", prefix, self.line()).ok();
            stdout.flush().ok();
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        // Clear the line on drop (if not finished properly)
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_render_without_detail() {
        owo_colors::set_override(false);
        let notice = Notice::new(NoticeKind::Success, "saved nuran-bank.svg", "");
        assert_eq!(notice.render(), "✓ saved nuran-bank.svg");
    }

    #[test]
    fn test_notice_render_with_detail() {
        owo_colors::set_override(false);
        let notice = Notice::new(
            NoticeKind::Failure,
            "Could not convert image.",
            "failed to decode svg",
        );
        let rendered = notice.render();
        assert_eq!(rendered.matches('\n').count(), 1);
        assert!(rendered.starts_with("✗ Could not convert image."));
        assert!(rendered.ends_with("failed to decode svg"));
    }

    #[test]
    fn test_progress_line_skips_empty_counters() {
        let progress = ProgressLine::new("bundle", &[("fetch", 3), ("pack", 0)]);
        assert_eq!(progress.counters.len(), 1);
        progress.inc("fetch");
        progress.inc("fetch");
        progress.inc("pack");
        assert_eq!(progress.current("fetch"), 2);
        assert_eq!(progress.current("pack"), 0);
        assert_eq!(progress.line(), "fetch(2/3)");
        progress.finish();
    }

    #[test]
    fn test_now_format() {
        let ts = now();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.matches(':').count(), 2);
    }
}
