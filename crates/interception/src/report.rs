use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use crate::registry::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub name: &'static str,
    pub calls: u64,
}

impl ReportLine {
    pub fn new(name: &'static str, calls: u64) -> Self {
        Self { name, calls }
    }
}

/// Call counts ordered hottest first, ties broken by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(mut lines: Vec<ReportLine>) -> Self {
        lines.sort_by(|a, b| b.calls.cmp(&a.calls).then_with(|| a.name.cmp(b.name)));
        Self { lines }
    }

    pub fn from_registry(registry: &Registry) -> Self {
        let lines = registry
            .snapshot()
            .into_iter()
            .map(|entry| ReportLine::new(entry.name(), entry.calls()))
            .collect();

        Self::new(lines)
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Number of distinct entry points the application actually called.
    pub fn invoked(&self) -> usize {
        self.lines.iter().filter(|line| line.calls > 0).count()
    }

    pub fn render(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{:>12}  {}", line.calls, line.name))
            .collect()
    }
}

/// Writes the session banner on creation and the call-count report on
/// [`Reporter::shutdown`].
pub struct Reporter {
    enabled: bool,
    written: AtomicBool,
}

impl Reporter {
    pub fn start(enabled: bool) -> Self {
        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        info!("--------------------------------------------------------");
        info!("  OPENGL32.DLL proxy report - session {} (pid {})", started, std::process::id());
        info!("--------------------------------------------------------");

        Self {
            enabled,
            written: AtomicBool::new(false),
        }
    }

    /// Emits the report once. Later calls return `None`.
    pub fn shutdown(&self, registry: &Registry) -> Option<Report> {
        if !self.enabled || self.written.swap(true, Ordering::SeqCst) {
            return None;
        }

        let report = Report::from_registry(registry);

        info!("--------------------------------------------------------");
        info!("  Function call counts");
        info!("--------------------------------------------------------");
        for line in report.render() {
            info!("{}", line);
        }
        info!("{} GL functions were called by the application.", report.invoked());

        glproxy_logging::flush();
        Some(report)
    }
}
