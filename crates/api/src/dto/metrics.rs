use radix_canary_domain::MetricsSnapshot;
use std::fmt::Write;

pub const COMPONENT: &str = "radix-canary";

/// Labels attached to every exposed counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLabels {
    pub component: String,
    pub host: String,
    pub pid: u32,
    pub version: String,
}

impl MetricLabels {
    pub fn new(component: &str, host: String, pid: u32, version: &str) -> Self {
        Self {
            component: component.to_string(),
            host,
            pid,
            version: version.to_string(),
        }
    }

    /// Labels for the running process; an unreadable hostname becomes empty.
    pub fn current(version: &str) -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_default();

        Self::new(COMPONENT, host, std::process::id(), version)
    }

    /// `component="..",host="..",pid="..",version=".."`, sorted by label name.
    pub fn render(&self) -> String {
        format!(
            r#"component="{}",host="{}",pid="{}",version="{}""#,
            escape(&self.component),
            escape(&self.host),
            self.pid,
            escape(&self.version)
        )
    }

    pub fn exposition(&self, snapshot: &MetricsSnapshot) -> String {
        let labels = self.render();
        let mut out = String::new();
        let _ = writeln!(out, "requests_total{{{}}} {}", labels, snapshot.requests_total);
        let _ = writeln!(out, "errors_total{{{}}} {}", labels, snapshot.errors_total);
        out
    }
}

fn escape(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}
