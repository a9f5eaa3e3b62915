//! Diagram subsystem options.
//!
//! The page hands these options to an external diagram renderer exactly once
//! during initialization. The diagram library scans marked page content on
//! its own; no data flows from this crate into it.

/// Flowchart layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowchartOptions {
    pub use_max_width: bool,
    pub html_labels: bool,
}

/// One-time diagram initialization options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    pub start_on_load: bool,
    pub theme: String,
    pub flowchart: FlowchartOptions,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            start_on_load: true,
            theme: "default".to_string(),
            flowchart: FlowchartOptions {
                use_max_width: true,
                html_labels: true,
            },
        }
    }
}
