//! Chart engines: where a `ChartSpec` ends up.

pub mod dataset;
pub mod terminal;

pub use dataset::DatasetEngine;
pub use terminal::TerminalEngine;
