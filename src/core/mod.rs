pub mod board;
pub mod chart;
pub mod sidebar;
pub mod source;
pub mod timeline;
pub mod view;
