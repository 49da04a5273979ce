pub mod color;
pub mod task;
pub mod vacation;

pub use color::Rgba;
pub use task::TaskCard;
pub use vacation::{VacationRecord, VacationStatus};
