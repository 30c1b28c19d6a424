pub mod use_dashboard;
pub mod use_title;

pub use use_dashboard::{DashboardHandle, use_dashboard};
pub use use_title::use_title;
