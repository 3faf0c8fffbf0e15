//! UI Views - Navigation, Dashboard, Alerts, City Map, Feedback

pub mod alerts;
pub mod dashboard;
pub mod feedback;
pub mod map;
pub mod navigation;

pub use alerts::render_alerts_view;
pub use dashboard::render_dashboard_view;
pub use feedback::render_feedback_view;
pub use map::render_map_view;
pub use navigation::{render_footer, render_navigation};
