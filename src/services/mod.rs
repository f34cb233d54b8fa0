pub mod dashboard_controller;
pub mod fallback_data;
pub mod widget_loader;
pub mod widgets;
