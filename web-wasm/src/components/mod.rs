pub mod header;
pub mod results_panel;
pub mod settings_panel;
pub mod upload_area;
