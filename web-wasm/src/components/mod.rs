pub mod analyze_button;
pub mod header;
pub mod loading_indicator;
pub mod result_panels;
pub mod settings_panel;
pub mod upload_area;
