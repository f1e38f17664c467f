//! UIコンポーネント

pub mod error_panel;
pub mod header;
pub mod loading_indicator;
pub mod results_grid;
pub mod upload_area;
