pub mod app_state;
pub mod mbta_json_api;
pub mod rendered;
pub mod table_view;
