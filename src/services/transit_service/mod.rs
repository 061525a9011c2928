pub mod config;
pub mod decoder;
pub mod route_downloader;
pub mod table_builder;
pub mod transport;
pub mod types;
