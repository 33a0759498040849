pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod punch;
pub mod sheet;
pub mod status;
