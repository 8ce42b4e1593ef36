pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod notes;
pub mod pick;
pub mod resource;
pub mod search;
pub mod stats;
pub mod status;
pub mod tag;
