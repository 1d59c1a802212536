pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod map;
pub mod session;
pub mod show;
