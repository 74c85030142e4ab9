pub mod companies;
pub mod config;
pub mod driver;
pub mod drivers;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod trucks;
pub mod users;
pub mod workday;
