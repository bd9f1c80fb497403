pub mod config;
pub mod dir;
pub mod home;
pub mod logger;
pub mod register;
pub mod services;
pub mod session;
pub mod tessera;
pub mod toast;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
