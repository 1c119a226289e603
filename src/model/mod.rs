pub mod config;
pub mod notification;
pub mod task;

pub use config::*;
pub use notification::*;
pub use task::*;
