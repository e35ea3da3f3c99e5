//! Command implementations

mod init;
mod inspect;
mod tasks;
mod validate;

pub use init::init;
pub use inspect::inspect;
pub use tasks::tasks;
pub use validate::validate;
