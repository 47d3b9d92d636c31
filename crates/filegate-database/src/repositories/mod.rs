//! Repository implementations for all Filegate entities.

pub mod file;
pub mod user;

pub use file::FileRepository;
pub use user::UserRepository;
