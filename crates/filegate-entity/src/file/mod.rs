//! File record entity and permission states.

pub mod model;
pub mod permission;

pub use model::{CreateFileRecord, FileRecord};
pub use permission::Permission;
