pub mod operation;
pub mod permission;
