pub mod cli;
pub mod copy;
pub mod list;
pub mod metadata;
