//! Filesystem adapter for Selectel cloud storage.
//!
//! [`storage::SelectelAdapter`] implements the generic
//! [`storage::contract::FilesystemAdapter`] contract over a remote container,
//! and [`provider`] wires it up as the `selectel` storage driver.

pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod storage;
