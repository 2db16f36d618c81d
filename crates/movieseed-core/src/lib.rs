pub mod config;
pub mod logging;

pub mod catalog;
pub mod checksum;
pub mod materialize;
pub mod naming;
pub mod storage;
