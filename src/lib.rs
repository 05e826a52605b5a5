pub mod aggregate;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_util;
pub mod metadata;
pub mod output;
pub mod quant;
pub mod reference;
pub mod resolve;
pub mod tree;
