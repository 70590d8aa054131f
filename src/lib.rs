pub mod accounting;
pub mod config;
pub mod data;
pub mod forms;
pub mod presentation;
pub mod storage;
