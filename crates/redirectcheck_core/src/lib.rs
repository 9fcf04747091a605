pub mod check;
pub mod config;
pub mod document;
pub mod navigation;
pub mod redirects;
