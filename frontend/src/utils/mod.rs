pub mod filter;
pub mod format;
pub mod navigation;
pub mod storage;
pub mod validation;
