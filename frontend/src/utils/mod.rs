pub mod format;
pub mod navigation;
pub mod storage;
