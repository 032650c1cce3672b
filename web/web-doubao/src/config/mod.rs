pub mod credential;
pub mod storage;
