pub mod catalog;
pub mod ingest;
pub mod results;
pub mod session;
pub mod storage;
