//! Infrastructure layer - storage and document rendering

pub mod pdf;
pub mod storage;
