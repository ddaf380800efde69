//! 계량기 사용량과 요금 계산 모듈 모음.

pub mod charges;
pub mod meter;

pub use charges::*;
pub use meter::*;
