//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓴다.

pub mod app;
pub mod billing;
pub mod config;
pub mod currency;
pub mod i18n;
pub mod ledger;
pub mod report;
pub mod room_sort;
pub mod session;
pub mod ui_cli;
