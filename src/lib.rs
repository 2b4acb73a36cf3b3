//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 테스트에서 함께 사용한다.

pub mod app;
pub mod ballistics;
pub mod config;
pub mod help;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
