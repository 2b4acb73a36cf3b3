//! 탄자 에너지 관련 계산 모듈 모음. 모든 함수는 상태가 없는 순수 함수이다.

pub mod constant;
pub mod energy;
pub mod knockout;

pub use constant::*;
pub use energy::*;
pub use knockout::*;
