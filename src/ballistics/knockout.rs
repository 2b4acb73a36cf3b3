use crate::config::UnitSystem;

/// Taylor Knockout Formula 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnockoutInput {
    /// 질량 [gr 또는 g]
    pub mass: f64,
    /// 속도 [ft/s 또는 m/s]
    pub velocity: f64,
    /// 직경 [inch 또는 mm]
    pub diameter: f64,
}

/// Taylor Knockout 점수를 계산한다.
///
/// 물리량이 아니라 경험적 지표이므로 역산 함수는 없다. 두 단위 시스템에서 대략 같은
/// 값이 나오도록 분모가 다르다.
pub fn knockout_score(input: KnockoutInput, system: UnitSystem) -> f64 {
    let divisor = match system {
        UnitSystem::Metric => 3500.0,
        UnitSystem::Imperial => 7000.0,
    };
    (input.mass * input.velocity * input.diameter) / divisor
}
