use crate::config::{ConstantSource, UnitSystem};

/// 소화기 업계에서 lbf 계산에 쓰는 근사 중력가속도 [ft/s²] (GAC-1)
pub const GRAVITY_IMPERIAL_APPROX: f64 = 32.163;
/// 근사하지 않은 표준 중력가속도 [ft/s²] (GAC-2)
pub const GRAVITY_IMPERIAL: f64 = 32.1739;
/// 파운드당 그레인 수
pub const GRAINS_PER_POUND: f64 = 7000.0;
/// 중력가속도로 계산하지 않을 때 쓰는 영국식 업계 표준 K
pub const INDUSTRY_CONSTANT: f64 = 450_240.0;
/// SI 단위에서의 K (g → kg)
pub const METRIC_CONSTANT: f64 = 1000.0;

/// 영국식 K = 2 * GAC * 7000
pub fn gravity_constant(gravity_ft_s2: f64) -> f64 {
    2.0 * gravity_ft_s2 * GRAINS_PER_POUND
}

/// 단위 시스템과 상수 선택으로부터 K를 결정한다.
///
/// 사용자 지정값은 그대로 쓰고, 그 외에는 SI 단위일 때 항상 1000이 된다.
pub fn resolve_constant(system: UnitSystem, source: ConstantSource) -> f64 {
    let k = match source {
        ConstantSource::Custom(k) => return k,
        ConstantSource::Default => INDUSTRY_CONSTANT,
        ConstantSource::ApproximateGravity => gravity_constant(GRAVITY_IMPERIAL_APPROX),
        ConstantSource::StandardGravity => gravity_constant(GRAVITY_IMPERIAL),
    };
    match system {
        UnitSystem::Metric => METRIC_CONSTANT,
        UnitSystem::Imperial => k,
    }
}
