use crate::config::UnitSystem;
use crate::quantity::{Measurements, Quantity};

/// 질량과 속도로 총구 에너지를 계산한다.
///
/// - SI: (m/2) * v² / K
/// - 영국식: m * v² / K
pub fn energy_from(mass: f64, velocity: f64, system: UnitSystem, k: f64) -> f64 {
    match system {
        UnitSystem::Metric => (mass / 2.0) * (velocity * velocity) / k,
        UnitSystem::Imperial => mass * (velocity * velocity) / k,
    }
}

/// 속도와 에너지로 질량을 계산한다.
pub fn mass_from(velocity: f64, energy: f64, system: UnitSystem, k: f64) -> f64 {
    match system {
        UnitSystem::Metric => ((energy * 2.0) / (velocity * velocity)) * k,
        UnitSystem::Imperial => (energy / (velocity * velocity)) * k,
    }
}

/// 질량과 에너지로 속도를 계산한다. 음이 아닌 제곱근을 취한다.
pub fn velocity_from(mass: f64, energy: f64, system: UnitSystem, k: f64) -> f64 {
    match system {
        UnitSystem::Metric => (((energy * 2.0) / mass) * k).sqrt(),
        UnitSystem::Imperial => ((energy / mass) * k).sqrt(),
    }
}

/// 대상 물리량을 계산해 채운 값을 반환한다.
///
/// 0으로 나누기나 음수의 제곱근은 오류로 처리하지 않고 inf/NaN이 그대로 전달된다.
pub fn solve(target: Quantity, given: Measurements, system: UnitSystem, k: f64) -> Measurements {
    let mut solved = given;
    let value = match target {
        Quantity::Energy => energy_from(given.mass, given.velocity, system, k),
        Quantity::Mass => mass_from(given.velocity, given.energy, system, k),
        Quantity::Velocity => velocity_from(given.mass, given.energy, system, k),
    };
    solved.set(target, value);
    solved
}
