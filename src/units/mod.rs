//! 단위 시스템별 단위 표기 모음.

pub mod energy;
pub mod length;
pub mod mass;
pub mod velocity;

pub use energy::EnergyUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use velocity::VelocityUnit;

use crate::config::UnitSystem;

/// 한 단위 시스템에서 쓰는 단위 조합.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSet {
    pub mass: MassUnit,
    pub velocity: VelocityUnit,
    pub energy: EnergyUnit,
    pub diameter: LengthUnit,
}

impl UnitSet {
    pub fn for_system(system: UnitSystem) -> Self {
        Self {
            mass: MassUnit::for_system(system),
            velocity: VelocityUnit::for_system(system),
            energy: EnergyUnit::for_system(system),
            diameter: LengthUnit::for_system(system),
        }
    }
}
