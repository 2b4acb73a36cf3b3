use crate::config::UnitSystem;

/// 속도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUnit {
    FootPerSecond,
    MeterPerSecond,
}

impl VelocityUnit {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Imperial => VelocityUnit::FootPerSecond,
            UnitSystem::Metric => VelocityUnit::MeterPerSecond,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MeterPerSecond => "m/s",
        }
    }
}
