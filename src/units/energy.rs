use crate::config::UnitSystem;

/// 에너지 단위. 영국식은 관례대로 foot-pound를 lbf로 표기한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    FootPound,
    Joule,
}

impl EnergyUnit {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Imperial => EnergyUnit::FootPound,
            UnitSystem::Metric => EnergyUnit::Joule,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::FootPound => "lbf",
            EnergyUnit::Joule => "J",
        }
    }
}
