use crate::config::UnitSystem;

/// 질량 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    /// 그레인 (파운드당 7000)
    Grain,
    Gram,
}

impl MassUnit {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Imperial => MassUnit::Grain,
            UnitSystem::Metric => MassUnit::Gram,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Grain => "gr",
            MassUnit::Gram => "g",
        }
    }
}
