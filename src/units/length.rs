use crate::config::UnitSystem;

/// 탄자 직경 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// 인치 구경 (예: .45)
    InchCaliber,
    Millimeter,
}

impl LengthUnit {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Imperial => LengthUnit::InchCaliber,
            UnitSystem::Metric => LengthUnit::Millimeter,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::InchCaliber => "\"",
            LengthUnit::Millimeter => "mm",
        }
    }
}
