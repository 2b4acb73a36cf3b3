/// 계산 대상이 되는 물리량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantity {
    Mass,
    Velocity,
    /// 기본값
    #[default]
    Energy,
}

impl Quantity {
    /// 두 위치 인자가 어떤 물리량으로 해석되는지 반환한다.
    ///
    /// - 에너지: (질량, 속도)
    /// - 질량: (속도, 에너지)
    /// - 속도: (질량, 에너지)
    pub fn inputs(self) -> (Quantity, Quantity) {
        match self {
            Quantity::Energy => (Quantity::Mass, Quantity::Velocity),
            Quantity::Mass => (Quantity::Velocity, Quantity::Energy),
            Quantity::Velocity => (Quantity::Mass, Quantity::Energy),
        }
    }
}

/// 질량·속도·에너지 세 값을 담는 컨테이너.
///
/// 입력되지 않은 값은 -1로 남아 있다가 계산 후 채워진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub mass: f64,
    pub velocity: f64,
    pub energy: f64,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            mass: -1.0,
            velocity: -1.0,
            energy: -1.0,
        }
    }
}

impl Measurements {
    /// 대상 물리량에 맞춰 두 입력값을 배치한다.
    pub fn from_inputs(target: Quantity, first: f64, second: f64) -> Self {
        let mut m = Measurements::default();
        let (a, b) = target.inputs();
        m.set(a, first);
        m.set(b, second);
        m
    }

    pub fn get(&self, kind: Quantity) -> f64 {
        match kind {
            Quantity::Mass => self.mass,
            Quantity::Velocity => self.velocity,
            Quantity::Energy => self.energy,
        }
    }

    pub fn set(&mut self, kind: Quantity, value: f64) {
        match kind {
            Quantity::Mass => self.mass = value,
            Quantity::Velocity => self.velocity = value,
            Quantity::Energy => self.energy = value,
        }
    }
}
