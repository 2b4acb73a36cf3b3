//! 명령행 플래그로부터 만들어지는 실행 옵션. 플래그 그룹마다 하나의 enum을 둔다.

/// 사용 가능한 단위 시스템.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// 그레인, ft/s, lbf (기본값)
    #[default]
    Imperial,
    /// 그램, m/s, 줄(J)
    Metric,
}

/// 상수 K를 어떻게 정할지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConstantSource {
    /// 업계 표준값 450240 (기본값)
    #[default]
    Default,
    /// K = 2 * 32.163 * 7000
    ApproximateGravity,
    /// K = 2 * 32.1739 * 7000
    StandardGravity,
    /// 사용자가 지정한 값을 그대로 사용
    Custom(f64),
}

/// 출력 상세도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// 단위와 함께 세 값을 모두 출력
    #[default]
    Verbose,
    /// 결과 숫자만 출력
    Terse,
}

/// 출력 정밀도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Rounded,
    Exact,
}

/// 사용할 공식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formula {
    /// 일반 운동에너지 공식
    #[default]
    Standard,
    /// Taylor Knockout Formula
    Knockout,
}

/// 한 번의 실행 동안 사용하는 옵션 묶음.
///
/// 플래그 파싱 중에만 만들어지고 이후에는 읽기 전용으로 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Options {
    pub unit_system: UnitSystem,
    pub constant: ConstantSource,
    pub verbosity: Verbosity,
    pub precision: Precision,
    pub formula: Formula,
}

impl Options {
    pub fn is_exact(&self) -> bool {
        self.precision == Precision::Exact
    }
}
