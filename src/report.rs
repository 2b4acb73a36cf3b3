//! 계산 결과를 사람이 읽을 문자열로 만든다. 출력 스트림에는 쓰지 않는다.

use crate::ballistics::KnockoutInput;
use crate::config::{Options, UnitSystem, Verbosity};
use crate::quantity::{Measurements, Quantity};
use crate::units::UnitSet;

/// 일반 공식 결과를 한 줄로 만든다. 줄바꿈은 포함하지 않는다.
///
/// 상세 출력에서 반올림 모드일 때 영국식은 세 값을 모두 정수로 반올림하고,
/// SI는 에너지만 반올림한다.
pub fn standard_line(solved: &Measurements, target: Quantity, options: &Options) -> String {
    match options.verbosity {
        Verbosity::Terse => terse_number(solved.get(target), options.is_exact()),
        Verbosity::Verbose => verbose_standard(solved, options),
    }
}

fn verbose_standard(m: &Measurements, options: &Options) -> String {
    let units = UnitSet::for_system(options.unit_system);
    let (mu, vu, eu) = (
        units.mass.symbol(),
        units.velocity.symbol(),
        units.energy.symbol(),
    );
    if options.is_exact() {
        return format!(
            "{:.2} {mu} @ {:.2} {vu} = {:.2} {eu}",
            m.mass, m.velocity, m.energy
        );
    }
    match options.unit_system {
        UnitSystem::Metric => format!(
            "{:.2} {mu} @ {:.2} {vu} = {:.0} {eu}",
            m.mass,
            m.velocity,
            m.energy.round()
        ),
        UnitSystem::Imperial => format!(
            "{:.0} {mu} @ {:.0} {vu} = {:.0} {eu}",
            m.mass.round(),
            m.velocity.round(),
            m.energy.round()
        ),
    }
}

/// Taylor Knockout 결과를 한 줄로 만든다.
///
/// 점수는 정밀도 옵션과 상관없이 항상 소수점 둘째 자리까지 출력한다.
pub fn knockout_line(input: &KnockoutInput, score: f64, options: &Options) -> String {
    if options.verbosity == Verbosity::Terse {
        return format!("{score:.2}");
    }
    let units = UnitSet::for_system(options.unit_system);
    let (mu, vu, du) = (
        units.mass.symbol(),
        units.velocity.symbol(),
        units.diameter.symbol(),
    );
    match options.unit_system {
        UnitSystem::Metric => format!(
            "{:.2} {mu} @ {:.2} {vu} ({:.2} {du} diameter) = {score:.2} TKOF",
            input.mass, input.velocity, input.diameter
        ),
        UnitSystem::Imperial if options.is_exact() => format!(
            "{:.2} {mu} @ {:.2} {vu} ({:.3}{du} diameter) = {score:.2} TKOF",
            input.mass, input.velocity, input.diameter
        ),
        UnitSystem::Imperial => format!(
            "{:.0} {mu} @ {:.0} {vu} ({:.3}{du} diameter) = {score:.2} TKOF",
            input.mass.round(),
            input.velocity.round(),
            input.diameter
        ),
    }
}

/// 숫자만 출력하는 간단 모드. 반올림 모드는 표시 자릿수만 줄인다.
fn terse_number(value: f64, exact: bool) -> String {
    if exact {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}
