//! 상세/간단 출력 형식 회귀 테스트.
use muzzle_energy_toolbox::ballistics::{knockout_score, solve, KnockoutInput};
use muzzle_energy_toolbox::config::{Options, Precision, UnitSystem, Verbosity};
use muzzle_energy_toolbox::quantity::{Measurements, Quantity};
use muzzle_energy_toolbox::report::{knockout_line, standard_line};

fn options(system: UnitSystem, verbosity: Verbosity, precision: Precision) -> Options {
    Options {
        unit_system: system,
        verbosity,
        precision,
        ..Options::default()
    }
}

fn energy_line(mass: f64, velocity: f64, opts: Options, k: f64) -> String {
    let given = Measurements::from_inputs(Quantity::Energy, mass, velocity);
    let solved = solve(Quantity::Energy, given, opts.unit_system, k);
    standard_line(&solved, Quantity::Energy, &opts)
}

#[test]
fn imperial_verbose_rounds_every_value() {
    let opts = options(UnitSystem::Imperial, Verbosity::Verbose, Precision::Rounded);
    assert_eq!(
        energy_line(230.0, 900.0, opts, 450_240.0),
        "230 gr @ 900 ft/s = 414 lbf"
    );
    assert_eq!(
        energy_line(230.4, 899.5, opts, 450_240.0),
        "230 gr @ 900 ft/s = 414 lbf"
    );
}

#[test]
fn imperial_verbose_exact() {
    let opts = options(UnitSystem::Imperial, Verbosity::Verbose, Precision::Exact);
    assert_eq!(
        energy_line(230.0, 900.0, opts, 450_240.0),
        "230.00 gr @ 900.00 ft/s = 413.78 lbf"
    );
}

#[test]
fn metric_verbose_rounds_energy_only() {
    let opts = options(UnitSystem::Metric, Verbosity::Verbose, Precision::Rounded);
    assert_eq!(
        energy_line(15.0, 270.0, opts, 1000.0),
        "15.00 g @ 270.00 m/s = 547 J"
    );
    let exact = options(UnitSystem::Metric, Verbosity::Verbose, Precision::Exact);
    assert_eq!(
        energy_line(15.0, 270.0, exact, 1000.0),
        "15.00 g @ 270.00 m/s = 546.75 J"
    );
}

#[test]
fn terse_prints_only_the_target() {
    let rounded = options(UnitSystem::Imperial, Verbosity::Terse, Precision::Rounded);
    assert_eq!(energy_line(230.0, 900.0, rounded, 450_240.0), "414");
    let exact = options(UnitSystem::Imperial, Verbosity::Terse, Precision::Exact);
    assert_eq!(energy_line(230.0, 900.0, exact, 450_240.0), "413.78");

    let given = Measurements::from_inputs(Quantity::Mass, 900.0, 414.0);
    let solved = solve(Quantity::Mass, given, UnitSystem::Imperial, 450_240.0);
    assert_eq!(standard_line(&solved, Quantity::Mass, &rounded), "230");
    assert_eq!(standard_line(&solved, Quantity::Mass, &exact), "230.12");
}

#[test]
fn mass_target_keeps_mass_velocity_energy_order() {
    let opts = options(UnitSystem::Imperial, Verbosity::Verbose, Precision::Rounded);
    let given = Measurements::from_inputs(Quantity::Mass, 900.0, 414.0);
    let solved = solve(Quantity::Mass, given, UnitSystem::Imperial, 450_240.0);
    assert_eq!(
        standard_line(&solved, Quantity::Mass, &opts),
        "230 gr @ 900 ft/s = 414 lbf"
    );
}

#[test]
fn non_finite_results_are_printed_verbatim() {
    let opts = options(UnitSystem::Imperial, Verbosity::Terse, Precision::Rounded);
    let given = Measurements::from_inputs(Quantity::Velocity, 0.0, 100.0);
    let solved = solve(Quantity::Velocity, given, UnitSystem::Imperial, 450_240.0);
    assert_eq!(standard_line(&solved, Quantity::Velocity, &opts), "inf");
}

fn ko(mass: f64, velocity: f64, diameter: f64) -> KnockoutInput {
    KnockoutInput {
        mass,
        velocity,
        diameter,
    }
}

#[test]
fn knockout_imperial_lines() {
    let input = ko(230.0, 860.0, 0.45);
    let score = knockout_score(input, UnitSystem::Imperial);

    let rounded = options(UnitSystem::Imperial, Verbosity::Verbose, Precision::Rounded);
    assert_eq!(
        knockout_line(&input, score, &rounded),
        "230 gr @ 860 ft/s (0.450\" diameter) = 12.72 TKOF"
    );
    let exact = options(UnitSystem::Imperial, Verbosity::Verbose, Precision::Exact);
    assert_eq!(
        knockout_line(&input, score, &exact),
        "230.00 gr @ 860.00 ft/s (0.450\" diameter) = 12.72 TKOF"
    );
    let terse = options(UnitSystem::Imperial, Verbosity::Terse, Precision::Rounded);
    assert_eq!(knockout_line(&input, score, &terse), "12.72");
}

#[test]
fn knockout_metric_ignores_precision() {
    let input = ko(15.0, 255.0, 11.6);
    let score = knockout_score(input, UnitSystem::Metric);
    for precision in [Precision::Rounded, Precision::Exact] {
        let opts = options(UnitSystem::Metric, Verbosity::Verbose, precision);
        assert_eq!(
            knockout_line(&input, score, &opts),
            "15.00 g @ 255.00 m/s (11.60 mm diameter) = 12.68 TKOF"
        );
    }
}
