//! 명령행 인자를 읽어 실행할 작업으로 바꾼다.

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};
use log::{debug, warn};
use thiserror::Error;

use crate::ballistics::KnockoutInput;
use crate::config::{ConstantSource, Formula, Options, Precision, UnitSystem, Verbosity};
use crate::help::InfoTopic;
use crate::quantity::{Measurements, Quantity};

/// 숫자로 읽을 수 없는 위치 인자에 대입되는 값.
pub const UNSET_VALUE: f64 = -1.0;

/// 명령행 사용법 오류. 모두 종료 코드 1로 끝난다.
#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("Too few arguments")]
    TooFewArguments,
    #[error("Parameters required")]
    ParametersRequired,
    #[error("Need more than one parameter")]
    NeedMoreThanOne,
    #[error("The Taylor Knockout Formula requires three parameters:\nMass, Velocity and Diameter of projectile")]
    KnockoutNeedsThree,
    #[error("{0}")]
    Invalid(String),
}

/// 계산용 플래그 정의. 같은 그룹의 플래그는 나중에 온 것이 이긴다.
///
/// 정보성 플래그(-h, -H, -E, -V)는 `scan_flags`에서 먼저 처리된다.
#[derive(Parser, Debug)]
#[command(
    name = "muzz",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Silent (quiet) mode; print only the resultant number
    #[arg(short = 'S', short_alias = 'q')]
    terse: bool,

    /// Use Si (metric) units of measure
    #[arg(short = 's', overrides_with = "imperial")]
    metric: bool,

    /// Use Imperial units (default)
    #[arg(short = 'i', overrides_with = "metric")]
    imperial: bool,

    /// Calculate for mass (num1 = velocity, num2 = energy)
    #[arg(short = 'm', overrides_with_all = ["velocity", "energy"])]
    mass: bool,

    /// Calculate for velocity (num1 = mass, num2 = energy)
    #[arg(short = 'v', overrides_with_all = ["mass", "energy"])]
    velocity: bool,

    /// Calculate for energy (num1 = mass, num2 = velocity) (default)
    #[arg(short = 'e', overrides_with_all = ["mass", "velocity"])]
    energy: bool,

    /// Use industry standard imperial constant (450,240) (default)
    #[arg(
        short = 'K',
        overrides_with_all = ["custom_constant", "approximate_gravity", "standard_gravity"]
    )]
    default_constant: bool,

    /// Custom user constant
    #[arg(
        short = 'k',
        value_name = "NUM",
        value_parser = parse_constant,
        allow_hyphen_values = true,
        overrides_with_all = ["default_constant", "approximate_gravity", "standard_gravity"]
    )]
    custom_constant: Option<f64>,

    /// Calculate constant using 'industry' GAC-1
    #[arg(
        short = 'c',
        overrides_with_all = ["default_constant", "custom_constant", "standard_gravity"]
    )]
    approximate_gravity: bool,

    /// Calculate constant using standard GAC-2
    #[arg(
        short = 'C',
        overrides_with_all = ["default_constant", "custom_constant", "approximate_gravity"]
    )]
    standard_gravity: bool,

    /// Be precise (do not round any numbers)
    #[arg(short = 'p')]
    exact: bool,

    /// Use Taylor Knockout Formula (give mass, velocity, diameter)
    #[arg(short = 't')]
    knockout: bool,

    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<String>,
}

/// 파싱 결과로 결정된 작업.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Info(InfoTopic),
    Standard {
        options: Options,
        target: Quantity,
        given: Measurements,
    },
    Knockout {
        options: Options,
        input: KnockoutInput,
    },
}

/// 파싱 결과와 함께 오류 스트림에 알릴 진단 메시지.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub invocation: Invocation,
    pub diagnostics: Vec<String>,
}

/// 값을 받는 유일한 플래그
const VALUE_FLAG: char = 'k';
const KNOWN_FLAGS: &str = "hHEVSqsimvekKcCpt";

/// 플래그 묶음을 왼쪽부터 훑은 결과.
#[derive(Debug, Default)]
struct FlagScan {
    /// 가장 먼저 나온 정보성 플래그
    info: Option<InfoTopic>,
    /// 알 수 없는 플래그를 걸러낸 인자 목록
    args: Vec<OsString>,
    unknown: Vec<char>,
}

/// getopt처럼 짧은 플래그 묶음을 순서대로 훑는다.
///
/// 정보성 플래그를 만나면 즉시 멈춘다. `-k`의 값은 검사하지 않고 그대로 넘긴다.
fn scan_flags(args: Vec<OsString>) -> FlagScan {
    let mut scan = FlagScan::default();
    let mut iter = args.into_iter();
    scan.args.extend(iter.next());
    while let Some(arg) = iter.next() {
        let Some(token) = arg.to_str().map(str::to_owned) else {
            scan.args.push(arg);
            continue;
        };
        if token == "--" {
            scan.args.push(arg);
            scan.args.extend(iter.by_ref());
            break;
        }
        if !is_flag_cluster(&token) {
            scan.args.push(arg);
            continue;
        }

        let mut kept = String::from("-");
        let mut chars = token[1..].chars();
        let mut wants_value = false;
        while let Some(c) = chars.next() {
            if let Some(topic) = info_topic(c) {
                scan.info = Some(topic);
                return scan;
            }
            if !KNOWN_FLAGS.contains(c) {
                scan.unknown.push(c);
                continue;
            }
            kept.push(c);
            if c == VALUE_FLAG {
                let rest = chars.as_str();
                kept.push_str(rest);
                wants_value = rest.is_empty();
                break;
            }
        }
        if kept.len() > 1 {
            scan.args.push(kept.into());
        }
        if wants_value {
            scan.args.extend(iter.next());
        }
    }
    scan
}

fn is_flag_cluster(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token.parse::<f64>().is_err()
}

fn info_topic(flag: char) -> Option<InfoTopic> {
    match flag {
        'h' => Some(InfoTopic::Help),
        'H' => Some(InfoTopic::ExtendedHelp),
        'E' => Some(InfoTopic::Examples),
        'V' => Some(InfoTopic::Version),
        _ => None,
    }
}

/// 프로그램 이름을 포함한 인자 목록을 파싱한다.
///
/// 알 수 없는 플래그는 실행을 막지 않고 진단 메시지로만 남는다.
pub fn parse_args<I, T>(args: I) -> Result<Parsed, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return Err(UsageError::TooFewArguments);
    }

    let scan = scan_flags(args);
    let diagnostics: Vec<String> = scan
        .unknown
        .iter()
        .map(|c| format!("muzz: invalid option -- '{c}'"))
        .collect();
    for msg in &diagnostics {
        warn!("{msg}");
    }
    if let Some(topic) = scan.info {
        return Ok(Parsed {
            invocation: Invocation::Info(topic),
            diagnostics,
        });
    }

    let matches = Cli::command()
        .try_get_matches_from(scan.args)
        .map_err(clap_error)?;
    let cli = Cli::from_arg_matches(&matches).map_err(clap_error)?;
    let invocation = cli.invocation()?;
    Ok(Parsed {
        invocation,
        diagnostics,
    })
}

impl Cli {
    fn invocation(&self) -> Result<Invocation, UsageError> {
        let options = self.options();

        match self.values.len() {
            0 => return Err(UsageError::ParametersRequired),
            1 => return Err(UsageError::NeedMoreThanOne),
            _ => {}
        }

        let values: Vec<f64> = self.values.iter().map(|v| parse_value(v)).collect();
        debug!("positional values: {values:?}");

        if options.formula == Formula::Knockout {
            let [mass, velocity, diameter, ..] = values[..] else {
                return Err(UsageError::KnockoutNeedsThree);
            };
            return Ok(Invocation::Knockout {
                options,
                input: KnockoutInput {
                    mass,
                    velocity,
                    diameter,
                },
            });
        }

        let target = self.target();
        Ok(Invocation::Standard {
            options,
            target,
            given: Measurements::from_inputs(target, values[0], values[1]),
        })
    }

    fn options(&self) -> Options {
        let constant = match self.custom_constant {
            Some(k) => ConstantSource::Custom(k),
            None if self.approximate_gravity => ConstantSource::ApproximateGravity,
            None if self.standard_gravity => ConstantSource::StandardGravity,
            None => ConstantSource::Default,
        };
        Options {
            unit_system: if self.metric {
                UnitSystem::Metric
            } else {
                UnitSystem::Imperial
            },
            constant,
            verbosity: if self.terse {
                Verbosity::Terse
            } else {
                Verbosity::Verbose
            },
            precision: if self.exact {
                Precision::Exact
            } else {
                Precision::Rounded
            },
            formula: if self.knockout {
                Formula::Knockout
            } else {
                Formula::Standard
            },
        }
    }

    fn target(&self) -> Quantity {
        if self.mass {
            Quantity::Mass
        } else if self.velocity {
            Quantity::Velocity
        } else {
            Quantity::Energy
        }
    }
}

/// 위치 인자를 숫자로 읽는다. 실패하면 오류 대신 -1을 돌려준다.
fn parse_value(token: &str) -> f64 {
    match token.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!("'{token}' is not a number, using {UNSET_VALUE}");
            UNSET_VALUE
        }
    }
}

fn parse_constant(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(k) if k > 0.0 => Ok(k),
        Ok(k) => Err(format!("constant must be greater than zero, got {k}")),
        Err(_) => Err(format!("'{s}' is not a number")),
    }
}

fn clap_error(err: clap::Error) -> UsageError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let msg = first.strip_prefix("error: ").unwrap_or(first);
    UsageError::Invalid(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_value_becomes_unset() {
        assert_eq!(parse_value("abc"), UNSET_VALUE);
        assert_eq!(parse_value(""), UNSET_VALUE);
        assert_eq!(parse_value(" 230 "), 230.0);
        assert_eq!(parse_value(".45"), 0.45);
    }

    fn scan(args: &[&str]) -> FlagScan {
        scan_flags(args.iter().map(OsString::from).collect())
    }

    #[test]
    fn scan_drops_unknown_flags_from_clusters() {
        let s = scan(&["muzz", "-xq", "-z", "230", "900"]);
        assert_eq!(s.unknown, vec!['x', 'z']);
        assert_eq!(s.args, ["muzz", "-q", "230", "900"].map(OsString::from));
        assert_eq!(s.info, None);
    }

    #[test]
    fn scan_keeps_constant_value_untouched() {
        let s = scan(&["muzz", "-qkhx", "-k", "-h", "1", "2"]);
        assert_eq!(s.info, None);
        assert!(s.unknown.is_empty());
        assert_eq!(
            s.args,
            ["muzz", "-qkhx", "-k", "-h", "1", "2"].map(OsString::from)
        );
    }

    #[test]
    fn scan_stops_at_double_dash_and_numbers() {
        let s = scan(&["muzz", "-5", "--", "-h"]);
        assert_eq!(s.info, None);
        assert_eq!(s.args, ["muzz", "-5", "--", "-h"].map(OsString::from));
    }

    #[test]
    fn custom_constant_must_be_positive() {
        assert_eq!(parse_constant("1000"), Ok(1000.0));
        assert!(parse_constant("0").is_err());
        assert!(parse_constant("-5").is_err());
        assert!(parse_constant("k").is_err());
    }
}
