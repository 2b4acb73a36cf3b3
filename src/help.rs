//! 정보성 플래그(-h, -H, -E, -V)가 출력하는 문구.

/// 정보성 출력 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    Help,
    ExtendedHelp,
    Examples,
    Version,
}

pub const USAGE: &str = "Usage:  muzz [OPTION] MASS VELOCITY [DIAMETER]";

pub const HINT: &str = "To view help, run with -h argument.";

const HELP_BODY: &str = "
The program is used primarily to calculate the muzzle energy of projectiles.

Imperial gravity acceleration constants (K = 2 * GAC * 7000) :
GAC-1 (industry):  32.163\tGAC-2 (standard):  32.1739

Options
  -h\t\tPrint this help text
  -H\t\tPrint additional information on units used, etc.
  -E\t\tPrint example usage
  -V\t\tPrint version and author info
  -S or q\tSilent (quiet) mode; print only the resultant number
  -s\t\tUse Si (metric) units of measure - grams, m/s, joules
  -i\t\tUse Imperial units - grains, ft/s, lbf (default)
  -m\t\tCalculate for mass (num1 = velocity, num2 = energy)
  -v\t\tCalculate for velocity (num1 = mass, num2 = energy)
  -e\t\tCalculate for energy (num1 = mass, num2 = velocity) (default)
  -K\t\tUse industry standard imperial constant (450,240)  (default)
  -k [num]\tCustom user constant
  -c\t\tCalculate constant using 'industry' GAC-1
  -C\t\tCalculate constant using standard GAC-2
  -p\t\tBe precise (do not round any numbers)
  -t\t\tUse Taylor Knockout Formula (give mass, velocity, diameter)
";

const EXAMPLES: &str = "Examples:

muzz 230 900
  Returns muzzle energy of a 230 grain bullet @ 900 ft/s

muzz -s 15 270
  Using Si units of measure, returns joules (15grams @ 270 m/s)

muzz -qp 230 900
  Same, but only the number and with nothing rounded

muzz -mq 900 414
  Given the velocity and muzzle energy, it will return only the mass
  of the projectile.

muzz -t 230 860 .45
  Prints result using Taylor Knockout Formula, with the params being
  the mass (grains), velocity (ft/s) and diameter

muzz -ts 15 255 11.6
  Same, but using Si units (grams, meters/second, mm)
";

const EXTENDED_HELP: &str = "All units of measure are Imperial by default.

Weight:
  Si:\t\tGrams (g)
  Imperial:\tGrains (gr) (7000 per pound)

Velocity:
  Si:\t\tMeters per second (m/s)
  Imperial:\tFeet per second (ft/s)

Diameter:
  Si:\t\tMillimeters (mm)
  Imperial:\tInch caliber (fractions of inch) (ex.: .45)

Energy:
  Si:\t\tJoules (J)
  Imperial:\tFoot-pounds (lbf)


To calculate the standard muzzle energy of a projectile:

  Si:\t\t( (mass / 2) * (velocity*velocity)) / K
  Imperial:\t( mass * (velocity*velocity)) / K

  Default values of K are 450240 (Imperial) or 1000 (Si).
  To use different numbers to calculate K, use the '-c' or '-C' options:
    -c:\t\tK = 2 * 32.163 * 7000
    -C:\t\tK = 2 * 32.1739 * 7000

  You can also use the '-k' option to use a custom constant.

The Taylor Knockout Formula, if used, will return a number that's roughly the
same regardless of whether or not the user chooses Si or Imperial units
of measure.  The formula is as follows:

  Si:\t\t( mass * velocity * diameter ) / 3500
  Imperial:\t( mass * velocity * diameter ) / 7000
";

/// 주제에 해당하는 전체 문구를 반환한다. 마지막 줄바꿈까지 포함한다.
pub fn text(topic: InfoTopic) -> String {
    match topic {
        InfoTopic::Help => format!("{USAGE}\n{HELP_BODY}"),
        InfoTopic::ExtendedHelp => EXTENDED_HELP.to_string(),
        InfoTopic::Examples => EXAMPLES.to_string(),
        InfoTopic::Version => format!(
            "muzz, version {}\n{}\n",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_AUTHORS")
        ),
    }
}
