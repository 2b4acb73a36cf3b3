use std::ffi::OsString;
use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::ballistics;
use crate::help;
use crate::report;
use crate::ui_cli::{self, Invocation, UsageError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 명령행 사용법 오류
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// 출력 스트림 오류
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// 실패 시 종료 코드. 오류 종류와 상관없이 같다.
pub const EXIT_FAILURE: u8 = 1;

/// 인자를 파싱하고 계산한 뒤 결과를 `out`에 쓴다.
///
/// 정보성 플래그는 다른 인자를 모두 무시하고 해당 문구만 출력한다.
/// 알 수 없는 플래그에 대한 진단은 `err`에 쓰고 계산은 계속한다.
pub fn execute<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let parsed = ui_cli::parse_args(args)?;
    for msg in &parsed.diagnostics {
        writeln!(err, "{msg}")?;
    }
    let line = match parsed.invocation {
        Invocation::Info(topic) => {
            out.write_all(help::text(topic).as_bytes())?;
            return Ok(());
        }
        Invocation::Standard {
            options,
            target,
            given,
        } => {
            let k = ballistics::resolve_constant(options.unit_system, options.constant);
            debug!(
                "solving for {target:?} ({:?}, {:?}), K = {k}",
                options.unit_system, options.constant
            );
            let solved = ballistics::solve(target, given, options.unit_system, k);
            report::standard_line(&solved, target, &options)
        }
        Invocation::Knockout { options, input } => {
            debug!("knockout formula ({:?})", options.unit_system);
            let score = ballistics::knockout_score(input, options.unit_system);
            report::knockout_line(&input, score, &options)
        }
    };
    writeln!(out, "{line}")?;
    Ok(())
}

/// 오류 메시지와 사용법을 `err`에 쓴다.
pub fn report_error<W: Write>(error: &AppError, err: &mut W) -> std::io::Result<()> {
    writeln!(err, "ERROR:  {error}")?;
    if let AppError::Usage(_) = error {
        writeln!(err, "{}", help::USAGE)?;
        writeln!(err, "\n{}", help::HINT)?;
    }
    Ok(())
}

/// CLI 실행 후 종료 코드를 반환한다.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    match execute(args, out, err) {
        Ok(()) => 0,
        Err(e) => {
            // 오류 스트림마저 쓸 수 없으면 종료 코드로만 알린다.
            let _ = report_error(&e, err);
            EXIT_FAILURE
        }
    }
}
