use std::io;
use std::process::ExitCode;

use muzzle_energy_toolbox::app;

/// 프로그램의 엔트리 포인트. 로거를 초기화한 뒤 CLI를 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    let code = app::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code)
}
