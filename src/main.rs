use std::process::ExitCode;

use clap::Parser;

use roman_calc::{logging, perform, run};

/// Калькулятор для арабских (1..10) и римских (I..X) чисел.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Решить одну задачу и выйти, например "V + III".
    #[arg(short, long)]
    expr: Option<String>,

    /// Уровень логирования (error, warn, info, debug, trace).
    #[arg(long, env = "ROMAN_CALC_LOG", default_value = logging::DEFAULT_LEVEL)]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Some(expr) = cli.expr {
        return match perform(&expr) {
            Ok(answer) => {
                println!("{answer}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = run() {
        eprintln!("Ошибка ввода-вывода: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
