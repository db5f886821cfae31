//! # roman_calc
//!
//! Консольный калькулятор для пары чисел в арабской или римской записи.
//!
//! Поддерживает:
//! - Операнды `1`..`10` или `I`..`X` (римские — без учёта регистра)
//! - Бинарные операции: `+`, `-`, `*`, `/` (деление целочисленное)
//! - Ответ в той же системе счисления, что и операнды
//!
//! # Пример использования
//!
//! ```
//! use roman_calc::perform;
//!
//! assert_eq!(perform("V + III").unwrap(), "VIII");
//! assert_eq!(perform("5 + 3").unwrap(), "8");
//! assert!(perform("V + 3").is_err());
//! ```

pub mod expression;
pub mod logging;
pub mod parser;
pub mod roman;
pub mod token;

use std::io::{self, BufRead, Write};

/// Приглашение перед каждой строкой ввода.
pub const PROMPT: &str = "Input expression: (q for exit)";

/// Команда выхода из REPL.
pub const QUIT: &str = "q";

/// Сообщение при выходе.
pub const FAREWELL: &str = "Exit";

/// Общий тип ошибки калькулятора.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора задачи.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления или записи ответа.
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

/// Вид ошибки без подробностей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IncorrectFormat,
    IncorrectNumber,
    OutOfNumberRange,
    IncorrectOperation,
    NotMathematicalOperation,
    MismatchOperands,
    DivideByZero,
    IncorrectRoman,
}

impl CalcError {
    /// Возвращает вид ошибки.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        use expression::EvalError;
        use parser::ParseError;

        match self {
            Self::Parse(ParseError::IncorrectFormat) => ErrorKind::IncorrectFormat,
            Self::Parse(ParseError::IncorrectNumber) => ErrorKind::IncorrectNumber,
            Self::Parse(ParseError::OutOfNumberRange) => ErrorKind::OutOfNumberRange,
            Self::Parse(ParseError::IncorrectOperation(_)) => ErrorKind::IncorrectOperation,
            Self::Parse(ParseError::NotMathematicalOperation(_)) => {
                ErrorKind::NotMathematicalOperation
            }
            Self::Parse(ParseError::MismatchOperands) => ErrorKind::MismatchOperands,
            Self::Eval(EvalError::DivideByZero) => ErrorKind::DivideByZero,
            Self::Eval(EvalError::IncorrectRoman) => ErrorKind::IncorrectRoman,
        }
    }
}

/// Решает задачу из одной строки и возвращает ответ.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
///
/// # Примеры
///
/// ```
/// use roman_calc::{ErrorKind, perform};
///
/// assert_eq!(perform("x * x").unwrap(), "C");
/// assert_eq!(perform("3 - 5").unwrap(), "-2");
/// assert_eq!(perform("V - X").unwrap_err().kind(), ErrorKind::IncorrectRoman);
/// ```
pub fn perform(input: &str) -> Result<String, CalcError> {
    let task = parser::parse(input)?;
    let answer = task.solve()?;
    Ok(answer)
}

/// Запускает интерактивный REPL-калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock())
}

/// Цикл REPL над произвольными потоками.
///
/// Перед каждой строкой печатает [`PROMPT`]. Строка [`QUIT`] или конец
/// ввода завершают цикл, пустая строка пропускается. На выходе печатает
/// [`FAREWELL`].
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run_with<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{PROMPT}")?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        let input = line.trim();

        if input == QUIT {
            break;
        }

        if !input.is_empty() {
            match perform(input) {
                Ok(answer) => writeln!(writer, "{answer}")?,
                Err(e) => {
                    tracing::debug!(input, kind = ?e.kind(), "задача отклонена");
                    writeln!(writer, "{e}")?;
                }
            }
        }

        writeln!(writer, "{PROMPT}")?;
        writer.flush()?;
    }

    writeln!(writer, "{FAREWELL}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! perform_tests {
        ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(perform($input).as_deref(), $expected, "ввод: '{}'", $input);
                }
            )*
        };
    }

    macro_rules! error_tests {
        ($($name:ident: $input:expr => $kind:ident),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    let err = perform($input).unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::$kind, "ввод: '{}'", $input);
                }
            )*
        };
    }

    perform_tests! {
        // Арабские
        arabic_add: "5 + 3" => Ok("8"),
        arabic_sub: "10 - 3" => Ok("7"),
        arabic_sub_negative: "3 - 5" => Ok("-2"),
        arabic_sub_zero: "4 - 4" => Ok("0"),
        arabic_mul: "10 * 10" => Ok("100"),
        arabic_div: "7 / 2" => Ok("3"),
        arabic_div_zero_result: "1 / 10" => Ok("0"),

        // Римские
        roman_add: "V + III" => Ok("VIII"),
        roman_sub: "X - I" => Ok("IX"),
        roman_mul: "X * X" => Ok("C"),
        roman_mul_large: "IX * IX" => Ok("LXXXI"),
        roman_div: "IX / II" => Ok("IV"),
        roman_lowercase: "vi * vii" => Ok("XLII"),

        // Пробелы
        extra_spaces: "   2    *   3  " => Ok("6"),
        tabs: "\t2\t*\t3" => Ok("6"),
    }

    error_tests! {
        error_format_empty: "" => IncorrectFormat,
        error_format_glued: "1+2" => IncorrectFormat,
        error_format_long: "1 + 2 + 3" => IncorrectFormat,
        error_number: "five + 3" => IncorrectNumber,
        error_number_roman: "XII + I" => IncorrectNumber,
        error_range_high: "11 + 1" => OutOfNumberRange,
        error_range_zero: "5 / 0" => OutOfNumberRange,
        error_operation: "5 +- 3" => IncorrectOperation,
        error_not_math: "5 $ 3" => NotMathematicalOperation,
        error_mismatch: "V + 3" => MismatchOperands,
        error_roman_negative: "V - X" => IncorrectRoman,
        error_roman_zero: "V - V" => IncorrectRoman,
        error_roman_div_zero: "I / II" => IncorrectRoman,
    }

    #[test]
    fn error_kind_wraps_layers() {
        let err = perform("V - X").unwrap_err();
        assert!(matches!(
            err,
            CalcError::Eval(expression::EvalError::IncorrectRoman)
        ));

        let err = perform("V + 3").unwrap_err();
        assert!(matches!(
            err,
            CalcError::Parse(parser::ParseError::MismatchOperands)
        ));
    }

    #[test]
    fn error_display_is_transparent() {
        let err = perform("V - X").unwrap_err();
        assert_eq!(err.to_string(), "Err: Roman number can not be negative or zero!");
    }

    #[test]
    fn repeated_calls_are_independent() {
        let first = perform("VII * II");
        let _ = perform("1 + 1");
        let _ = perform("V + 3");
        assert_eq!(perform("VII * II"), first);
        assert_eq!(first.as_deref(), Ok("XIV"));
    }
}
