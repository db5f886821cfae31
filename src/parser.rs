//! Разбор строки задачи в [`Task`].
//!
//! Порядок проверок фиксирован и определяет, какая ошибка будет выдана:
//!
//! 1. Ровно три токена.
//! 2. Первый операнд.
//! 3. Второй операнд.
//! 4. Операция.
//! 5. Операнды в одной системе счисления.
//!
//! Операнд сначала разбирается как десятичное целое, затем как римский
//! литерал `I`..`X` без учёта регистра. Значение должно лежать в 1..=10.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::expression::{BinaryOp, Numeral, Task};
//! use roman_calc::parser::{ParseError, parse};
//!
//! assert_eq!(
//!     parse("vi / ii").unwrap(),
//!     Task::new(6, BinaryOp::Div, 2, Numeral::Roman)
//! );
//! assert_eq!(parse("V + 3"), Err(ParseError::MismatchOperands));
//! ```

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::expression::{BinaryOp, Numeral, Task};
use crate::roman::from_roman;
use crate::token::{self, TokenError};

/// Допустимые значения операндов.
pub const OPERAND_RANGE: RangeInclusive<i64> = 1..=10;

/// Ошибки, возникающие при разборе задачи.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Строка не разбивается ровно на три токена.
    #[error("Err: Incorrect task format! (need: <operand_1> <+, -, *, /> <operand_2>)")]
    IncorrectFormat,

    /// Операнд не является ни целым числом, ни римским литералом `I`..`X`.
    #[error("Err: Incorrect number or out of range [I..X]!")]
    IncorrectNumber,

    /// Операнд вне диапазона 1..=10.
    #[error("Err: Number must be in range [1..10]!")]
    OutOfNumberRange,

    /// Токен операции длиннее одного символа.
    #[error("{0:?} Err: Incorrect operation!")]
    IncorrectOperation(String),

    /// Односимвольный токен, не являющийся операцией.
    #[error("{0:?} Err: Input is not a mathematical operation!")]
    NotMathematicalOperation(String),

    /// Операнды записаны в разных системах счисления.
    #[error("Err: Both operands must be of the same number (Arabian or Roman)!")]
    MismatchOperands,
}

impl From<TokenError> for ParseError {
    fn from(_: TokenError) -> Self {
        Self::IncorrectFormat
    }
}

/// Разобранный операнд.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Значение.
    pub value: i64,
    /// Система счисления, в которой он был записан.
    pub numeral: Numeral,
}

/// Разбирает один операнд.
///
/// # Ошибки
///
/// - [`ParseError::IncorrectNumber`], если токен не число и не римский литерал.
/// - [`ParseError::OutOfNumberRange`], если значение вне 1..=10.
pub fn parse_operand(token: &str) -> Result<Operand, ParseError> {
    let (value, numeral) = match token.parse::<i64>() {
        Ok(value) => (value, Numeral::Arabic),
        Err(_) => {
            let value = from_roman(token).ok_or(ParseError::IncorrectNumber)?;
            (value, Numeral::Roman)
        }
    };

    if !OPERAND_RANGE.contains(&value) {
        return Err(ParseError::OutOfNumberRange);
    }

    tracing::debug!(token, value, %numeral, "операнд");
    Ok(Operand { value, numeral })
}

/// Разбирает токен операции.
///
/// Длина считается в байтах, поэтому любой не-ASCII символ — это
/// [`ParseError::IncorrectOperation`].
///
/// # Ошибки
///
/// - [`ParseError::IncorrectOperation`], если длина токена не равна 1.
/// - [`ParseError::NotMathematicalOperation`] для прочих одиночных символов.
pub fn parse_operator(token: &str) -> Result<BinaryOp, ParseError> {
    let &[byte] = token.as_bytes() else {
        return Err(ParseError::IncorrectOperation(token.to_string()));
    };

    BinaryOp::from_symbol(char::from(byte))
        .ok_or_else(|| ParseError::NotMathematicalOperation(token.to_string()))
}

/// Разбирает строку в задачу.
///
/// # Ошибки
///
/// Возвращает [`ParseError`] на первой неудачной проверке.
pub fn parse(input: &str) -> Result<Task, ParseError> {
    let line = token::normalize(input);
    tracing::trace!(line = %line, "нормализованная строка");

    let tokens = token::split(&line)?;
    let left = parse_operand(tokens.left)?;
    let right = parse_operand(tokens.right)?;
    let op = parse_operator(tokens.op)?;
    tracing::debug!(%op, "операция");

    if left.numeral != right.numeral {
        return Err(ParseError::MismatchOperands);
    }

    Ok(Task::new(left.value, op, right.value, left.numeral))
}
