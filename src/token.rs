//! Нормализация строки и разбиение на токены.
//!
//! Строка задачи всегда состоит ровно из трёх токенов:
//! `<операнд> <операция> <операнд>`.
//!
//! # Пример
//!
//! ```
//! use roman_calc::token::split;
//!
//! let tokens = split("  V   +  III ").unwrap();
//! assert_eq!((tokens.left, tokens.op, tokens.right), ("V", "+", "III"));
//! ```

use thiserror::Error;

/// Три токена задачи.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Tokens<'a> {
    /// Первый операнд.
    pub left: &'a str,
    /// Операция.
    pub op: &'a str,
    /// Второй операнд.
    pub right: &'a str,
}

/// Ошибка токенизации: число токенов отличается от трёх.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("ожидалось 3 токена, найдено {found}")]
pub struct TokenError {
    /// Сколько токенов найдено.
    pub found: usize,
}

/// Убирает пробелы по краям и схлопывает внутренние серии пробельных
/// символов в один пробел.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Разбивает строку на три токена.
///
/// # Ошибки
///
/// Возвращает [`TokenError`], если токенов не ровно три.
pub fn split(input: &str) -> Result<Tokens<'_>, TokenError> {
    let mut parts = input.split_whitespace();

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(op), Some(right), None) => Ok(Tokens { left, op, right }),
        (a, b, c, d) => {
            let found = [a, b, c, d].iter().flatten().count() + parts.count();
            Err(TokenError { found })
        }
    }
}
