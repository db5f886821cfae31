//! Задача калькулятора: вычисление и запись ответа.
//!
//! [`Task`] — уже проверенная задача: оба операнда в диапазоне 1..=10 и в
//! одной системе счисления. Ответ записывается в той же системе, что и
//! операнды.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::expression::{BinaryOp, Numeral, Task};
//!
//! let task = Task::new(5, BinaryOp::Add, 3, Numeral::Roman);
//! assert_eq!(task.solve(), Ok("VIII".to_string()));
//!
//! let task = Task::new(3, BinaryOp::Sub, 5, Numeral::Arabic);
//! assert_eq!(task.solve(), Ok("-2".to_string()));
//! ```

use std::fmt::{self, Display};

use thiserror::Error;

use crate::roman::to_roman;

/// Ошибки при вычислении и записи ответа.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("Err: Divide by zero!")]
    DivideByZero,
    /// Ответ в римской записи меньше единицы.
    #[error("Err: Roman number can not be negative or zero!")]
    IncorrectRoman,
}

/// Система счисления операндов и ответа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    /// Арабские цифры.
    Arabic,
    /// Римские цифры.
    Roman,
}

impl Numeral {
    /// Записывает значение в данной системе счисления.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::IncorrectRoman`], если римское значение меньше 1.
    pub fn render(self, value: i64) -> Result<String, EvalError> {
        match self {
            Self::Arabic => Ok(value.to_string()),
            Self::Roman if value < 1 => Err(EvalError::IncorrectRoman),
            Self::Roman => Ok(to_roman(value)),
        }
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => f.write_str("arabic"),
            Self::Roman => f.write_str("roman"),
        }
    }
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление.
    Div,
}

impl BinaryOp {
    /// Операция по её символу.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Символ операции.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// Деление отбрасывает дробную часть (округление к нулю). Операнды
    /// ограничены диапазоном 1..=10, переполнение невозможно.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivideByZero`], если делитель равен нулю.
    pub const fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivideByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Проверенная задача: два операнда, операция и общая система счисления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Первый операнд.
    pub left: i64,
    /// Операция.
    pub op: BinaryOp,
    /// Второй операнд.
    pub right: i64,
    /// Система счисления обоих операндов.
    pub numeral: Numeral,
}

impl Task {
    /// Создать задачу.
    #[must_use]
    pub const fn new(left: i64, op: BinaryOp, right: i64, numeral: Numeral) -> Self {
        Self {
            left,
            op,
            right,
            numeral,
        }
    }

    /// Вычислить числовое значение.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivideByZero`] при делении на ноль.
    pub const fn evaluate(&self) -> Result<i64, EvalError> {
        self.op.apply(self.left, self.right)
    }

    /// Вычислить и записать ответ в системе счисления операндов.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivideByZero`] при делении на ноль.
    /// - [`EvalError::IncorrectRoman`], если римский ответ меньше 1.
    pub fn solve(&self) -> Result<String, EvalError> {
        let value = self.evaluate()?;
        tracing::debug!(task = %self, value, "вычислено");
        self.numeral.render(value)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ({})", self.left, self.op, self.right, self.numeral)
    }
}
