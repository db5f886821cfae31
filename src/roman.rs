//! Перевод чисел между десятичной и римской записью.
//!
//! Разбор римских чисел — только по белому списку литералов `I`..`X`,
//! обратный перевод — жадный по таблице [`ROMAN_TABLE`] и работает для
//! любого положительного значения (результат умножения бывает больше 10).
//!
//! # Примеры
//!
//! ```
//! use roman_calc::roman::{from_roman, to_roman};
//!
//! assert_eq!(from_roman("ix"), Some(9));
//! assert_eq!(to_roman(99), "XCIX");
//! ```

/// Таблица перевода: пары (значение, символ) по убыванию значения.
pub const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Допустимые римские операнды; индекс + 1 — значение.
pub const ROMAN_DIGITS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Переводит десятичное число в римскую запись.
///
/// Для значений меньше 1 возвращает пустую строку: проверку знака делает
/// вызывающий код.
#[must_use]
pub fn to_roman(mut value: i64) -> String {
    let mut result = String::new();
    for &(dec, rom) in &ROMAN_TABLE {
        while value >= dec {
            result.push_str(rom);
            value -= dec;
        }
    }
    result
}

/// Переводит римский литерал `I`..`X` (без учёта регистра) в число.
///
/// Любая другая строка, в том числе корректная римская запись вне
/// диапазона (`XI`, `XL`), даёт `None`.
#[must_use]
pub fn from_roman(literal: &str) -> Option<i64> {
    let upper = literal.to_ascii_uppercase();
    ROMAN_DIGITS
        .iter()
        .position(|&digit| digit == upper)
        .and_then(|idx| i64::try_from(idx + 1).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_values() {
        assert_eq!(from_roman("I"), Some(1));
        assert_eq!(from_roman("IV"), Some(4));
        assert_eq!(from_roman("VIII"), Some(8));
        assert_eq!(from_roman("X"), Some(10));
    }

    #[test]
    fn whitelist_ignores_case() {
        assert_eq!(from_roman("vii"), Some(7));
        assert_eq!(from_roman("iX"), Some(9));
    }

    #[test]
    fn whitelist_rejects_everything_else() {
        assert_eq!(from_roman(""), None);
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("XI"), None);
        assert_eq!(from_roman("XL"), None);
        assert_eq!(from_roman("VX"), None);
        assert_eq!(from_roman("5"), None);
    }

    #[test]
    fn greedy_conversion() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(12), "XII");
        assert_eq!(to_roman(30), "XXX");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(49), "XLIX");
        assert_eq!(to_roman(99), "XCIX");
        assert_eq!(to_roman(100), "C");
        assert_eq!(to_roman(1994), "MCMXCIV");
    }

    #[test]
    fn non_positive_is_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(-5), "");
    }

    #[test]
    fn round_trip_for_operands() {
        for (idx, digit) in ROMAN_DIGITS.iter().enumerate() {
            let value = from_roman(digit).unwrap();
            assert_eq!(value, idx as i64 + 1);
            assert_eq!(to_roman(value), *digit);
        }
    }
}
