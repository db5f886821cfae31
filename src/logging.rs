//! Настройка логирования.
//!
//! Логи пишутся в stderr, чтобы не смешиваться с диалогом REPL в stdout.
//! Уровень по умолчанию `warn`. Переменная `RUST_LOG` имеет приоритет над
//! переданным уровнем:
//!
//! ```bash
//! RUST_LOG=roman_calc=debug roman-calc -e "V + III"
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Уровень логирования по умолчанию.
pub const DEFAULT_LEVEL: &str = "warn";

static INIT: Once = Once::new();

/// Строит фильтр: `RUST_LOG`, если задан, иначе `level`.
fn filter(level: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Инициализирует логирование.
///
/// Повторные вызовы ничего не делают. Некорректная строка уровня
/// заменяется на [`DEFAULT_LEVEL`].
pub fn init(level: &str) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter(level));

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
