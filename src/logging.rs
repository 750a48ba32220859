// ==========================================
// Warehouse Packer - инициализация логирования
// ==========================================
// tracing + tracing-subscriber, уровень задаётся
// переменной окружения
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Инициализация логирования
///
/// # Переменные окружения
/// - RUST_LOG: фильтр уровней (по умолчанию: info)
///   например RUST_LOG=debug или RUST_LOG=warehouse_packer=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Инициализация логирования в тестах
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
