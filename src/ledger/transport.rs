// ==========================================
// Warehouse Packer - транспорт складского реестра
// ==========================================
// Сетевые вызовы блокирующие: операция завершается или падает
// до приёма следующего действия оператора.
// ==========================================

use crate::domain::ledger::LedgerEntry;
use crate::ledger::error::{LedgerError, LedgerResult};

/// Транспорт внешнего складского реестра.
///
/// pull и push работают с диапазоном целиком: чтение заменяет
/// локальное зеркало, запись затирает удалённый диапазон,
/// последняя запись побеждает.
pub trait LedgerTransport {
    /// Подготовка удалённого хранилища (лист и строка заголовков)
    fn ensure_remote(&mut self) -> LedgerResult<()>;

    /// Чтение всех строк реестра
    fn pull(&mut self) -> LedgerResult<Vec<LedgerEntry>>;

    /// Полная перезапись реестра
    fn push(&mut self, entries: &[LedgerEntry]) -> LedgerResult<()>;
}

// ==========================================
// Транспорт в памяти (тесты и автономный режим)
// ==========================================
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    rows: Vec<LedgerEntry>,
    calls: u32,
    fail_on_call: Option<u32>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<LedgerEntry>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// N-й по счёту вызов транспорта завершится ошибкой
    /// (нумерация с единицы)
    pub fn fail_on_call(mut self, call: u32) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Текущее содержимое «удалённого» реестра
    pub fn rows(&self) -> &[LedgerEntry] {
        &self.rows
    }

    fn take_failure(&mut self) -> LedgerResult<()> {
        self.calls += 1;
        if self.fail_on_call == Some(self.calls) {
            return Err(LedgerError::Transport("имитация сбоя сети".to_string()));
        }
        Ok(())
    }
}

impl LedgerTransport for InMemoryTransport {
    fn ensure_remote(&mut self) -> LedgerResult<()> {
        self.take_failure()
    }

    fn pull(&mut self) -> LedgerResult<Vec<LedgerEntry>> {
        self.take_failure()?;
        Ok(self.rows.clone())
    }

    fn push(&mut self, entries: &[LedgerEntry]) -> LedgerResult<()> {
        self.take_failure()?;
        self.rows = entries.to_vec();
        Ok(())
    }
}
