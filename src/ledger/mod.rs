// ==========================================
// Warehouse Packer - адаптер внешнего склада
// ==========================================
// Зеркало накопительных остатков с полной перезаписью:
// pull заменяет зеркало, push затирает удалённый диапазон.
// Слияния и контроля версий нет: последняя запись побеждает.
// ==========================================

pub mod error;
pub mod sheets;
pub mod transport;

pub use error::{LedgerError, LedgerResult};
pub use sheets::SheetsTransport;
pub use transport::{InMemoryTransport, LedgerTransport};

use crate::domain::ledger::{LedgerEntry, LedgerMirror};
use crate::domain::types::SyncState;

/// Адаптер синхронизации с внешним складским реестром.
///
/// Вне состояния Connected операции чтения и изменения бездействуют:
/// get отвечает «нет данных», apply_delta успешно ничего не делает,
/// поэтому вызывающему коду не нужно ветвиться по состоянию
/// подключения.
pub struct LedgerSyncAdapter {
    state: SyncState,
    mirror: LedgerMirror,
    transport: Box<dyn LedgerTransport>,
}

impl LedgerSyncAdapter {
    pub fn new(transport: Box<dyn LedgerTransport>) -> Self {
        Self {
            state: SyncState::Disabled,
            mirror: LedgerMirror::new(),
            transport,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == SyncState::Connected
    }

    // ==========================================
    // Подключение
    // ==========================================

    /// Подключение: подготовка удалённого хранилища и первичное
    /// чтение реестра. Любой сбой возвращает адаптер в Disabled,
    /// зеркало при этом не меняется.
    pub fn connect(&mut self) -> LedgerResult<()> {
        self.state = SyncState::Connecting;

        let pulled = self
            .transport
            .ensure_remote()
            .and_then(|_| self.transport.pull());

        match pulled {
            Ok(entries) => {
                self.replace_mirror(entries);
                self.state = SyncState::Connected;
                tracing::info!(entries = self.mirror.len(), "подключение к складу установлено");
                Ok(())
            }
            Err(err) => {
                self.state = SyncState::Disabled;
                Err(err)
            }
        }
    }

    /// Отключение. Зеркало остаётся в памяти, но операции бездействуют.
    pub fn disconnect(&mut self) {
        self.state = SyncState::Disabled;
        tracing::info!("подключение к складу отключено");
    }

    // ==========================================
    // Операции над зеркалом
    // ==========================================

    /// Остаток и ячейка по артикулу; вне Connected всегда «нет данных»
    pub fn get(&self, article_id: &str) -> Option<&LedgerEntry> {
        if self.state != SyncState::Connected {
            return None;
        }
        self.mirror.get(article_id)
    }

    /// Все строки зеркала по возрастанию артикула
    /// (для экрана склада); вне Connected пусто
    pub fn entries(&self) -> Vec<&LedgerEntry> {
        if self.state != SyncState::Connected {
            return Vec::new();
        }
        self.mirror.values().collect()
    }

    /// Накопительное изменение остатка.
    ///
    /// Вне Connected операция успешно бездействует. Новый артикул заводится
    /// с нулём; итог не опускается ниже нуля; ячейка обновляется
    /// только непустым значением.
    pub fn apply_delta(&mut self, article_id: &str, delta: i64, cell: &str) -> LedgerResult<()> {
        if self.state != SyncState::Connected {
            return Ok(());
        }

        let entry = self
            .mirror
            .entry(article_id.to_string())
            .or_insert_with(|| LedgerEntry {
                article_id: article_id.to_string(),
                quantity: 0,
                cell: String::new(),
            });

        entry.quantity = (entry.quantity + delta).max(0);
        if !cell.is_empty() {
            entry.cell = cell.to_string();
        }

        tracing::debug!(
            article = article_id,
            delta,
            quantity = entry.quantity,
            "остаток на складе обновлён"
        );
        Ok(())
    }

    /// Удаление артикула из зеркала; вне Connected бездействует
    pub fn remove(&mut self, article_id: &str) {
        if self.state != SyncState::Connected {
            return;
        }
        self.mirror.remove(article_id);
    }

    // ==========================================
    // Обмен с удалённым реестром
    // ==========================================

    /// Чтение реестра целиком: зеркало заменяется без слияния
    /// с несохранёнными локальными изменениями. При сбое транспорта
    /// зеркало не меняется.
    pub fn pull(&mut self) -> LedgerResult<usize> {
        if self.state != SyncState::Connected {
            return Err(LedgerError::NotConnected);
        }

        let entries = self.transport.pull()?;
        self.replace_mirror(entries);
        tracing::info!(entries = self.mirror.len(), "реестр склада перечитан");
        Ok(self.mirror.len())
    }

    /// Полная перезапись удалённого реестра содержимым зеркала
    pub fn push(&mut self) -> LedgerResult<usize> {
        if self.state != SyncState::Connected {
            return Err(LedgerError::NotConnected);
        }

        let entries: Vec<LedgerEntry> = self.mirror.values().cloned().collect();
        self.transport.push(&entries)?;
        tracing::info!(entries = entries.len(), "реестр склада перезаписан");
        Ok(entries.len())
    }

    fn replace_mirror(&mut self, entries: Vec<LedgerEntry>) {
        self.mirror = entries
            .into_iter()
            .map(|entry| (entry.article_id.clone(), entry))
            .collect();
    }
}
