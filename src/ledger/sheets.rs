// ==========================================
// Warehouse Packer - транспорт Google Sheets
// ==========================================
// Values API поверх блокирующего HTTP-клиента. Токен доступа
// выдаётся вызывающей стороной; получение учётных данных
// находится вне этого модуля.
// ==========================================

use crate::domain::ledger::LedgerEntry;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::transport::LedgerTransport;
use serde_json::{json, Value};

/// Заголовки листа склада
const HEADER_ROW: [&str; 3] = ["Артикул", "Количество", "Ячейка"];

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Транспорт складского реестра в Google Sheets
pub struct SheetsTransport {
    http: reqwest::blocking::Client,
    access_token: String,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsTransport {
    pub fn new(
        access_token: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        sheet_name: impl Into<String>,
    ) -> LedgerResult<Self> {
        let spreadsheet_id = spreadsheet_id.into().trim().to_string();
        if spreadsheet_id.is_empty() {
            return Err(LedgerError::MissingRemoteId);
        }

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            access_token: access_token.into(),
            spreadsheet_id,
            sheet_name: sheet_name.into(),
        })
    }

    fn range(&self) -> String {
        format!("{}!A:C", self.sheet_name)
    }

    fn url(&self, suffix: &str) -> String {
        format!("{API_BASE}/{}{suffix}", self.spreadsheet_id)
    }

    fn get_json(&self, url: &str) -> LedgerResult<Value> {
        let response = self.http.get(url).bearer_auth(&self.access_token).send()?;
        Self::into_json(response)
    }

    fn post_json(&self, url: &str, body: &Value) -> LedgerResult<Value> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()?;
        Self::into_json(response)
    }

    fn put_json(&self, url: &str, body: &Value) -> LedgerResult<Value> {
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()?;
        Self::into_json(response)
    }

    fn into_json(response: reqwest::blocking::Response) -> LedgerResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LedgerError::Transport(format!("HTTP {status}: {body}")));
        }
        Ok(response.json()?)
    }
}

impl LedgerTransport for SheetsTransport {
    /// Создаёт лист склада, если его нет, и записывает строку заголовков
    fn ensure_remote(&mut self) -> LedgerResult<()> {
        let meta = self.get_json(&self.url(""))?;
        let sheet_exists = meta["sheets"]
            .as_array()
            .map(|sheets| {
                sheets.iter().any(|sheet| {
                    sheet["properties"]["title"].as_str() == Some(self.sheet_name.as_str())
                })
            })
            .unwrap_or(false);

        if !sheet_exists {
            let body = json!({
                "requests": [{ "addSheet": { "properties": { "title": self.sheet_name } } }]
            });
            self.post_json(&self.url(":batchUpdate"), &body)?;
        }

        let header_range = format!("{}!A1:C1", self.sheet_name);
        let body = json!({ "values": [HEADER_ROW] });
        let url = format!(
            "{}?valueInputOption=RAW",
            self.url(&format!("/values/{header_range}"))
        );
        self.put_json(&url, &body)?;
        Ok(())
    }

    /// Читает реестр целиком; первая строка содержит заголовки,
    /// строки без артикула пропускаются
    fn pull(&mut self) -> LedgerResult<Vec<LedgerEntry>> {
        let url = self.url(&format!("/values/{}", self.range()));
        let payload = self.get_json(&url)?;
        let values = payload["values"].as_array().cloned().unwrap_or_default();

        let mut entries = Vec::new();
        for row in values.iter().skip(1) {
            let cells = row.as_array().cloned().unwrap_or_default();

            let article_id = cell_text(&cells, 0);
            if article_id.is_empty() {
                continue;
            }
            // Нечисловое количество читается как ноль
            let quantity = cell_text(&cells, 1).parse::<i64>().unwrap_or(0).max(0);
            let cell = cell_text(&cells, 2);

            entries.push(LedgerEntry {
                article_id,
                quantity,
                cell,
            });
        }

        Ok(entries)
    }

    /// Очищает диапазон и записывает заголовок со строками заново
    fn push(&mut self, entries: &[LedgerEntry]) -> LedgerResult<()> {
        let clear_url = format!("{}:clear", self.url(&format!("/values/{}", self.range())));
        self.post_json(&clear_url, &json!({}))?;

        let mut values = vec![json!(HEADER_ROW)];
        for entry in entries {
            values.push(json!([
                entry.article_id,
                entry.quantity.to_string(),
                entry.cell
            ]));
        }

        let url = format!(
            "{}?valueInputOption=RAW",
            self.url(&format!("/values/{}", self.range()))
        );
        self.put_json(&url, &json!({ "values": values }))?;
        Ok(())
    }
}

fn cell_text(cells: &[Value], idx: usize) -> String {
    cells
        .get(idx)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spreadsheet_id_rejected() {
        let result = SheetsTransport::new("token", "   ", "Склад");
        assert!(matches!(result, Err(LedgerError::MissingRemoteId)));
    }

    #[test]
    fn test_cell_text_out_of_range_is_empty() {
        let cells = vec![json!("ART-1")];
        assert_eq!(cell_text(&cells, 0), "ART-1");
        assert_eq!(cell_text(&cells, 2), "");
    }
}
