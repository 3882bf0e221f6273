//! Scoped browser session against the cause list portal.
//!
//! The session opens a visible browser window so the operator can fill
//! the form and solve the captcha. It is acquired once per run and must
//! be released through [`PortalSession::close`] on every exit path;
//! otherwise a browser process is left behind.

use crate::browser::RowSource;
use crate::config::Config;
use crate::error::{CauseListError, Result};
use crate::extract::RawRow;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

pub struct PortalSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    table_id: String,
}

impl PortalSession {
    /// Launches a headed browser and navigates to the portal URL.
    pub async fn open(config: &Config) -> Result<Self> {
        let browser_config = BrowserConfig::builder()
            .with_head()
            .window_size(config.browser.window_width, config.browser.window_height)
            .build()
            .map_err(|message| CauseListError::BrowserLaunch { message })?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| CauseListError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // The handler drives the CDP connection; it runs until the
        // browser closes or the connection drops.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let url = config.portal.url.clone();
        let page = match tokio::time::timeout(
            config.nav_timeout_duration(),
            browser.new_page(url.as_str()),
        )
        .await
        {
            Ok(Ok(page)) => page,
            Ok(Err(e)) => {
                return Err(CauseListError::Navigation {
                    url,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(CauseListError::Navigation {
                    url,
                    message: format!("page load timed out after {}s", config.browser.nav_timeout),
                })
            }
        };

        Ok(Self {
            browser,
            page,
            handler_task,
            table_id: config.portal.table_id.clone(),
        })
    }

    /// Releases the browser session. Consumes the session so it cannot
    /// be used afterwards.
    pub async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler_task.abort();

        closed.map_err(|e| CauseListError::Extraction {
            message: format!("browser close failed: {}", e),
        })?;
        Ok(())
    }
}

#[async_trait]
impl RowSource for PortalSession {
    /// Snapshots the cause list table via an injected expression that
    /// returns each row's cell text and colspan attribute.
    async fn rows(&self) -> Result<Vec<RawRow>> {
        let expression = snapshot_expression(&self.table_id);

        let rows: Option<Vec<RawRow>> = self
            .page
            .evaluate_expression(expression)
            .await?
            .into_value()
            .map_err(|e| CauseListError::Extraction {
                message: format!("unexpected table snapshot shape: {}", e),
            })?;

        rows.ok_or_else(|| CauseListError::TableNotFound {
            table_id: self.table_id.clone(),
        })
    }
}

/// Builds the snapshot expression for the given table element id.
/// Returns `null` when the table is absent so the caller can tell
/// "missing table" apart from "table with no rows".
fn snapshot_expression(table_id: &str) -> String {
    let id_json = serde_json::to_string(table_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(() => {{
            const table = document.getElementById({id_json});
            if (!table) return null;
            return Array.from(table.querySelectorAll("tr")).map((row) => ({{
                cells: Array.from(row.querySelectorAll("td")).map((td) => ({{
                    text: td.innerText,
                    colSpan: td.getAttribute("colspan"),
                }})),
            }}));
        }})()"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_expression_targets_table_id() {
        let expression = snapshot_expression("dispTable");
        assert!(expression.contains(r#"getElementById("dispTable")"#));
        assert!(expression.contains("colspan"));
    }

    #[test]
    fn test_snapshot_expression_escapes_id() {
        let expression = snapshot_expression("disp\"Table");
        assert!(expression.contains(r#"getElementById("disp\"Table")"#));
    }

    #[test]
    fn test_snapshot_shape_deserializes() {
        // Mirrors what the injected expression returns for one data row
        // and one spanning banner row.
        let json = r#"[
            {"cells": [{"text": "Urgent Cases", "colSpan": "4"}]},
            {"cells": [
                {"text": "1", "colSpan": null},
                {"text": "View CC/12/2024", "colSpan": null},
                {"text": "A vs B", "colSpan": null},
                {"text": "Adv. K", "colSpan": null}
            ]}
        ]"#;

        let rows: Vec<RawRow> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].col_span.as_deref(), Some("4"));
        assert!(rows[1].cells[0].col_span.is_none());
    }
}
