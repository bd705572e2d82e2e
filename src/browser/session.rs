use super::config::ChromeConfig;
use crate::domain::model::CatalogEntry;
use crate::domain::ports::{BrowserSession, SessionFactory};
use crate::utils::error::{EtlError, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde::Deserialize;
use std::ffi::OsStr;
use std::sync::Arc;

const HEIGHT_SCRIPT: &str = "document.body.scrollHeight";
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Launches one Chrome process per session.
#[derive(Debug, Clone, Default)]
pub struct ChromeSessionFactory {
    config: ChromeConfig,
}

impl ChromeSessionFactory {
    pub fn new(config: ChromeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    fn launch(&self) -> Result<Browser> {
        let args = self.config.chrome_args();
        let options = LaunchOptions::default_builder()
            .headless(self.config.headless)
            .window_size(Some(self.config.window_size))
            .args(args.iter().map(OsStr::new).collect())
            .build()
            .map_err(|e| EtlError::browser("launch options", e))?;

        Browser::new(options).map_err(|e| EtlError::browser("launch", e))
    }
}

impl SessionFactory for ChromeSessionFactory {
    type Session = ChromeSession;

    fn open(&self) -> Result<ChromeSession> {
        let browser = self.launch()?;
        let tab = browser
            .new_tab()
            .map_err(|e| EtlError::browser("new tab", e))?;
        tab.set_default_timeout(self.config.timeout());

        Ok(ChromeSession {
            tab,
            entries_script: entries_script(&self.config.entry_selector, &self.config.title_selector),
            _browser: browser,
        })
    }
}

/// A tab in a private Chrome process.
///
/// Dropping the session closes the tab, then the `Browser` drop kills the
/// process.
pub struct ChromeSession {
    tab: Arc<Tab>,
    entries_script: String,
    _browser: Browser,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: Option<String>,
    url: Option<String>,
}

impl ChromeSession {
    fn evaluate(&self, context: &str, script: &str) -> Result<Option<serde_json::Value>> {
        self.tab
            .evaluate(script, false)
            .map(|remote| remote.value)
            .map_err(|e| EtlError::browser(context, e))
    }
}

impl BrowserSession for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| EtlError::browser(&format!("navigate to {}", url), e))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| EtlError::browser(&format!("wait for {}", url), e))?;
        Ok(())
    }

    fn content_height(&mut self) -> Result<i64> {
        self.evaluate("height probe", HEIGHT_SCRIPT)?
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .ok_or_else(|| EtlError::browser("height probe", "script returned no number"))
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.evaluate("scroll", SCROLL_SCRIPT)?;
        Ok(())
    }

    fn catalog_entries(&mut self) -> Result<Vec<CatalogEntry>> {
        let json = self
            .evaluate("catalog query", &self.entries_script)?
            .and_then(|v| v.as_str().map(str::to_string))
            .ok_or_else(|| EtlError::browser("catalog query", "script returned no value"))?;

        let raw: Vec<RawEntry> = serde_json::from_str(&json)?;
        Ok(raw
            .into_iter()
            .map(|r| CatalogEntry {
                name: r.name,
                url: r.url,
            })
            .collect())
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(false) {
            tracing::warn!("Failed to close browser tab: {}", e);
        }
    }
}

/// Reads every rendered entry anchor in one round trip: the nested title's
/// visible text and the anchor's resolved (absolute) `href`.
fn entries_script(entry_selector: &str, title_selector: &str) -> String {
    // serde_json quoting doubles as JS string literal escaping.
    let entry = serde_json::Value::from(entry_selector).to_string();
    let title = serde_json::Value::from(title_selector).to_string();
    format!(
        r#"JSON.stringify(Array.from(document.querySelectorAll({entry})).map(function (a) {{
    var heading = a.querySelector({title});
    return {{ name: heading ? heading.innerText : null, url: a.href || null }};
}}))"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::config::{DEFAULT_ENTRY_SELECTOR, DEFAULT_TITLE_SELECTOR};

    #[test]
    fn test_entries_script_quotes_selectors() {
        let script = entries_script(DEFAULT_ENTRY_SELECTOR, DEFAULT_TITLE_SELECTOR);
        assert!(script.contains(r#"querySelectorAll("a.bookTitle[itemprop=\"url\"]")"#));
        assert!(script.contains(r#"aria-level=\"4\"]""#));
        assert!(script.starts_with("JSON.stringify("));
    }

    #[test]
    fn test_raw_entries_accept_nulls() {
        let raw: Vec<RawEntry> = serde_json::from_str(
            r#"[{"name":"Dune","url":"https://www.goodreads.com/book/show/44767458"},{"name":null,"url":null}]"#,
        )
        .unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].name.as_deref(), Some("Dune"));
        assert!(raw[1].url.is_none());
    }

    #[test]
    #[ignore] // Requires Chrome to be installed
    fn test_height_probe_on_live_page() {
        let factory = ChromeSessionFactory::default();
        let mut session = factory.open().unwrap();
        session.navigate("https://example.com").unwrap();
        assert!(session.content_height().unwrap() > 0);
        assert!(session.catalog_entries().unwrap().is_empty());
    }
}
