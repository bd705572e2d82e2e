//! Scripted browser doubles shared by the unit tests in `core`.

use crate::domain::model::CatalogEntry;
use crate::domain::ports::{BrowserSession, SessionFactory};
use crate::utils::error::{EtlError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What a mock page does. Probes and queries past the end of their list
/// repeat the last element. With no `heights`, every probe grows the page.
#[derive(Debug, Clone, Default)]
pub struct PageScript {
    pub heights: Vec<i64>,
    pub passes: Vec<Vec<CatalogEntry>>,
    pub fail_navigate: bool,
    pub fail_height_probe: Option<usize>,
}

impl PageScript {
    pub fn single_pass(entries: Vec<CatalogEntry>) -> Self {
        Self {
            heights: vec![1000],
            passes: vec![entries],
            ..Self::default()
        }
    }
}

pub fn entries(count: usize, prefix: &str) -> Vec<CatalogEntry> {
    (1..=count)
        .map(|i| {
            CatalogEntry::new(
                format!("{} Book {}", prefix, i),
                format!("https://www.goodreads.com/book/show/{}-{}", prefix, i),
            )
        })
        .collect()
}

pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().map(|events| events.clone()).unwrap_or_default()
}

pub fn count(log: &EventLog, event: &str) -> usize {
    events(log).iter().filter(|e| e.as_str() == event).count()
}

pub struct MockSession {
    script: PageScript,
    probes: usize,
    queries: usize,
    log: EventLog,
}

impl MockSession {
    fn record(&self, event: impl Into<String>) {
        if let Ok(mut events) = self.log.lock() {
            events.push(event.into());
        }
    }
}

impl BrowserSession for MockSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.record(format!("navigate {}", url));
        if self.script.fail_navigate {
            return Err(EtlError::browser("navigate", "net::ERR_CONNECTION_REFUSED"));
        }
        Ok(())
    }

    fn content_height(&mut self) -> Result<i64> {
        self.record("height");
        let probe = self.probes;
        self.probes += 1;
        if self.script.fail_height_probe == Some(probe) {
            return Err(EtlError::browser("height probe", "session crashed"));
        }
        Ok(match self.script.heights.last() {
            Some(last) => *self.script.heights.get(probe).unwrap_or(last),
            None => probe as i64 * 100,
        })
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.record("scroll");
        Ok(())
    }

    fn catalog_entries(&mut self) -> Result<Vec<CatalogEntry>> {
        self.record("query");
        let query = self.queries;
        self.queries += 1;
        Ok(match self.script.passes.last() {
            Some(last) => self.script.passes.get(query).unwrap_or(last).clone(),
            None => Vec::new(),
        })
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.record("closed");
    }
}

/// Hands out sessions scripted per target URL; unknown URLs get `default`.
#[derive(Clone, Default)]
pub struct MockFactory {
    pub default: PageScript,
    pub pages: HashMap<String, PageScript>,
    pub fail_open: bool,
    pub log: EventLog,
}

impl MockFactory {
    pub fn new(default: PageScript) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, url: &str, script: PageScript) -> Self {
        self.pages.insert(url.to_string(), script);
        self
    }
}

/// Sessions don't know their URL until `navigate`, so the scripted page is
/// swapped in there.
pub struct RoutedSession {
    inner: MockSession,
    pages: HashMap<String, PageScript>,
}

impl BrowserSession for RoutedSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        if let Some(script) = self.pages.remove(url) {
            self.inner.script = script;
        }
        self.inner.navigate(url)
    }

    fn content_height(&mut self) -> Result<i64> {
        self.inner.content_height()
    }

    fn scroll_to_bottom(&mut self) -> Result<()> {
        self.inner.scroll_to_bottom()
    }

    fn catalog_entries(&mut self) -> Result<Vec<CatalogEntry>> {
        self.inner.catalog_entries()
    }
}

impl SessionFactory for MockFactory {
    type Session = RoutedSession;

    fn open(&self) -> Result<Self::Session> {
        if self.fail_open {
            return Err(EtlError::browser("launch", "Could not auto detect a chrome executable"));
        }
        if let Ok(mut events) = self.log.lock() {
            events.push("open".to_string());
        }
        Ok(RoutedSession {
            inner: MockSession {
                script: self.default.clone(),
                probes: 0,
                queries: 0,
                log: Arc::clone(&self.log),
            },
            pages: self.pages.clone(),
        })
    }
}
