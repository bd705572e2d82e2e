use std::time::Duration;

/// Anchor wrapping one book on a Goodreads list page.
pub const DEFAULT_ENTRY_SELECTOR: &str = r#"a.bookTitle[itemprop="url"]"#;

/// Title element nested inside the anchor.
pub const DEFAULT_TITLE_SELECTOR: &str =
    r#"span[itemprop="name"][role="heading"][aria-level="4"]"#;

/// Configuration for the Chrome instance behind each scraping session
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),

    /// Custom user agent
    pub user_agent: Option<String>,

    /// Navigation timeout in seconds
    pub timeout_seconds: u64,

    /// Disable image loading for performance
    pub disable_images: bool,

    pub entry_selector: String,
    pub title_selector: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
                    .to_string(),
            ),
            timeout_seconds: 30,
            disable_images: true,
            entry_selector: DEFAULT_ENTRY_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
        }
    }
}

impl ChromeConfig {
    /// Visible browser window, images on. Handy when a selector stops matching.
    pub fn headed() -> Self {
        Self {
            headless: false,
            disable_images: false,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Chrome command line flags derived from this config.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = vec![
            "--disable-blink-features=AutomationControlled".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ];
        if self.disable_images {
            args.push("--blink-settings=imagesEnabled=false".to_string());
        }
        if let Some(ua) = &self.user_agent {
            args.push(format!("--user-agent={}", ua));
        }
        args
    }
}
