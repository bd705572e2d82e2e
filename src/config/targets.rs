use crate::domain::model::ScrapeTarget;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Goodreads list pages scraped when no targets file is given, as
/// `(url, genre)` in output order.
pub const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("https://www.goodreads.com/list/show/114163.Popular_Highly_Rated_Science_Fiction", "Sci Fiction"),
    ("https://www.goodreads.com/list/show/19312.Horror_The_100_Best_Books", "Horror"),
    ("https://www.goodreads.com/list/show/514.Best_Action_Adventure_Novels", "Adventure"),
    ("https://www.goodreads.com/list/show/28259.Best_Historical_Fiction", "Historical Fiction"),
    ("https://www.goodreads.com/list/show/2441.Best_Fantasy_Books", "Fantasy"),
    ("https://www.goodreads.com/list/show/1356.Best_Mystery_Thriller_Books", "Mystery & Thriller"),
    ("https://www.goodreads.com/list/show/324.Most_Heartbreaking_Book_Endings", "Romance"),
    ("https://www.goodreads.com/list/show/50.The_Best_Epic_Fantasy_fiction", "Epic Fantasy"),
    ("https://www.goodreads.com/list/show/6029.Best_Books_with_Strong_Female_Lead_Characters", "Strong Female Leads"),
    ("https://www.goodreads.com/list/show/1483.Best_Science_Fiction_Fantasy_Books", "Science Fiction & Fantasy"),
    ("https://www.goodreads.com/list/show/6.Best_Books_of_the_20th_Century", "Classics"),
    ("https://www.goodreads.com/list/show/1375.Best_Children_s_Books_Ever", "Children's"),
    ("https://www.goodreads.com/list/show/2132.Best_Teen_Books_Ever", "Young Adult"),
    ("https://www.goodreads.com/list/show/11741.Best_Historical_Romance_Novels", "Historical Romance"),
    ("https://www.goodreads.com/list/show/407.Best_Books_for_Every_Man", "Books for Every Man"),
    ("https://www.goodreads.com/list/show/29.Best_Books_of_the_21st_Century", "21st Century"),
    ("https://www.goodreads.com/list/show/18.Best_Books_Ever", "Best Books Ever"),
    ("https://www.goodreads.com/list/show/24876.Best_Science_Books_-_Non-Fiction_Only", "Science Non-Fiction"),
    ("https://www.goodreads.com/list/show/3147.Best_Travel_Books", "Travel"),
    ("https://www.goodreads.com/list/show/503.The_Best_Books_of_the_Decade_2000s", "2000s"),
    ("https://www.goodreads.com/list/show/300.Best_History_Books_ancient_and_modern", "History"),
    ("https://www.goodreads.com/list/show/16927.Best_Books_of_the_2020s", "2020s"),
    ("https://www.goodreads.com/list/show/6980.Best_Food_Memoir_Books", "Food Memoir"),
    ("https://www.goodreads.com/list/show/13132.Best_Books_of_the_2010s", "2010s"),
    ("https://www.goodreads.com/list/show/1203.Best_Art_Books", "Art"),
    ("https://www.goodreads.com/list/show/1873.Best_Books_About_Mental_Illness", "Mental Illness"),
    ("https://www.goodreads.com/list/show/1722.Best_Books_About_Running", "Running"),
    ("https://www.goodreads.com/list/show/1596.Best_Books_About_Music", "Music"),
    ("https://www.goodreads.com/list/show/277.Best_Books_of_the_18th_Century", "18th Century"),
    ("https://www.goodreads.com/list/show/11.Best_Books_of_the_19th_Century", "19th Century"),
    ("https://www.goodreads.com/list/show/35.Best_Books_of_the_Decade_1950s", "1950s"),
    ("https://www.goodreads.com/list/show/93.Best_Books_of_the_Decade_1960s", "1960s"),
    ("https://www.goodreads.com/list/show/94.Best_Books_of_the_Decade_1970s", "1970s"),
    ("https://www.goodreads.com/list/show/92.Best_Books_of_the_Decade_1980s", "1980s"),
    ("https://www.goodreads.com/list/show/91.Best_Books_of_the_Decade_1990s", "1990s"),
    ("https://www.goodreads.com/list/show/164.Best_Books_of_the_Decade_2000s", "2000s"),
    ("https://www.goodreads.com/list/show/125.Best_Books_of_the_Decade_2010s", "2010s"),
    ("https://www.goodreads.com/list/show/213.Best_Books_of_the_Decade_2020s", "2020s"),
];

pub fn default_targets() -> Vec<ScrapeTarget> {
    DEFAULT_TARGETS
        .iter()
        .map(|(url, genre)| ScrapeTarget::new(*url, *genre))
        .collect()
}

/// A replacement target table, read from TOML:
///
/// ```toml
/// [[targets]]
/// url = "https://www.goodreads.com/list/show/2441.Best_Fantasy_Books"
/// category = "Fantasy"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<ScrapeTarget>,
}

impl TargetsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigValidationError {
            field: "targets_file".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TargetsFile {
    fn validate(&self) -> Result<()> {
        validate_targets(&self.targets)
    }
}

pub fn validate_targets(targets: &[ScrapeTarget]) -> Result<()> {
    if targets.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: "targets".to_string(),
        });
    }

    for (i, target) in targets.iter().enumerate() {
        validate_url(&format!("targets[{}].url", i), &target.url)?;
        validate_non_empty_string(&format!("targets[{}].category", i), &target.category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_table_is_valid() {
        let targets = default_targets();
        assert_eq!(targets.len(), 38);
        assert!(validate_targets(&targets).is_ok());
        assert_eq!(targets[0].category, "Sci Fiction");
        assert!(targets.iter().any(|t| t.category == "Children's"));
    }

    #[test]
    fn test_parse_targets_file() {
        let toml_content = r#"
[[targets]]
url = "https://www.goodreads.com/list/show/2441.Best_Fantasy_Books"
category = "Fantasy"

[[targets]]
url = "https://www.goodreads.com/list/show/3147.Best_Travel_Books"
category = "Travel"
"#;

        let file = TargetsFile::from_toml_str(toml_content).unwrap();

        assert_eq!(file.targets.len(), 2);
        assert_eq!(file.targets[1].category, "Travel");
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_invalid_target_url_fails_validation() {
        let toml_content = r#"
[[targets]]
url = "goodreads.com/list"
category = "Fantasy"
"#;

        let file = TargetsFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_empty_targets_fail_validation() {
        let file = TargetsFile::from_toml_str("targets = []").unwrap();
        assert!(matches!(
            file.validate(),
            Err(EtlError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TargetsFile::from_toml_str("[[targets]\nurl =").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_targets_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[targets]]\nurl = \"https://x.test/list\"\ncategory = \"Art\"\n")
            .unwrap();

        let file = TargetsFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.targets[0].category, "Art");
    }
}
