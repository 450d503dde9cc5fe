use crate::core::{CollectionKind, DemoSettings};
use crate::utils::error::{LambdaError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sort: SortConfig,
    pub convert: ConvertConfig,
    pub word: WordConfig,
    pub person: PersonConfig,
    pub collection: CollectionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub words: Vec<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            words: vec!["banana".into(), "apple".into(), "cherry".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: "100".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConfig {
    pub value: String,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            value: "string".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub first_name: String,
    pub last_name: String,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            first_name: "Firstname".to_string(),
            last_name: "Lastname".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub elements: Vec<String>,
    pub kind: CollectionKind,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            elements: vec!["First".into(), "Second".into()],
            kind: CollectionKind::HashSet,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // 固定的 pattern，編譯不會失敗
        Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern")
    })
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LambdaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEMO_INPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl DemoSettings for DemoConfig {
    fn sort_words(&self) -> &[String] {
        &self.sort.words
    }

    fn convert_input(&self) -> &str {
        &self.convert.input
    }

    fn word(&self) -> &str {
        &self.word.value
    }

    fn first_name(&self) -> &str {
        &self.person.first_name
    }

    fn last_name(&self) -> &str {
        &self.person.last_name
    }

    fn collection_elements(&self) -> &[String] {
        &self.collection.elements
    }

    fn collection_kind(&self) -> CollectionKind {
        self.collection.kind
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("convert.input", &self.convert.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_demo_literals() {
        let config = DemoConfig::default();

        assert_eq!(config.convert_input(), "100");
        assert_eq!(config.word(), "string");
        assert_eq!(config.first_name(), "Firstname");
        assert_eq!(config.last_name(), "Lastname");
        assert_eq!(config.collection_elements(), ["First", "Second"]);
        assert_eq!(config.collection_kind(), CollectionKind::HashSet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[sort]
words = ["pear", "fig"]

[person]
first_name = "Ada"

[collection]
elements = ["x", "y", "x"]
kind = "btree_set"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sort_words(), ["pear", "fig"]);
        assert_eq!(config.first_name(), "Ada");
        assert_eq!(config.last_name(), "Lastname");
        assert_eq!(config.collection_kind(), CollectionKind::BTreeSet);
        assert_eq!(config.convert_input(), "100");
    }

    #[test]
    fn test_unknown_collection_kind_is_rejected() {
        let err = DemoConfig::from_toml_str("[collection]\nkind = \"linked_list\"\n").unwrap_err();
        assert!(matches!(err, LambdaError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_LAMBDAS_TEST_WORD", "lambda");

        let config = DemoConfig::from_toml_str(
            r#"
[word]
value = "${SMALL_LAMBDAS_TEST_WORD}"

[convert]
input = "${SMALL_LAMBDAS_TEST_UNSET}"
"#,
        )
        .unwrap();

        assert_eq!(config.word(), "lambda");
        assert_eq!(config.convert_input(), "${SMALL_LAMBDAS_TEST_UNSET}");

        std::env::remove_var("SMALL_LAMBDAS_TEST_WORD");
    }

    #[test]
    fn test_blank_input_fails_validation() {
        let config = DemoConfig::from_toml_str("[convert]\ninput = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[convert]\ninput = \"42\"\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.convert_input(), "42");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, LambdaError::IoError(_)));
    }
}
