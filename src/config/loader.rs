//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".i18n-csv.json";

/// ディレクトリから設定を読み込む
///
/// `.i18n-csv.json` ファイルを探して読み込み、バリデーションを行う。
/// ファイルが存在しない場合はデフォルト設定を返す。
///
/// # Arguments
/// * `dir` - 設定ファイルを探すディレクトリ（通常はカレントディレクトリ）
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let settings = load_from_dir(dir)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);
    Ok(settings)
}

/// 設定ファイルを読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
fn load_from_dir(dir: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_settings`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_settings_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"src": "translations", "filePattern": "*.i18n.json"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();

        assert_eq!(settings.src, "translations");
        assert_eq!(settings.target, "langs.csv");
        assert_eq!(settings.file_pattern, "*.i18n.json");
    }

    /// `load_settings`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_settings_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();

        assert_eq!(settings, Settings::default());
    }

    /// `load_settings`: JSON パースエラー
    #[rstest]
    fn test_load_settings_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_settings(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_settings`: バリデーションエラー
    #[rstest]
    fn test_load_settings_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"filePattern": "[*"}"#).unwrap();

        let result = load_settings(temp_dir.path());

        let Err(ConfigError::ValidationErrors(errors)) = result else {
            panic!("expected validation errors, got {result:?}");
        };
        assert_eq!(errors[0].field_path, "filePattern");
    }
}
