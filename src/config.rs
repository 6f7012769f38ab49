//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::{CapacityMode, OverflowPolicy, LEGACY_OUTPUT_LENGTH};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_PATH_ENV: &str = "HANGUL_TRANSLIT_CONFIG";

/// 변환 경계 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranslitConfig {
    /// 라틴 출력 버퍼 요청 길이 (UTF-8 바이트)
    #[serde(default = "default_max_len")]
    pub latin_max_len: usize,
    /// 키릴 출력 버퍼 요청 길이 (UTF-16 코드 유닛)
    #[serde(default = "default_max_len")]
    pub cyrillic_max_len: usize,
    /// 요청 길이 해석 방식 (기본: 레거시 함수의 실제 용량)
    #[serde(default = "default_capacity")]
    pub capacity: CapacityMode,
    /// 최대 길이 초과 시 처리 방식
    #[serde(default = "default_overflow")]
    pub overflow: OverflowPolicy,
}

fn default_max_len() -> usize {
    LEGACY_OUTPUT_LENGTH
}

fn default_capacity() -> CapacityMode {
    CapacityMode::Legacy
}

fn default_overflow() -> OverflowPolicy {
    OverflowPolicy::Reject
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            latin_max_len: default_max_len(),
            cyrillic_max_len: default_max_len(),
            capacity: default_capacity(),
            overflow: default_overflow(),
        }
    }
}

/// 설정 파일 경로
/// $HANGUL_TRANSLIT_CONFIG가 있으면 그 경로, 없으면 ~/.config/hangul-translit/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config")
        .join("hangul-translit")
        .join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranslitConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> TranslitConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            TranslitConfig::default()
        }),
        Err(_) => TranslitConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TranslitConfig) -> Result<(), String> {
    save_config_to(&config_path(), config)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &TranslitConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hangul-translit-{}-{}", name, std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TranslitConfig::default();
        assert_eq!(config.latin_max_len, 20);
        assert_eq!(config.cyrillic_max_len, 20);
        assert_eq!(config.capacity, CapacityMode::Legacy);
        assert_eq!(config.overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = TranslitConfig {
            latin_max_len: 64,
            cyrillic_max_len: 32,
            capacity: CapacityMode::Exact,
            overflow: OverflowPolicy::Truncate,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TranslitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 일부 필드만 있는 설정 파일은 나머지를 기본값으로 채움
        let json = r#"{"overflow": "truncate"}"#;
        let config: TranslitConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.latin_max_len, 20);
        assert_eq!(config.cyrillic_max_len, 20);
        assert_eq!(config.capacity, CapacityMode::Legacy);
        assert_eq!(config.overflow, OverflowPolicy::Truncate);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = TranslitConfig {
            latin_max_len: 128,
            ..TranslitConfig::default()
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_or_invalid_falls_back() {
        let missing = temp_path("missing");
        assert_eq!(load_config_from(&missing), TranslitConfig::default());

        let invalid = temp_path("invalid");
        fs::create_dir_all(invalid.parent().unwrap()).unwrap();
        fs::write(&invalid, "{ not json").unwrap();
        assert_eq!(load_config_from(&invalid), TranslitConfig::default());
        let _ = fs::remove_dir_all(invalid.parent().unwrap());
    }
}
