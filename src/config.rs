//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// hangul-spacing 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SpacingConfig {
    /// 대상별로 보여줄 변경 미리보기 최대 개수
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    /// 미리보기 한 줄의 최대 글자 수
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// working memory 문서의 메시지 배열 키
    #[serde(default = "default_messages_field")]
    pub messages_field: String,
    /// 메시지 객체의 본문 키
    #[serde(default = "default_content_field")]
    pub content_field: String,
}

fn default_preview_limit() -> usize {
    10
}

fn default_preview_chars() -> usize {
    120
}

fn default_messages_field() -> String {
    "messages".to_string()
}

fn default_content_field() -> String {
    "content".to_string()
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
            preview_chars: default_preview_chars(),
            messages_field: default_messages_field(),
            content_field: default_content_field(),
        }
    }
}

/// 설정 파일 경로: ~/.config/hangul-spacing/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangul-spacing").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SpacingConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> SpacingConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            SpacingConfig::default()
        }),
        Err(_) => SpacingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SpacingConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &SpacingConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
