//! working memory JSON 문서 보정
//!
//! # 문서 형식
//! ```json
//! {
//!   "messages": [
//!     { "role": "user", "content": "안녕.반가워" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{FixReport, StoreError};
use crate::config::SpacingConfig;
use crate::core::fix_spacing_str;

/// 메모리 상의 문서를 보정
///
/// 본문이 없거나 문자열이 아닌 메시지는 건너뛰되 `total`에는 포함됩니다.
/// 메시지 배열이 없으면 빈 목록으로 봅니다. 최상위가 객체가 아니면 형식 오류입니다.
/// `apply`가 false이면 문서를 바꾸지 않습니다.
pub fn fix_document(
    doc: &mut Value,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    let root = doc
        .as_object_mut()
        .ok_or_else(|| StoreError::Format("최상위 값이 객체가 아닙니다".into()))?;

    let Some(messages) = root
        .get_mut(config.messages_field.as_str())
        .and_then(Value::as_array_mut)
    else {
        log::warn!("{} 배열 없음, 건너뜀", config.messages_field);
        return Ok(FixReport::default());
    };

    let mut report = FixReport {
        total: messages.len(),
        ..FixReport::default()
    };

    for msg in messages.iter_mut() {
        let Some(content) = msg.get(config.content_field.as_str()).and_then(Value::as_str) else {
            continue;
        };
        if content.is_empty() {
            continue;
        }

        let fixed = fix_spacing_str(content);
        if fixed == content {
            continue;
        }
        report.record_change(content, &fixed, config);

        if apply {
            if let Some(obj) = msg.as_object_mut() {
                obj.insert(config.content_field.clone(), Value::String(fixed));
            }
        }
    }

    Ok(report)
}

/// 파일의 문서를 보정하고, `apply`이면 변경분을 다시 저장
///
/// 파일이 없으면 빈 보고서를 반환합니다.
pub fn fix_working_memory(
    path: &Path,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    if !path.exists() {
        log::warn!("working memory 파일 없음: {}", path.display());
        return Ok(FixReport::default());
    }

    let content = fs::read_to_string(path)?;
    let mut doc: Value =
        serde_json::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))?;

    let report = fix_document(&mut doc, config, apply)?;

    if apply && report.changed > 0 {
        let json = serde_json::to_string_pretty(&doc).map_err(|e| StoreError::Parse(e.to_string()))?;
        fs::write(path, json)?;
        log::info!("{}건 보정 저장: {}", report.changed, path.display());
    }

    Ok(report)
}
