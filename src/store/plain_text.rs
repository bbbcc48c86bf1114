//! 줄 단위 텍스트 파일 보정
//!
//! 각 줄을 독립된 문서로 보고 바이트 단위로 보정합니다.
//! 줄바꿈(`\n`, `\r\n`)과 마지막 줄바꿈 유무는 그대로 유지됩니다.

use std::fs;
use std::path::Path;

use super::{FixReport, StoreError};
use crate::config::SpacingConfig;
use crate::core::fix_spacing_batch;

/// 한 줄을 (본문, 줄바꿈)으로 분리
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    if let Some(body) = line.strip_suffix(b"\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix(b"\n") {
        (body, &line[body.len()..])
    } else {
        (line, &line[line.len()..])
    }
}

/// 바이트 버퍼를 줄 단위로 보정하여 (결과, 보고서) 반환
pub fn fix_lines(content: &[u8], config: &SpacingConfig) -> (Vec<u8>, FixReport) {
    let lines: Vec<(&[u8], &[u8])> = content
        .split_inclusive(|&b| b == b'\n')
        .map(split_terminator)
        .collect();
    let bodies: Vec<&[u8]> = lines.iter().map(|(body, _)| *body).collect();
    let fixed = fix_spacing_batch(&bodies);

    let mut report = FixReport {
        total: lines.len(),
        ..FixReport::default()
    };
    let mut out = Vec::with_capacity(content.len());

    for ((body, terminator), fixed) in lines.iter().zip(&fixed) {
        if fixed.as_slice() != *body {
            report.record_change(
                &String::from_utf8_lossy(body),
                &String::from_utf8_lossy(fixed),
                config,
            );
        }
        out.extend_from_slice(fixed);
        out.extend_from_slice(terminator);
    }

    (out, report)
}

/// 텍스트 파일을 보정하고, `apply`이면 변경분을 다시 저장
pub fn fix_plain_text(
    path: &Path,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    if !path.exists() {
        log::warn!("텍스트 파일 없음: {}", path.display());
        return Ok(FixReport::default());
    }

    let content = fs::read(path)?;
    let (fixed, report) = fix_lines(&content, config);

    if apply && report.changed > 0 {
        fs::write(path, fixed)?;
        log::info!("{}줄 보정 저장: {}", report.changed, path.display());
    }

    Ok(report)
}
