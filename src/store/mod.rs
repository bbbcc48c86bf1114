//! 저장된 텍스트 일괄 보정
//!
//! 대화 기록(working memory JSON), SQLite 메모리 DB, 일반 텍스트 파일의 띄어쓰기를
//! 미리보기(dry-run)하거나 실제로 고쳐 씁니다.

mod plain_text;
mod sqlite;
mod working_memory;

use std::path::Path;

use crate::config::SpacingConfig;

pub use plain_text::{fix_lines, fix_plain_text};
pub use sqlite::fix_sqlite;
pub use working_memory::{fix_document, fix_working_memory};

/// 대상 로드/저장 에러
#[derive(Debug)]
pub enum StoreError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
    /// 문서 형식 오류
    Format(String),
    /// SQLite 쿼리 실패
    Sqlite(rusqlite::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            StoreError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            StoreError::Format(s) => write!(f, "문서 형식 오류: {}", s),
            StoreError::Sqlite(e) => write!(f, "SQLite 오류: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Sqlite(e)
    }
}

/// 변경 전/후 미리보기 한 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub before: String,
    pub after: String,
}

/// 대상 하나의 보정 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// 검사한 문서 수
    pub total: usize,
    /// 고쳐진(또는 고쳐질) 문서 수
    pub changed: usize,
    /// 최대 `preview_limit`개의 미리보기
    pub previews: Vec<Preview>,
}

impl FixReport {
    /// 변경 한 건 기록
    pub fn record_change(&mut self, before: &str, after: &str, config: &SpacingConfig) {
        self.changed += 1;
        if self.previews.len() < config.preview_limit {
            self.previews.push(Preview {
                before: truncate_chars(before, config.preview_chars),
                after: truncate_chars(after, config.preview_chars),
            });
        }
    }

    /// 미리보기에 포함되지 않은 변경 수
    pub fn hidden_changes(&self) -> usize {
        self.changed.saturating_sub(self.previews.len())
    }

    /// 요약용 합산 (미리보기는 합치지 않음)
    pub fn merge(&mut self, other: &FixReport) {
        self.total += other.total;
        self.changed += other.changed;
    }

    /// 하위 보고서를 미리보기까지 포함해 합침
    pub fn absorb(&mut self, other: FixReport) {
        self.merge(&other);
        self.previews.extend(other.previews);
    }
}

/// 앞에서부터 최대 `max`글자만 남김
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// 보정 대상 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// `{"messages": [{"content": ...}]}` 형식의 JSON 문서
    WorkingMemory,
    /// messages/sessions/archived_messages 테이블이 있는 SQLite DB
    Sqlite,
    /// 줄 단위 텍스트 파일
    PlainText,
}

impl TargetKind {
    /// 확장자로 종류 추정 (`.json` -> WorkingMemory, `.db`/`.sqlite` -> Sqlite)
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => TargetKind::WorkingMemory,
            Some("db" | "sqlite") => TargetKind::Sqlite,
            _ => TargetKind::PlainText,
        }
    }

    /// 보고서에 쓰는 문서 단위 이름
    pub fn unit(self) -> &'static str {
        match self {
            TargetKind::WorkingMemory => "Messages",
            TargetKind::Sqlite => "Rows",
            TargetKind::PlainText => "Lines",
        }
    }
}

/// 대상 하나를 종류에 맞게 보정
pub fn fix_target(
    kind: TargetKind,
    path: &Path,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    match kind {
        TargetKind::WorkingMemory => fix_working_memory(path, config, apply),
        TargetKind::Sqlite => fix_sqlite(path, config, apply),
        TargetKind::PlainText => fix_plain_text(path, config, apply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_change_limits_previews() {
        let config = SpacingConfig {
            preview_limit: 2,
            preview_chars: 3,
            ..SpacingConfig::default()
        };
        let mut report = FixReport::default();
        for _ in 0..5 {
            report.record_change("안녕.안녕", "안녕. 안녕", &config);
        }
        assert_eq!(report.changed, 5);
        assert_eq!(report.previews.len(), 2);
        assert_eq!(report.hidden_changes(), 3);
        assert_eq!(report.previews[0].before, "안녕.");
        assert_eq!(report.previews[0].after, "안녕.");
    }

    #[test]
    fn test_merge() {
        let mut a = FixReport { total: 3, changed: 1, previews: Vec::new() };
        let b = FixReport { total: 4, changed: 2, previews: Vec::new() };
        a.merge(&b);
        assert_eq!(a.total, 7);
        assert_eq!(a.changed, 3);
    }

    #[test]
    fn test_absorb_keeps_previews() {
        let config = SpacingConfig::default();
        let mut a = FixReport::default();
        a.record_change("좋아!정말", "좋아! 정말", &config);
        let mut b = FixReport { total: 2, ..FixReport::default() };
        b.record_change("Log:한글", "Log: 한글", &config);

        a.absorb(b);
        assert_eq!(a.total, 2);
        assert_eq!(a.changed, 2);
        assert_eq!(a.previews.len(), 2);
        assert_eq!(a.previews[1].after, "Log: 한글");
    }

    #[test]
    fn test_target_kind_from_path() {
        assert_eq!(TargetKind::from_path(Path::new("wm.json")), TargetKind::WorkingMemory);
        assert_eq!(TargetKind::from_path(Path::new("WM.JSON")), TargetKind::WorkingMemory);
        assert_eq!(TargetKind::from_path(Path::new("memory.db")), TargetKind::Sqlite);
        assert_eq!(TargetKind::from_path(Path::new("memory.SQLite")), TargetKind::Sqlite);
        assert_eq!(TargetKind::from_path(Path::new("notes.txt")), TargetKind::PlainText);
        assert_eq!(TargetKind::from_path(Path::new("README")), TargetKind::PlainText);
    }

    #[test]
    fn test_error_display() {
        let e = StoreError::Format("messages 필드가 없습니다".into());
        assert!(e.to_string().contains("messages"));
        let io: StoreError = std::io::Error::new(std::io::ErrorKind::NotFound, "x").into();
        assert!(matches!(io, StoreError::Io(_)));
    }
}
