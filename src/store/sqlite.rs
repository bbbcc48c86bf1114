//! SQLite 메모리 DB 보정
//!
//! 대화 메시지, 세션 요약, 보관된 메시지 본문을 보정합니다.
//! 없는 테이블은 건너뛰고, 모든 UPDATE는 한 트랜잭션으로 커밋합니다.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{FixReport, StoreError};
use crate::config::SpacingConfig;
use crate::core::fix_spacing_str;

/// 보정 대상 (테이블, 컬럼)
const TARGETS: [(&str, &str); 3] = [
    ("messages", "content"),
    ("sessions", "summary"),
    ("archived_messages", "content"),
];

/// 테이블당 미리보기 최대 개수
const TABLE_PREVIEW_LIMIT: usize = 5;

fn table_exists(conn: &Connection, table: &str) -> Result<bool, StoreError> {
    let found = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// 테이블/컬럼 하나를 보정
///
/// `apply`이면 UPDATE를 실행하지만 커밋은 호출 측이 합니다.
fn fix_table(
    conn: &Connection,
    table: &str,
    column: &str,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    let rows: Vec<(i64, String)> = {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, {column} FROM {table} WHERE {column} IS NOT NULL"
        ))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;
        rows
    };

    let table_config = SpacingConfig {
        preview_limit: config.preview_limit.min(TABLE_PREVIEW_LIMIT),
        ..config.clone()
    };
    let mut report = FixReport {
        total: rows.len(),
        ..FixReport::default()
    };

    for (id, content) in &rows {
        if content.is_empty() {
            continue;
        }
        let fixed = fix_spacing_str(content);
        if fixed == *content {
            continue;
        }
        report.record_change(content, &fixed, &table_config);

        if apply {
            conn.execute(
                &format!("UPDATE {table} SET {column} = ?1 WHERE id = ?2"),
                params![fixed, id],
            )?;
        }
    }

    log::info!(
        "{}.{}: {} rows, {} to fix",
        table,
        column,
        report.total,
        report.changed
    );
    Ok(report)
}

/// DB 파일을 보정하고, `apply`이면 변경분을 한 번에 커밋
///
/// 파일이 없으면 빈 보고서를 반환합니다.
pub fn fix_sqlite(
    path: &Path,
    config: &SpacingConfig,
    apply: bool,
) -> Result<FixReport, StoreError> {
    if !path.exists() {
        log::warn!("SQLite DB 없음: {}", path.display());
        return Ok(FixReport::default());
    }

    let mut conn = Connection::open(path)?;
    let tx = conn.transaction()?;
    let mut report = FixReport::default();

    for (table, column) in TARGETS {
        if !table_exists(&tx, table)? {
            log::warn!("{}: 테이블 없음, 건너뜀", table);
            continue;
        }
        report.absorb(fix_table(&tx, table, column, config, apply)?);
    }

    if apply && report.changed > 0 {
        tx.commit()?;
        log::info!("{}건 보정 커밋: {}", report.changed, path.display());
    }

    Ok(report)
}
