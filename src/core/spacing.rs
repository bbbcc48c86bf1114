//! 한글 띄어쓰기 보정 엔진
//!
//! 문장 부호, 괄호, 마크다운 강조 기호가 한글과 붙어 있을 때 공백을 넣고
//! 연속 공백을 하나로 줄입니다. 왼쪽에서 오른쪽으로 한 번만 훑으며,
//! 각 위치에서 (현재, 다음) 코드포인트 쌍만 봅니다.
//!
//! 적용 규칙:
//! 1. `.!?` + 한글 -> 공백 삽입 (말줄임표 `..` 제외)
//! 2. `])}` + 한글 -> 공백 삽입
//! 3. 한글 + `[({` -> 공백 삽입
//! 4. `:` + 한글 -> 공백 삽입
//! 5. `*` + 한글 -> 공백 삽입 (마크다운 강조 경계)
//! 6. 연속 공백 -> 공백 하나
//!
//! 두 한글 문자 사이에는 절대 공백을 넣지 않습니다.

use super::unicode::{is_close_bracket, is_korean, is_open_bracket, is_sentence_end, is_space, SPACE};
use super::utf8::{decode, encode, Codepoint, REPLACEMENT_CHARACTER};

const PERIOD: Codepoint = '.' as Codepoint;
const COLON: Codepoint = ':' as Codepoint;
const ASTERISK: Codepoint = '*' as Codepoint;

/// 한 위치에서 내릴 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// 현재 공백을 버림 (다음도 공백)
    Skip,
    /// 현재 코드포인트 출력, 필요하면 뒤에 공백 추가
    Emit { space_after: bool },
}

/// 위치 `i`에서 출력 여부와 공백 삽입 여부를 결정
fn decide(cps: &[Codepoint], i: usize) -> Step {
    let cur = cps[i];
    let next = cps.get(i + 1).copied();

    // 규칙 6: 연속 공백 압축
    if is_space(cur) && next.is_some_and(is_space) {
        return Step::Skip;
    }

    // 마지막 문자이거나 이미 공백이 뒤따르면 삽입하지 않음
    let next = match next {
        Some(next) if !is_space(next) => next,
        _ => return Step::Emit { space_after: false },
    };

    let prev = i.checked_sub(1).map(|p| cps[p]);
    Step::Emit {
        space_after: needs_space(cur, next, prev, cps.get(i + 1).copied()),
    }
}

/// (cur, next) 경계에 공백이 필요한지 판정
///
/// 모든 규칙을 평가하지만 삽입은 최대 한 번입니다.
fn needs_space(cur: Codepoint, next: Codepoint, prev: Option<Codepoint>, forward: Option<Codepoint>) -> bool {
    let mut insert = false;

    // 규칙 1: .!? + 한글 (말줄임표 제외)
    if is_sentence_end(cur) && is_korean(next) {
        let mut is_ellipsis = cur == PERIOD && prev == Some(PERIOD);
        if !is_ellipsis && cur == PERIOD && forward == Some(PERIOD) {
            is_ellipsis = true;
        }
        if !is_ellipsis {
            insert = true;
        }
    }

    // 규칙 2: ])} + 한글
    if is_close_bracket(cur) && is_korean(next) {
        insert = true;
    }

    // 규칙 3: 한글 + [({
    if is_korean(cur) && is_open_bracket(next) {
        insert = true;
    }

    // 규칙 4: : + 한글
    if cur == COLON && is_korean(next) {
        insert = true;
    }

    // 규칙 5: * + 한글
    if cur == ASTERISK && is_korean(next) {
        insert = true;
    }

    insert
}

/// 코드포인트 시퀀스의 띄어쓰기를 보정
pub fn transform(cps: &[Codepoint]) -> Vec<Codepoint> {
    if cps.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(cps.len() + cps.len() / 4);
    for (i, &cur) in cps.iter().enumerate() {
        match decide(cps, i) {
            Step::Skip => continue,
            Step::Emit { space_after } => {
                out.push(cur);
                if space_after {
                    out.push(SPACE);
                }
            }
        }
    }
    out
}

/// UTF-8 바이트 버퍼의 띄어쓰기를 보정
///
/// 잘못된 UTF-8은 U+FFFD로 치환될 뿐 실패하지 않습니다.
pub fn fix_spacing(text: &[u8]) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }

    let cps = decode(text);
    let replaced = cps.iter().filter(|&&cp| cp == REPLACEMENT_CHARACTER).count();
    if replaced > 0 {
        log::debug!("잘못된 UTF-8 바이트 {}개를 U+FFFD로 치환", replaced);
    }

    let fixed = transform(&cps);
    log::trace!("코드포인트 {} -> {}", cps.len(), fixed.len());
    encode(&fixed)
}

/// 여러 버퍼를 각각 독립적으로 보정 (순서 유지)
pub fn fix_spacing_batch<T: AsRef<[u8]>>(texts: &[T]) -> Vec<Vec<u8>> {
    texts.iter().map(|t| fix_spacing(t.as_ref())).collect()
}

/// 문자열 버전 [`fix_spacing`]
pub fn fix_spacing_str(text: &str) -> String {
    // 올바른 UTF-8 입력에서는 출력도 항상 올바른 UTF-8
    String::from_utf8_lossy(&fix_spacing(text.as_bytes())).into_owned()
}

/// 문자열 버전 [`fix_spacing_batch`]
pub fn fix_spacing_str_batch<T: AsRef<str>>(texts: &[T]) -> Vec<String> {
    texts.iter().map(|t| fix_spacing_str(t.as_ref())).collect()
}
