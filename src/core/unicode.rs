//! 코드포인트 분류 유틸리티

use super::utf8::Codepoint;

/// 한글 음절 영역 (가 ~ U+D7AF)
const HANGUL_SYLLABLES: (Codepoint, Codepoint) = (0xAC00, 0xD7AF);
/// 한글 자모 영역
const HANGUL_JAMO: (Codepoint, Codepoint) = (0x1100, 0x11FF);
/// 호환용 자모 영역 (ㄱ-ㅎ, ㅏ-ㅣ)
const HANGUL_COMPATIBILITY_JAMO: (Codepoint, Codepoint) = (0x3130, 0x318F);

/// 공백 (U+0020)
pub const SPACE: Codepoint = ' ' as Codepoint;

/// 한글 문자인지 확인 (음절, 자모, 호환용 자모)
pub fn is_korean(cp: Codepoint) -> bool {
    [HANGUL_SYLLABLES, HANGUL_JAMO, HANGUL_COMPATIBILITY_JAMO]
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// 문장 끝 부호 `.` `!` `?`
pub fn is_sentence_end(cp: Codepoint) -> bool {
    matches!(char::from_u32(cp), Some('.' | '!' | '?'))
}

/// 닫는 괄호 `]` `)` `}`
pub fn is_close_bracket(cp: Codepoint) -> bool {
    matches!(char::from_u32(cp), Some(']' | ')' | '}'))
}

/// 여는 괄호 `[` `(` `{`
pub fn is_open_bracket(cp: Codepoint) -> bool {
    matches!(char::from_u32(cp), Some('[' | '(' | '{'))
}

pub fn is_space(cp: Codepoint) -> bool {
    cp == SPACE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(c: char) -> Codepoint {
        c as Codepoint
    }

    #[test]
    fn test_is_korean_syllables() {
        assert!(is_korean(cp('가')));
        assert!(is_korean(cp('힣')));
        assert!(is_korean(0xD7AF));
        assert!(!is_korean(0xD7B0));
        assert!(!is_korean(0xABFF));
    }

    #[test]
    fn test_is_korean_jamo() {
        assert!(is_korean(0x1100)); // ᄀ
        assert!(is_korean(0x11FF));
        assert!(!is_korean(0x1200));
        assert!(is_korean(cp('ㄱ')));
        assert!(is_korean(cp('ㅣ')));
        assert!(is_korean(0x3130));
        assert!(is_korean(0x318F));
        assert!(!is_korean(0x3190));
    }

    #[test]
    fn test_is_korean_non_hangul() {
        assert!(!is_korean(cp('a')));
        assert!(!is_korean(cp('漢')));
        assert!(!is_korean(cp('あ')));
        assert!(!is_korean(0x10FFFF));
        assert!(!is_korean(u32::MAX));
    }

    #[test]
    fn test_punctuation_classes() {
        for c in ['.', '!', '?'] {
            assert!(is_sentence_end(cp(c)));
        }
        for c in [']', ')', '}'] {
            assert!(is_close_bracket(cp(c)));
            assert!(!is_open_bracket(cp(c)));
        }
        for c in ['[', '(', '{'] {
            assert!(is_open_bracket(cp(c)));
            assert!(!is_close_bracket(cp(c)));
        }
        assert!(!is_sentence_end(cp(',')));
        assert!(!is_sentence_end(0xD800)); // 서로게이트는 char가 아님
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(cp(' ')));
        assert!(!is_space(cp('\t')));
        assert!(!is_space(cp('\n')));
    }
}
