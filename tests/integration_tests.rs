//! 통합 테스트 - 띄어쓰기 보정 공개 API

use hangul_spacing::{
    decode, encode, fix_spacing, fix_spacing_batch, fix_spacing_str, fix_spacing_str_batch,
    REPLACEMENT_CHARACTER,
};

#[test]
fn test_sentence_end_boundary() {
    assert_eq!(fix_spacing_str("안녕.안녕"), "안녕. 안녕");
}

#[test]
fn test_ellipsis_suppresses_space() {
    assert_eq!(fix_spacing_str("안녕..안녕"), "안녕..안녕");
}

#[test]
fn test_close_bracket_boundary() {
    assert_eq!(fix_spacing_str("(안녕)안녕"), "(안녕) 안녕");
}

#[test]
fn test_open_bracket_boundary() {
    assert_eq!(fix_spacing_str("안녕(좋아)"), "안녕 (좋아)");
}

#[test]
fn test_collapse_double_space() {
    assert_eq!(fix_spacing_str("안녕  좋아"), "안녕 좋아");
}

#[test]
fn test_emphasis_marker() {
    // 여는 * 뒤에만 공백 (한글 + * 에는 규칙 없음)
    assert_eq!(fix_spacing_str("*안녕*"), "* 안녕*");
    assert_eq!(fix_spacing_str("*안녕* *좋아*"), "* 안녕* * 좋아*");
}

#[test]
fn test_byte_api_matches_str_api() {
    let text = "결과.다음[항목]출력";
    assert_eq!(fix_spacing(text.as_bytes()), fix_spacing_str(text).as_bytes());
}

#[test]
fn test_truncated_sequence_resynchronizes() {
    // "가" = EA B0 80, 마지막 바이트가 잘림
    let bytes = [0xEA, 0xB0];
    let cps = decode(&bytes);
    assert_eq!(cps, vec![REPLACEMENT_CHARACTER, REPLACEMENT_CHARACTER]);

    let bytes = [0xEA, 0xB0, b'!'];
    // 3바이트가 있으므로 연속 바이트 검증 없이 하나로 디코딩
    assert_eq!(decode(&bytes).len(), 1);
}

#[test]
fn test_malformed_input_never_fails() {
    let inputs: [&[u8]; 4] = [&[0xFF], &[0xC3], &[0xF0, 0x9F], &[0x80, 0x80, b'.', 0xEA]];
    for input in inputs {
        let out = fix_spacing(input);
        assert!(!out.is_empty());
    }
}

#[test]
fn test_round_trip() {
    let text = "Log:한글 **bold** 😀 ᄀ ㄱ";
    assert_eq!(encode(&decode(text.as_bytes())), text.as_bytes());
}

#[test]
fn test_batch_preserves_order_and_length() {
    let texts = vec!["이다.브라더", "", "좋아!정말", "hello"];
    let fixed = fix_spacing_str_batch(&texts);
    assert_eq!(fixed, vec!["이다. 브라더", "", "좋아! 정말", "hello"]);

    let bytes: Vec<Vec<u8>> = texts.iter().map(|t| t.as_bytes().to_vec()).collect();
    let fixed_bytes = fix_spacing_batch(&bytes);
    assert_eq!(fixed_bytes.len(), texts.len());
    assert_eq!(fixed_bytes[3], b"hello");
}

#[test]
fn test_batch_empty() {
    let empty: Vec<Vec<u8>> = Vec::new();
    assert!(fix_spacing_batch(&empty).is_empty());
}

#[test]
fn test_mixed_realistic_text() {
    let text = "오늘 회의:결론은 다음과 같다.첫째[보류]둘째(진행)셋째  완료!끝";
    assert_eq!(
        fix_spacing_str(text),
        "오늘 회의: 결론은 다음과 같다. 첫째 [보류] 둘째 (진행) 셋째 완료! 끝"
    );
}
