//! UTF-8 바이트 <-> 코드포인트 변환
//!
//! 잘못된 입력도 실패하지 않습니다. 인식할 수 없는 선두 바이트나
//! 뒤따르는 바이트가 부족한 시퀀스는 U+FFFD로 치환하고 1바이트만 전진합니다.

/// 디코딩된 유니코드 코드포인트
pub type Codepoint = u32;

/// 디코딩할 수 없는 바이트에 대신 넣는 대체 문자
pub const REPLACEMENT_CHARACTER: Codepoint = 0xFFFD;

/// 연속 바이트(10xxxxxx)에서 값 비트만 추출
#[inline]
fn continuation(byte: u8) -> Codepoint {
    (byte & 0x3F) as Codepoint
}

/// `bytes[*pos]`에서 코드포인트 하나를 디코딩하고 `pos`를 전진
///
/// 디코딩하면 `pos`는 최소 1 증가합니다. 버퍼 끝이면 `None`이고 `pos`는 그대로입니다.
pub fn decode_one(bytes: &[u8], pos: &mut usize) -> Option<Codepoint> {
    let start = *pos;
    let &lead = bytes.get(start)?;
    let remaining = bytes.len() - start;

    // (선두 바이트 마스크 후 남은 비트, 전체 길이)
    let (bits, width) = match lead {
        b if b & 0x80 == 0x00 => {
            *pos += 1;
            return Some(b as Codepoint);
        }
        b if b & 0xE0 == 0xC0 => ((b & 0x1F) as Codepoint, 2),
        b if b & 0xF0 == 0xE0 => ((b & 0x0F) as Codepoint, 3),
        b if b & 0xF8 == 0xF0 => ((b & 0x07) as Codepoint, 4),
        _ => {
            *pos += 1;
            return Some(REPLACEMENT_CHARACTER);
        }
    };

    if remaining < width {
        // 잘린 시퀀스: 선두 바이트만 버리고 다음 바이트에서 재동기화
        *pos += 1;
        return Some(REPLACEMENT_CHARACTER);
    }

    let cp = bytes[start + 1..start + width]
        .iter()
        .fold(bits, |acc, &b| (acc << 6) | continuation(b));
    *pos += width;
    Some(cp)
}

/// 코드포인트 하나를 최소 길이로 인코딩하여 `out`에 추가
///
/// 서로게이트 등 범위 밖의 값도 수치 그대로 구조적으로 인코딩합니다.
pub fn encode_one(cp: Codepoint, out: &mut Vec<u8>) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else if cp < 0x10000 {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xF0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}

/// 바이트 버퍼 전체를 코드포인트 시퀀스로 디코딩
pub fn decode(bytes: &[u8]) -> Vec<Codepoint> {
    // 바이트 수가 코드포인트 수의 상한
    let mut cps = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while let Some(cp) = decode_one(bytes, &mut pos) {
        cps.push(cp);
    }
    cps
}

/// 코드포인트 시퀀스를 바이트 버퍼로 인코딩
pub fn encode(cps: &[Codepoint]) -> Vec<u8> {
    // 한글 위주 텍스트 기준 대략적인 추정치
    let mut out = Vec::with_capacity(cps.len() * 3);
    for &cp in cps {
        encode_one(cp, &mut out);
    }
    out
}
