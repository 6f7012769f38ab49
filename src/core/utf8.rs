//! UTF-8 바이트열 <-> 코드포인트 변환
//!
//! 표준 디코더와 달리 오류를 반환하지 않는다. 잘못된 입력은 아래 규칙으로 흡수한다.
//! - 어떤 접두 패턴에도 맞지 않는 선두 바이트: 1바이트 건너뛰고 계속
//! - 입력 끝을 넘어가는 멀티바이트 시퀀스: 디코딩 즉시 중단 (잘린 꼬리는 버림)
//! - `10xxxxxx`가 아닌 연속 바이트: U+FFFD로 대체, 원래 시퀀스 길이만큼 전진

/// 대체 문자 (U+FFFD)
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// 연속 바이트의 값 비트 마스크
const CONT_MASK: u8 = 0x3F;

/// 선두 바이트로 시퀀스 길이(1~4) 판별
/// 네 가지 접두 패턴 중 어느 것에도 맞지 않으면 None
pub fn sequence_width(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// 선두 바이트에서 값 비트만 추출
fn lead_value(lead: u8, width: usize) -> u32 {
    let mask = match width {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    (lead & mask) as u32
}

/// 바이트열을 코드포인트 목록으로 디코딩 (항상 성공)
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    let mut code_points = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let lead = bytes[i];
        let Some(width) = sequence_width(lead) else {
            // 잘못된 선두 바이트: 재동기화
            i += 1;
            continue;
        };

        // 연속 바이트가 입력 끝을 넘어감
        if i + width > bytes.len() {
            break;
        }

        let mut cp = lead_value(lead, width);
        for &cont in &bytes[i + 1..i + width] {
            if cont & 0xC0 != 0x80 {
                cp = REPLACEMENT_CHARACTER;
                break;
            }
            cp = (cp << 6) | (cont & CONT_MASK) as u32;
        }

        code_points.push(cp);
        i += width;
    }

    code_points
}

/// 코드포인트 하나를 UTF-8 바이트로 인코딩
/// 0x10FFFF 초과 여부는 검사하지 않음 (호출자 책임)
pub fn encode(cp: u32) -> Vec<u8> {
    if cp <= 0x7F {
        vec![cp as u8]
    } else if cp <= 0x7FF {
        vec![
            0xC0 | ((cp >> 6) & 0x1F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]
    } else if cp <= 0xFFFF {
        vec![
            0xE0 | ((cp >> 12) & 0x0F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]
    } else {
        vec![
            0xF0 | ((cp >> 18) & 0x07) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]
    }
}

/// 코드포인트를 문자열로 변환 (라틴 경로의 원문 통과용)
/// 유니코드 스칼라 값이 아니면(서로게이트 등) U+FFFD로 대체
pub fn encode_to_string(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(c) => String::from(c),
        None => String::from(char::REPLACEMENT_CHARACTER),
    }
}
