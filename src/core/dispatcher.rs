//! 코드포인트 단위 음절 변환

use crate::core::tables::{Script, CYRILLIC, LATIN};
use crate::core::unicode::decompose_syllable;
use crate::core::utf8::encode_to_string;

/// 코드포인트 하나를 라틴 문자로 변환
/// 한글 음절이 아니면 원래 문자를 그대로 돌려준다
pub fn to_latin_syllable(cp: u32) -> String {
    match decompose_syllable(cp) {
        Some(indices) => LATIN.syllable(&indices),
        None => encode_to_string(cp),
    }
}

/// 코드포인트 하나를 키릴 문자로 변환
///
/// 한글 음절이 아니면 빈 문자열을 돌려준다. 라틴 경로와 달리 비한글 문자가
/// 출력에서 사라지는데, 레거시 구현과 같은 결과를 내기 위해 그대로 유지한다.
pub fn to_cyrillic_syllable(cp: u32) -> String {
    match decompose_syllable(cp) {
        Some(indices) => CYRILLIC.syllable(&indices),
        None => String::new(),
    }
}

/// 문자 체계에 따라 코드포인트 하나를 변환
pub fn transliterate_code_point(script: Script, cp: u32) -> String {
    match script {
        Script::Latin => to_latin_syllable(cp),
        Script::Cyrillic => to_cyrillic_syllable(cp),
    }
}
