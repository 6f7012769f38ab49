//! 한글 -> 라틴/키릴 통합 변환기

use serde::Serialize;

use crate::core::assimilation::AssimilationPass;
use crate::core::dispatcher::transliterate_code_point;
use crate::core::tables::Script;
use crate::core::utf8::decode;

/// 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// 변환된 문자열
    pub text: String,
    /// 변환된 문자 수
    pub length: usize,
}

/// UTF-8 바이트열을 지정한 문자 체계로 변환
/// 디코딩 -> 음절 변환 -> 대문자화/K·G 교체 순으로 처리하며 실패하지 않는다
pub fn transliterate(script: Script, input: &[u8]) -> Conversion {
    let mut pass = AssimilationPass::new(script);

    for cp in decode(input) {
        pass.feed(&transliterate_code_point(script, cp));
    }

    let conversion = pass.finish();
    log::trace!(
        "{:?} 변환: 입력 {}바이트 -> 출력 {}자",
        script,
        input.len(),
        conversion.length
    );
    conversion
}

/// 라틴 문자로 변환
/// 한글이 아닌 문자는 그대로 유지
pub fn convert_to_latin(input: &[u8]) -> Conversion {
    transliterate(Script::Latin, input)
}

/// 키릴 문자로 변환
/// 한글이 아닌 문자는 출력에서 빠진다
pub fn convert_to_cyrillic(input: &[u8]) -> Conversion {
    transliterate(Script::Cyrillic, input)
}

/// 문자열을 라틴 문자로 변환
pub fn romanize(input: &str) -> String {
    convert_to_latin(input.as_bytes()).text
}

/// 문자열을 키릴 문자로 변환
pub fn cyrillize(input: &str) -> String {
    convert_to_cyrillic(input.as_bytes()).text
}
