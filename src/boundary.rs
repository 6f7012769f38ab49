//! 레거시 고정 크기 출력 버퍼 규약을 따르는 변환 어댑터
//!
//! 핵심 변환기는 길이 제한 없이 결과를 만들고, 최대 길이 검사는 이 경계에서만 한다.
//! 길이 단위는 레거시 버퍼를 따른다.
//! - 라틴: UTF-8 바이트 (`k2e`의 char 버퍼)
//! - 키릴: UTF-16 코드 유닛 (`k2r`의 wchar 버퍼)
//!
//! 레거시 용량 모드에서는 요청 길이를 레거시 함수가 실제로 담을 수 있는 크기로 바꾼다.
//! - 라틴: `strcpy_s(out, max, ..)` 이므로 NUL 자리를 빼고 `max - 1` 바이트
//! - 키릴: `wcscpy_s(out, max / 2, ..)` 이므로 `max / 2 - 1` 유닛

use serde::{Deserialize, Serialize};

use crate::config::TranslitConfig;
use crate::core::converter::transliterate;
use crate::core::tables::Script;

/// 레거시 호출 측이 할당하던 출력 버퍼 길이
pub const LEGACY_OUTPUT_LENGTH: usize = 20;

/// 결과가 최대 길이를 넘을 때의 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// 문자 경계에서 잘라냄
    Truncate,
    /// 에러 반환
    Reject,
}

/// 요청 길이를 실제 용량으로 해석하는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityMode {
    /// 레거시 함수와 같은 용량 (NUL 자리, 키릴 절반 요청 반영)
    Legacy,
    /// 요청 길이 그대로
    Exact,
}

impl CapacityMode {
    /// 요청 길이에 대한 실제 최대 길이 (문자 체계의 버퍼 단위)
    pub fn effective(self, script: Script, max_output_length: usize) -> usize {
        match (self, script) {
            (CapacityMode::Exact, _) => max_output_length,
            (CapacityMode::Legacy, Script::Latin) => max_output_length.saturating_sub(1),
            (CapacityMode::Legacy, Script::Cyrillic) => (max_output_length / 2).saturating_sub(1),
        }
    }
}

/// 출력 길이 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// UTF-8 바이트
    Utf8Bytes,
    /// UTF-16 코드 유닛
    Utf16Units,
}

impl LengthUnit {
    /// 문자 체계별 레거시 버퍼 단위
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Latin => LengthUnit::Utf8Bytes,
            Script::Cyrillic => LengthUnit::Utf16Units,
        }
    }

    fn of_char(self, c: char) -> usize {
        match self {
            LengthUnit::Utf8Bytes => c.len_utf8(),
            LengthUnit::Utf16Units => c.len_utf16(),
        }
    }

    /// 문자열 길이 측정
    pub fn measure(self, text: &str) -> usize {
        match self {
            LengthUnit::Utf8Bytes => text.len(),
            LengthUnit::Utf16Units => text.chars().map(char::len_utf16).sum(),
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthUnit::Utf8Bytes => write!(f, "UTF-8 바이트"),
            LengthUnit::Utf16Units => write!(f, "UTF-16 유닛"),
        }
    }
}

/// 경계에서 길이 제한을 적용한 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundedOutput {
    /// 변환된 문자열
    pub text: String,
    /// 길이 (문자 체계의 버퍼 단위)
    pub length: usize,
}

/// 경계 어댑터 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// 변환 결과가 최대 길이를 넘음 (Reject 정책)
    OutputTooLong {
        required: usize,
        limit: usize,
        unit: LengthUnit,
    },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::OutputTooLong {
                required,
                limit,
                unit,
            } => write!(f, "출력 길이 초과: {} {} 필요, 최대 {}", required, unit, limit),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// 최대 길이 이하가 되도록 문자 경계에서 자름
fn truncate_to(text: &str, unit: LengthUnit, max: usize) -> (String, usize) {
    let mut used = 0;
    let mut end = 0;
    for (offset, c) in text.char_indices() {
        let width = unit.of_char(c);
        if used + width > max {
            break;
        }
        used += width;
        end = offset + c.len_utf8();
    }
    (text[..end].to_string(), used)
}

/// 변환 후 최대 길이 적용
/// `max_output_length`는 호출 측이 넘기는 요청 길이이며, 실제 용량은 `capacity`로 정한다
pub fn transliterate_bounded(
    script: Script,
    input: &str,
    max_output_length: usize,
    capacity: CapacityMode,
    policy: OverflowPolicy,
) -> Result<BoundedOutput, BoundaryError> {
    let conversion = transliterate(script, input.as_bytes());
    let unit = LengthUnit::for_script(script);
    let required = unit.measure(&conversion.text);
    let limit = capacity.effective(script, max_output_length);

    if required <= limit {
        return Ok(BoundedOutput {
            text: conversion.text,
            length: required,
        });
    }

    match policy {
        OverflowPolicy::Truncate => {
            log::warn!("{:?} 출력 잘림: {} -> {} {}", script, required, limit, unit);
            let (text, length) = truncate_to(&conversion.text, unit, limit);
            Ok(BoundedOutput { text, length })
        }
        OverflowPolicy::Reject => {
            log::debug!("{:?} 출력 거부: {} {} > {}", script, required, unit, limit);
            Err(BoundaryError::OutputTooLong {
                required,
                limit,
                unit,
            })
        }
    }
}

/// 라틴 문자 변환 (`k2e` 규약, 길이 단위: UTF-8 바이트)
/// 결과는 NUL 자리를 뺀 `max_output_length - 1` 바이트까지 허용
pub fn convert_to_latin_bounded(
    input: &str,
    max_output_length: usize,
    policy: OverflowPolicy,
) -> Result<BoundedOutput, BoundaryError> {
    transliterate_bounded(Script::Latin, input, max_output_length, CapacityMode::Legacy, policy)
}

/// 키릴 문자 변환 (`k2r` 규약, 길이 단위: UTF-16 코드 유닛)
///
/// 레거시 호출 측은 버퍼를 두 배로 잡고 길이를 넘기지만, 네이티브 쪽은 그 절반을
/// wchar 용량으로 쓴다. 따라서 결과는 `max_output_length / 2 - 1` 유닛까지 허용한다.
pub fn convert_to_cyrillic_bounded(
    input: &str,
    max_output_length: usize,
    policy: OverflowPolicy,
) -> Result<BoundedOutput, BoundaryError> {
    transliterate_bounded(Script::Cyrillic, input, max_output_length, CapacityMode::Legacy, policy)
}

/// 설정값으로 길이 제한을 적용하는 변환기
#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    config: TranslitConfig,
}

impl Transliterator {
    /// 새 변환기 생성
    pub fn new(config: TranslitConfig) -> Self {
        Self { config }
    }

    /// 현재 설정
    pub fn config(&self) -> &TranslitConfig {
        &self.config
    }

    /// 라틴 문자로 변환 (설정의 `latin_max_len`, 용량 모드, 초과 정책 적용)
    pub fn to_latin(&self, input: &str) -> Result<BoundedOutput, BoundaryError> {
        transliterate_bounded(
            Script::Latin,
            input,
            self.config.latin_max_len,
            self.config.capacity,
            self.config.overflow,
        )
    }

    /// 키릴 문자로 변환 (설정의 `cyrillic_max_len`, 용량 모드, 초과 정책 적용)
    pub fn to_cyrillic(&self, input: &str) -> Result<BoundedOutput, BoundaryError> {
        transliterate_bounded(
            Script::Cyrillic,
            input,
            self.config.cyrillic_max_len,
            self.config.capacity,
            self.config.overflow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit() {
        let out = convert_to_latin_bounded("가나", 20, OverflowPolicy::Reject).unwrap();
        assert_eq!(out.text, "KaNa");
        assert_eq!(out.length, 4);

        let out = convert_to_cyrillic_bounded("가나", 20, OverflowPolicy::Reject).unwrap();
        assert_eq!(out.text, "КаНа");
        assert_eq!(out.length, 4);
    }

    #[test]
    fn test_effective_capacity() {
        assert_eq!(CapacityMode::Legacy.effective(Script::Latin, 20), 19);
        assert_eq!(CapacityMode::Legacy.effective(Script::Cyrillic, 20), 9);
        assert_eq!(CapacityMode::Legacy.effective(Script::Latin, 0), 0);
        assert_eq!(CapacityMode::Legacy.effective(Script::Cyrillic, 1), 0);
        assert_eq!(CapacityMode::Exact.effective(Script::Latin, 20), 20);
        assert_eq!(CapacityMode::Exact.effective(Script::Cyrillic, 20), 20);
    }

    #[test]
    fn test_latin_legacy_edge() {
        // 19바이트는 NUL과 함께 20바이트 버퍼에 들어감
        let out = convert_to_latin_bounded("가나다라마바사자차", 20, OverflowPolicy::Reject).unwrap();
        assert_eq!(out.text, "KaNaDaRaMaBaSaJaCha");
        assert_eq!(out.length, 19);

        // 20바이트는 NUL 자리가 없어 거부
        let err = convert_to_latin_bounded("가나다라마바사아자차", 20, OverflowPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            BoundaryError::OutputTooLong {
                required: 20,
                limit: 19,
                unit: LengthUnit::Utf8Bytes,
            }
        );
    }

    #[test]
    fn test_cyrillic_legacy_edge() {
        // 요청 20 -> wchar 10개 버퍼 -> NUL 빼고 9유닛
        let out = convert_to_cyrillic_bounded("가나다라아", 20, OverflowPolicy::Reject).unwrap();
        assert_eq!(out.text, "КаНаДаРаА");
        assert_eq!(out.length, 9);

        let err = convert_to_cyrillic_bounded("가나다라마", 20, OverflowPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            BoundaryError::OutputTooLong {
                required: 10,
                limit: 9,
                unit: LengthUnit::Utf16Units,
            }
        );
    }

    #[test]
    fn test_reject_over_limit() {
        let input = "한국".repeat(4);
        let err = convert_to_latin_bounded(&input, 20, OverflowPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            BoundaryError::OutputTooLong {
                required: 24,
                limit: 19,
                unit: LengthUnit::Utf8Bytes,
            }
        );
        assert!(err.to_string().contains("24"));
    }

    #[test]
    fn test_truncate_over_limit() {
        let input = "한국".repeat(4);
        let out = convert_to_latin_bounded(&input, 20, OverflowPolicy::Truncate).unwrap();
        assert_eq!(out.text, "HanKukHanKukHanKukH");
        assert_eq!(out.length, 19);

        let out = convert_to_cyrillic_bounded(&input, 20, OverflowPolicy::Truncate).unwrap();
        assert_eq!(out.text, "ХанКукХан");
        assert_eq!(out.length, 9);
    }

    #[test]
    fn test_exact_capacity_uses_requested_length() {
        let input = "한국".repeat(4);
        let out =
            transliterate_bounded(Script::Cyrillic, &input, 20, CapacityMode::Exact, OverflowPolicy::Truncate)
                .unwrap();
        assert_eq!(out.text, "ХанКукХанКукХанКукХа");
        assert_eq!(out.length, 20);

        let out = transliterate_bounded(Script::Latin, "가나", 4, CapacityMode::Exact, OverflowPolicy::Reject)
            .unwrap();
        assert_eq!(out.text, "KaNa");
    }

    #[test]
    fn test_cyrillic_counts_utf16_units() {
        // 키릴 문자는 UTF-8로 2바이트지만 UTF-16으로는 1유닛
        let out = convert_to_cyrillic_bounded("서울", 12, OverflowPolicy::Reject).unwrap();
        assert_eq!(out.text, "СоУль");
        assert_eq!(out.length, 5);
        assert_eq!(out.text.len(), 10);
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        // É는 2바이트, 실제 용량 4바이트면 2글자만 남음
        let out = convert_to_latin_bounded("ééé", 5, OverflowPolicy::Truncate).unwrap();
        assert_eq!(out.text, "ÉÉ");
        assert_eq!(out.length, 4);

        assert_eq!(truncate_to("a😀b", LengthUnit::Utf16Units, 2), ("a".to_string(), 1));
        assert_eq!(truncate_to("a😀b", LengthUnit::Utf16Units, 3), ("a😀".to_string(), 3));
        assert_eq!(truncate_to("abc", LengthUnit::Utf8Bytes, 0), (String::new(), 0));
    }

    #[test]
    fn test_measure() {
        assert_eq!(LengthUnit::Utf8Bytes.measure("Хан"), 6);
        assert_eq!(LengthUnit::Utf16Units.measure("Хан"), 3);
        assert_eq!(LengthUnit::Utf16Units.measure("😀"), 2);
    }

    #[test]
    fn test_transliterator_uses_config() {
        let strict = Transliterator::default();
        assert_eq!(strict.config().latin_max_len, LEGACY_OUTPUT_LENGTH);
        assert!(strict.to_latin(&"한국".repeat(4)).is_err());
        // 기본 설정은 레거시 용량: 키릴 14유닛은 9유닛 한도를 넘음
        assert!(strict.to_cyrillic("가나다라마바사").is_err());

        let lenient = Transliterator::new(TranslitConfig {
            latin_max_len: 6,
            cyrillic_max_len: 3,
            capacity: CapacityMode::Exact,
            overflow: OverflowPolicy::Truncate,
        });
        assert_eq!(lenient.to_latin("한국").unwrap().text, "HanKuk");
        assert_eq!(lenient.to_cyrillic("한국").unwrap().text, "Хан");
    }

    #[test]
    fn test_transliterator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transliterator>();
        assert_send_sync::<BoundedOutput>();
        assert_send_sync::<BoundaryError>();
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(serde_json::to_string(&OverflowPolicy::Truncate).unwrap(), "\"truncate\"");
        let parsed: OverflowPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(parsed, OverflowPolicy::Reject);
        assert_eq!(serde_json::to_string(&CapacityMode::Legacy).unwrap(), "\"legacy\"");
    }
}
