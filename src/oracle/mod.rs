//! 레거시 네이티브 구현과의 비교 검증
//!
//! 레거시 구현은 테스트용 기준(oracle)으로만 쓰이며 핵심 변환기는 이 모듈에 의존하지 않는다.
//! 실제 네이티브 바인딩은 `legacy-native` 기능을 켰을 때만 빌드된다.

#[cfg(feature = "legacy-native")]
pub mod native;

use crate::boundary::{transliterate_bounded, BoundedOutput, CapacityMode, OverflowPolicy};
use crate::core::tables::Script;

/// 레거시 변환 함수 호출 규약
///
/// `max_output_length`는 레거시 호출 측이 넘기던 버퍼 길이(기본 20)이다.
/// 결과가 레거시 버퍼에 들어가면 전체 결과와 레거시 단위의 길이를
/// (`k2e`: UTF-8 바이트, `k2r`: UTF-16 코드 유닛), 들어가지 않아 복사가 거부되면 None을 돌려준다.
pub trait LegacyOracle {
    /// 라틴 문자 변환
    fn k2e(&self, input: &str, max_output_length: usize) -> Option<BoundedOutput>;
    /// 키릴 문자 변환
    fn k2r(&self, input: &str, max_output_length: usize) -> Option<BoundedOutput>;
}

/// 기준 구현과 결과가 다른 입력
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub script: Script,
    pub input: String,
    /// 기준 구현 결과 (None = 복사 거부)
    pub expected: Option<BoundedOutput>,
    /// 이 크레이트의 결과 (None = 길이 초과로 거부)
    pub actual: Option<BoundedOutput>,
}

/// 레거시 용량과 거부 정책으로 변환
fn legacy_bounded(script: Script, input: &str, max_output_length: usize) -> Option<BoundedOutput> {
    transliterate_bounded(
        script,
        input,
        max_output_length,
        CapacityMode::Legacy,
        OverflowPolicy::Reject,
    )
    .ok()
}

/// 입력마다 두 문자 체계의 결과를 같은 버퍼 길이로 기준 구현과 비교
/// 다른 결과만 모아서 반환 (빈 목록이면 모두 일치)
pub fn differential_check<O: LegacyOracle + ?Sized>(
    oracle: &O,
    inputs: &[&str],
    max_output_length: usize,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for &input in inputs {
        for script in [Script::Latin, Script::Cyrillic] {
            let expected = match script {
                Script::Latin => oracle.k2e(input, max_output_length),
                Script::Cyrillic => oracle.k2r(input, max_output_length),
            };
            let actual = legacy_bounded(script, input, max_output_length);
            if expected != actual {
                log::debug!("{:?} 불일치: {:?} -> {:?} / {:?}", script, input, expected, actual);
                mismatches.push(Mismatch {
                    script,
                    input: input.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }

    mismatches
}
