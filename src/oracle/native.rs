//! 레거시 네이티브 라이브러리(en) 바인딩
//!
//! `k2e`/`k2r`는 출력이 버퍼보다 길면 프로세스를 중단시키므로
//! 입력 길이로 계산한 최대 출력 크기만큼 버퍼를 잡아 호출하고,
//! 반환된 길이를 요청 길이의 레거시 용량과 비교해 복사 거부 여부를 판단한다.

use std::ffi::{c_char, c_int, CString};

use super::LegacyOracle;
use crate::boundary::{BoundedOutput, CapacityMode};
use crate::core::tables::Script;

#[link(name = "en")]
extern "system" {
    fn k2e(in_str: *const c_char, out_str: *mut c_char, out_len: c_int) -> c_int;
    fn k2r(in_str: *const c_char, out_str: *mut u16, out_len: c_int) -> c_int;
}

/// 입력 1바이트당 최대 출력 크기
/// (3바이트 음절 하나가 라틴 최대 7바이트, 키릴 최대 7유닛)
const OUTPUT_PER_INPUT_BYTE: usize = 4;

/// 네이티브 라이브러리 기준 구현
#[derive(Debug, Default)]
pub struct NativeOracle;

impl NativeOracle {
    fn input(input: &str) -> Option<CString> {
        match CString::new(input) {
            Ok(c) => Some(c),
            Err(_) => {
                log::warn!("NUL 문자가 포함된 입력은 네이티브로 전달할 수 없음");
                None
            }
        }
    }

    fn capacity(input: &str) -> usize {
        input.len() * OUTPUT_PER_INPUT_BYTE + 1
    }
}

/// 레거시 버퍼에 들어가지 않는 결과는 None
fn fit(script: Script, output: BoundedOutput, max_output_length: usize) -> Option<BoundedOutput> {
    let limit = CapacityMode::Legacy.effective(script, max_output_length);
    if output.length > limit {
        log::debug!("{:?} 네이티브 결과 {} > {}: 복사 거부", script, output.length, limit);
        return None;
    }
    Some(output)
}

impl LegacyOracle for NativeOracle {
    fn k2e(&self, input: &str, max_output_length: usize) -> Option<BoundedOutput> {
        let c_input = Self::input(input)?;
        let mut buf = vec![0u8; Self::capacity(input)];
        let length = unsafe {
            k2e(
                c_input.as_ptr(),
                buf.as_mut_ptr() as *mut c_char,
                buf.len() as c_int,
            )
        };
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let output = BoundedOutput {
            text: String::from_utf8_lossy(&buf[..end]).into_owned(),
            length: length.max(0) as usize,
        };
        fit(Script::Latin, output, max_output_length)
    }

    fn k2r(&self, input: &str, max_output_length: usize) -> Option<BoundedOutput> {
        let c_input = Self::input(input)?;
        // 네이티브는 전달한 길이의 절반을 wchar 수로 사용
        let mut buf = vec![0u16; Self::capacity(input)];
        let length = unsafe {
            k2r(
                c_input.as_ptr(),
                buf.as_mut_ptr(),
                (buf.len() * 2) as c_int,
            )
        };
        let end = buf.iter().position(|&u| u == 0).unwrap_or(buf.len());
        let output = BoundedOutput {
            text: String::from_utf16_lossy(&buf[..end]),
            length: length.max(0) as usize,
        };
        fit(Script::Cyrillic, output, max_output_length)
    }
}
