//! 초성/중성/종성 -> 라틴/키릴 문자 변환 테이블
//!
//! 빈 문자열은 소리 없는 자모(초성 ㅇ, 종성 없음)를 뜻한다.

use serde::{Deserialize, Serialize};

use crate::core::unicode::SyllableIndices;

/// 출력 문자 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 라틴 문자 (로마자 표기)
    Latin,
    /// 키릴 문자
    Cyrillic,
}

impl Script {
    /// 문자 체계에 해당하는 변환 테이블
    pub fn table(self) -> &'static TransliterationTable {
        match self {
            Script::Latin => &LATIN,
            Script::Cyrillic => &CYRILLIC,
        }
    }
}

/// 한 문자 체계의 자모 변환 테이블
#[derive(Debug)]
pub struct TransliterationTable {
    /// 초성 (19개)
    pub leading: [&'static str; 19],
    /// 중성 (21개)
    pub vowel: [&'static str; 21],
    /// 종성 (28개, 0 = 종성 없음)
    pub trailing: [&'static str; 28],
}

impl TransliterationTable {
    /// 분해된 음절을 초성+중성+종성 순으로 이어 붙임
    pub fn syllable(&self, indices: &SyllableIndices) -> String {
        let parts = [
            self.leading[indices.leading],
            self.vowel[indices.vowel],
            self.trailing[indices.trailing],
        ];
        parts.concat()
    }
}

// 초성 인덱스 순서 (19개):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
//
// 중성 인덱스 순서 (21개):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
//
// 종성 인덱스 순서 (28개, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)

/// 라틴 문자 테이블
#[rustfmt::skip]
pub static LATIN: TransliterationTable = TransliterationTable {
    leading: [
        "k", "kk", "n", "d", "tt", "r", "m", "b", "pp",
        "s", "ss", "", "j", "jj", "ch", "k", "t", "p", "h",
    ],
    vowel: [
        "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o",
        "wa", "wae", "oe", "yo", "u", "wo", "we", "wi", "yu", "eu", "yi", "i",
    ],
    trailing: [
        "", "k", "k", "ks", "n", "nj", "nh", "t", "l", "lk",
        "lm", "lb", "ls", "lt", "lp", "lh", "m", "p", "ps", "t",
        "t", "ng", "t", "t", "k", "t", "p", "t",
    ],
};

/// 키릴 문자 테이블 (종성은 단순화된 근사치)
#[rustfmt::skip]
pub static CYRILLIC: TransliterationTable = TransliterationTable {
    leading: [
        "к", "кк", "н", "д", "тт", "р", "м", "б", "пп",
        "с", "сс", "", "ч", "чч", "чх", "г", "т", "п", "х",
    ],
    vowel: [
        "а", "э", "я", "е", "о", "э", "ё", "е", "о",
        "ва", "вэ", "ве", "ё", "у", "во", "ве", "ви", "ю", "ы", "и", "и",
    ],
    trailing: [
        "", "к", "к", "кс", "н", "ндж", "нх", "т", "ль", "льк",
        "льм", "льб", "льс", "льт", "льп", "льх", "м", "п", "пс", "т",
        // ㅇ은 н으로 근사
        "т", "н", "т", "т", "к", "т", "п", "т",
    ],
};
