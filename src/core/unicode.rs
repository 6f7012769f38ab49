//! 유니코드 한글 음절 분해/조합 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 초성 자모 시작 코드포인트 (ᄀ)
pub const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 코드포인트 (ᅡ)
pub const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 기준 코드포인트 (종성 없음 = 0 이므로 첫 종성 ᆨ 바로 앞)
pub const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;
/// 초성 하나당 음절 수 (중성 × 종성)
pub const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;
/// 완성형 음절 수
pub const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * SYLLABLES_PER_CHOSEONG;

/// 완성형 음절의 초성/중성/종성 인덱스
///
/// `decompose_syllable`로만 만들어지므로 각 인덱스는 항상 테이블 범위 안에 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableIndices {
    /// 초성 인덱스 (0~18)
    pub leading: usize,
    /// 중성 인덱스 (0~20)
    pub vowel: usize,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub trailing: usize,
}

impl SyllableIndices {
    /// 첫가끝 자모 코드포인트로 변환 (종성 없으면 2개)
    pub fn to_conjoining_jamo(&self) -> Vec<u32> {
        let mut jamo = vec![
            CHOSEONG_BASE + self.leading as u32,
            JUNGSEONG_BASE + self.vowel as u32,
        ];
        if self.trailing != 0 {
            jamo.push(JONGSEONG_BASE + self.trailing as u32);
        }
        jamo
    }
}

/// 완성형 한글 음절 블록(U+AC00~U+D7A3)에 속하는지 확인
pub fn is_precomposed_syllable(cp: u32) -> bool {
    (HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + SYLLABLE_COUNT).contains(&cp)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 음절 블록 밖이면 None
pub fn decompose_syllable(cp: u32) -> Option<SyllableIndices> {
    if !is_precomposed_syllable(cp) {
        return None;
    }
    let offset = cp - HANGUL_SYLLABLE_BASE;
    Some(SyllableIndices {
        leading: (offset / SYLLABLES_PER_CHOSEONG) as usize,
        vowel: ((offset % SYLLABLES_PER_CHOSEONG) / JONGSEONG_COUNT) as usize,
        trailing: (offset % JONGSEONG_COUNT) as usize,
    })
}

/// 초성/중성/종성 인덱스로 완성된 한글 코드포인트 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<u32> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    Some(
        HANGUL_SYLLABLE_BASE
            + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
            + jongseong,
    )
}
