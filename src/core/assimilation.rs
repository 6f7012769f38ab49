//! 음절 경계의 대문자화 및 K/G 교체 처리
//!
//! 음절 변환 결과를 왼쪽부터 차례로 받아 각 조각의 첫 글자를 대문자로 바꾼다.
//! 라틴 출력에서는 직전 조각의 첫 글자가 K였다면 이번 K를 G로, G였다면 다시 K로
//! 바꾸어 음절 경계마다 K/G가 번갈아 나오게 한다.

use crate::core::converter::Conversion;
use crate::core::tables::Script;

/// 직전에 출력한 조각의 첫 글자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastInitial {
    /// 아직 출력한 조각 없음
    None,
    /// 직전 첫 글자가 K
    LastWasK,
    /// 직전 첫 글자가 G
    LastWasG,
    /// 그 밖의 문자
    Other,
}

/// 음절 경계 교체 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// 대문자화만 수행
    CapitalizeOnly,
    /// 대문자화 + K/G 교체
    AlternateKG,
}

impl BoundaryRule {
    /// 문자 체계별 규칙 (K/G 교체는 라틴 전용)
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Latin => BoundaryRule::AlternateKG,
            Script::Cyrillic => BoundaryRule::CapitalizeOnly,
        }
    }
}

impl LastInitial {
    fn from_char(c: char) -> Self {
        match c {
            'K' => LastInitial::LastWasK,
            'G' => LastInitial::LastWasG,
            _ => LastInitial::Other,
        }
    }

    /// 조각의 첫 글자를 받아 (출력할 첫 글자, 다음 상태) 반환
    pub fn apply(self, first: char, rule: BoundaryRule) -> (char, LastInitial) {
        let mut initial = capitalize(first);

        if rule == BoundaryRule::AlternateKG && initial == 'K' {
            match self {
                LastInitial::LastWasK => initial = 'G',
                LastInitial::LastWasG => initial = 'K',
                LastInitial::None | LastInitial::Other => {}
            }
        }

        (initial, LastInitial::from_char(initial))
    }
}

/// 단일 문자 대문자 매핑
/// 대문자가 여러 글자로 늘어나는 문자(ß 등)는 그대로 둔다
fn capitalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// 한 번의 변환 호출 동안만 존재하는 후처리기
#[derive(Debug)]
pub struct AssimilationPass {
    rule: BoundaryRule,
    last: LastInitial,
    /// 출력 버퍼
    output: String,
    /// 출력 문자 수
    length: usize,
}

impl AssimilationPass {
    /// 새 후처리기 생성 (상태는 항상 None에서 시작)
    pub fn new(script: Script) -> Self {
        Self {
            rule: BoundaryRule::for_script(script),
            last: LastInitial::None,
            output: String::new(),
            length: 0,
        }
    }

    /// 현재 상태
    pub fn last_initial(&self) -> LastInitial {
        self.last
    }

    /// 음절 변환 결과 하나를 추가
    /// 빈 조각은 출력도 상태도 바꾸지 않는다
    pub fn feed(&mut self, piece: &str) {
        let mut chars = piece.chars();
        let Some(first) = chars.next() else {
            return;
        };

        let (initial, next) = self.last.apply(first, self.rule);
        self.last = next;

        let rest = chars.as_str();
        self.output.push(initial);
        self.output.push_str(rest);
        self.length += 1 + rest.chars().count();
    }

    /// 후처리를 끝내고 결과 반환
    pub fn finish(self) -> Conversion {
        Conversion {
            text: self.output,
            length: self.length,
        }
    }
}
