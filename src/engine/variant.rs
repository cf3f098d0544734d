//! 불규칙 어간 교체 유형
//!
//! 모음 어미 앞에서 어간이 달라지는 닫힌 유형 집합. 어떤 (어간, 어미)
//! 조합이 실제로 존재하는지는 규칙표가 결정하고, 이 모듈은 교체형
//! 계산만 맡는다. 판별은 어간 모양 기반이라 어휘적 예외(같은 꼴의
//! 규칙 동사)는 구별하지 못한다 — 부류 구분은 어휘의 몫이다.

use crate::hangul;

/// 어간 교체 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemAlternation {
    /// 규칙 어간 — 교체 없음
    Regular,
    /// ㄷ 불규칙: 받침 ㄷ -> ㄹ (걷 -> 걸)
    Digeut,
    /// ㅂ 불규칙: 받침 ㅂ 탈락 + 우 (덥 -> 더우)
    Bieup,
    /// 르 불규칙: 르 탈락, 앞 음절에 ㄹ 받침 (다르 -> 달)
    Reu,
    /// 으 불규칙: ㅡ 모음 탈락, 초성만 남아 어미 모음과 축약 (크 -> ㅋ+어 = 커)
    Eu,
    /// 하 불규칙: 하 -> 해
    Ha,
}

impl StemAlternation {
    /// 어간 마지막 음절 모양으로 교체 유형 판별
    pub fn detect(root: &str) -> StemAlternation {
        let syllables: Vec<char> = root.chars().collect();
        let Some(&last) = syllables.last() else {
            return StemAlternation::Regular;
        };

        if last == '하' {
            return StemAlternation::Ha;
        }
        if last == '르' && syllables.len() > 1 {
            return StemAlternation::Reu;
        }

        let Ok(s) = hangul::decompose(last) else {
            return StemAlternation::Regular;
        };
        match s.jongseong {
            7 => StemAlternation::Digeut,  // ㄷ
            17 => StemAlternation::Bieup,  // ㅂ
            0 if s.jungseong == 18 => StemAlternation::Eu, // ㅡ
            _ => StemAlternation::Regular,
        }
    }

    /// 모음 어미 앞의 어간 교체형
    ///
    /// Eu는 ㅡ가 빠진 나머지를 돌려주며, 남은 초성은 [`onset`]으로 얻어
    /// [`fuse_onset`]으로 어미 첫 음절과 축약한다.
    ///
    /// [`onset`]: StemAlternation::onset
    pub fn pre_vocalic(&self, root: &str) -> Result<String, hangul::HangulError> {
        let syllables: Vec<char> = root.chars().collect();
        let Some(&last) = syllables.last() else {
            return Ok(String::new());
        };
        let body: String = syllables[..syllables.len() - 1].iter().collect();

        match self {
            StemAlternation::Regular => Ok(root.to_string()),
            StemAlternation::Ha => Ok(format!("{}해", body)),
            StemAlternation::Digeut => {
                let swapped = hangul::with_final_consonant(last, 'ㄹ')?;
                Ok(format!("{}{}", body, swapped))
            }
            StemAlternation::Bieup => {
                let bare = hangul::without_batchim(last)?;
                Ok(format!("{}{}우", body, bare))
            }
            StemAlternation::Reu => {
                // 르 탈락 후 남는 음절에 ㄹ 받침
                let mut chars: Vec<char> = body.chars().collect();
                let Some(prev) = chars.pop() else {
                    return Ok(body);
                };
                let doubled = hangul::with_final_consonant(prev, 'ㄹ')?;
                chars.push(doubled);
                Ok(chars.into_iter().collect())
            }
            StemAlternation::Eu => Ok(body),
        }
    }

    /// 으 불규칙에서 탈락한 음절의 초성 인덱스
    pub fn onset(&self, root: &str) -> Option<u32> {
        if *self != StemAlternation::Eu {
            return None;
        }
        let last = root.chars().last()?;
        hangul::decompose(last).ok().map(|s| s.choseong)
    }
}

/// 탈락한 초성을 모음으로 시작하는 어미 첫 음절과 축약
///
/// 어미 첫 음절의 초성(ㅇ)을 주어진 초성으로 바꾼다: ㅋ + 어 = 커.
pub fn fuse_onset(choseong: u32, ending_syllable: char) -> Result<char, hangul::HangulError> {
    let s = hangul::decompose(ending_syllable)?;
    hangul::compose(choseong, s.jungseong, s.jongseong)
}
