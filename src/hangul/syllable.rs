//! 완성형 한글 음절 분해/조합 산술

use thiserror::Error;

use crate::hangul::jamo::{
    jongseong_index, CHOSEONG_COUNT, JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// 음절 산술 에러
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HangulError {
    /// 완성형 한글 범위 밖의 문자
    #[error("한글 음절이 아닌 문자: '{0}'")]
    NotHangul(char),
    /// 종성으로 쓰일 수 없는 자모
    #[error("종성으로 쓸 수 없는 자모: '{0}'")]
    InvalidConsonant(char),
    /// 알파벳 범위를 벗어난 자모 인덱스
    #[error("유효하지 않은 자모 인덱스: 초성 {choseong}, 중성 {jungseong}, 종성 {jongseong}")]
    InvalidJamoIndex {
        choseong: u32,
        jungseong: u32,
        jongseong: u32,
    },
}

/// 분해된 음절
///
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub choseong: u32,
    pub jungseong: u32,
    pub jongseong: u32,
}

/// 완성형 한글 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
pub fn decompose(c: char) -> Result<Syllable, HangulError> {
    if !is_syllable(c) {
        return Err(HangulError::NotHangul(c));
    }
    let offset = c as u32 - SYLLABLE_BASE;
    Ok(Syllable {
        choseong: offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
        jungseong: (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT,
        jongseong: offset % JONGSEONG_COUNT,
    })
}

/// 초성/중성/종성 인덱스로 완성형 한글 생성
pub fn compose(choseong: u32, jungseong: u32, jongseong: u32) -> Result<char, HangulError> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return Err(HangulError::InvalidJamoIndex {
            choseong,
            jungseong,
            jongseong,
        });
    }
    let code = SYLLABLE_BASE + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong;
    // 위 범위 검사를 통과하면 항상 유효한 코드포인트
    char::from_u32(code).ok_or(HangulError::InvalidJamoIndex {
        choseong,
        jungseong,
        jongseong,
    })
}

/// 받침(종성) 유무 확인 — 한글 음절이 아니면 false
pub fn has_batchim(c: char) -> bool {
    decompose(c).map(|s| s.jongseong != 0).unwrap_or(false)
}

/// 음절의 종성을 주어진 자모로 교체
///
/// 기존 종성이 있으면 덮어쓴다.
pub fn with_final_consonant(c: char, jong: char) -> Result<char, HangulError> {
    let s = decompose(c)?;
    let jong_index = jongseong_index(jong).ok_or(HangulError::InvalidConsonant(jong))?;
    compose(s.choseong, s.jungseong, jong_index)
}

/// 음절의 종성 제거
pub fn without_batchim(c: char) -> Result<char, HangulError> {
    let s = decompose(c)?;
    compose(s.choseong, s.jungseong, 0)
}

/// 단어 첫 음절의 초성 인덱스
///
/// 첫 글자가 완성형 한글이 아니면 None.
pub fn first_choseong(word: &str) -> Option<u32> {
    let first = word.chars().next()?;
    decompose(first).ok().map(|s| s.choseong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        assert_eq!(
            decompose('가'),
            Ok(Syllable { choseong: 0, jungseong: 0, jongseong: 0 })
        );
        assert_eq!(
            decompose('각'),
            Ok(Syllable { choseong: 0, jungseong: 0, jongseong: 1 })
        );
        assert_eq!(
            decompose('한'),
            Ok(Syllable { choseong: 18, jungseong: 0, jongseong: 4 })
        );
        assert_eq!(
            decompose('힣'),
            Ok(Syllable { choseong: 18, jungseong: 20, jongseong: 27 })
        );
    }

    #[test]
    fn test_decompose_not_hangul() {
        assert_eq!(decompose('a'), Err(HangulError::NotHangul('a')));
        assert_eq!(decompose('1'), Err(HangulError::NotHangul('1')));
        assert_eq!(decompose('ㄱ'), Err(HangulError::NotHangul('ㄱ'))); // 낱자모도 범위 밖
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(0, 0, 0), Ok('가'));
        assert_eq!(compose(0, 0, 1), Ok('각'));
        assert_eq!(compose(18, 0, 4), Ok('한'));
        assert!(compose(19, 0, 0).is_err());
        assert!(compose(0, 21, 0).is_err());
        assert!(compose(0, 0, 28).is_err());
    }

    #[test]
    fn test_compose_decompose_inverse() {
        for c in ['가', '닭', '뷁', '하', '힣'] {
            let s = decompose(c).unwrap();
            assert_eq!(compose(s.choseong, s.jungseong, s.jongseong), Ok(c));
        }
    }

    #[test]
    fn test_has_batchim() {
        assert!(has_batchim('각'));
        assert!(has_batchim('닭'));
        assert!(!has_batchim('가'));
        assert!(!has_batchim('a')); // 한글 아니면 false
    }

    #[test]
    fn test_with_final_consonant() {
        assert_eq!(with_final_consonant('가', 'ㄹ'), Ok('갈'));
        assert_eq!(with_final_consonant('하', 'ㄴ'), Ok('한'));
        // 기존 종성은 덮어쓴다
        assert_eq!(with_final_consonant('갈', 'ㄱ'), Ok('각'));
        assert_eq!(
            with_final_consonant('가', 'ㅏ'),
            Err(HangulError::InvalidConsonant('ㅏ'))
        );
        assert_eq!(
            with_final_consonant('가', 'ㄸ'),
            Err(HangulError::InvalidConsonant('ㄸ'))
        );
        assert_eq!(with_final_consonant('a', 'ㄹ'), Err(HangulError::NotHangul('a')));
    }

    #[test]
    fn test_with_final_consonant_all_finals() {
        // 분해와 종성 교체는 서로 역연산
        use crate::hangul::jamo::jongseong_char;
        for c in ['가', '호', '피'] {
            let base = decompose(c).unwrap();
            for jong in 1..28 {
                let jamo = jongseong_char(jong).unwrap();
                let composed = with_final_consonant(c, jamo).unwrap();
                let s = decompose(composed).unwrap();
                assert_eq!(s.choseong, base.choseong);
                assert_eq!(s.jungseong, base.jungseong);
                assert_eq!(s.jongseong, jong);
            }
        }
    }

    #[test]
    fn test_without_batchim() {
        assert_eq!(without_batchim('갈'), Ok('가'));
        assert_eq!(without_batchim('가'), Ok('가'));
        assert_eq!(without_batchim('덥'), Ok('더'));
    }

    #[test]
    fn test_first_choseong() {
        assert_eq!(first_choseong("하면서"), Some(18)); // ㅎ
        assert_eq!(first_choseong("가다"), Some(0)); // ㄱ
        assert_eq!(first_choseong("abc"), None);
        assert_eq!(first_choseong(""), None);
    }
}
