//! 자모 알파벳 테이블과 인덱스 변환

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 자모 (호환용), 인덱스 순
#[rustfmt::skip]
pub const CHOSEONG_CHARS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 자모 (호환용), 인덱스 순
#[rustfmt::skip]
pub const JUNGSEONG_CHARS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 자모 (호환용), 인덱스 1~27 순 (인덱스 0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG_CHARS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

lazy_static! {
    /// 호환용 자모 -> 초성 인덱스
    static ref CHOSEONG_INDEX: HashMap<char, u32> = CHOSEONG_CHARS
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32))
        .collect();

    /// 호환용 자모 -> 종성 인덱스 (1~27)
    static ref JONGSEONG_INDEX: HashMap<char, u32> = JONGSEONG_CHARS
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32 + 1))
        .collect();
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_char(index: u32) -> Option<char> {
    CHOSEONG_CHARS.get(index as usize).copied()
}

/// 호환용 자모 -> 초성 인덱스
pub fn choseong_index(jamo: char) -> Option<u32> {
    CHOSEONG_INDEX.get(&jamo).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0이면 종성 없음)
pub fn jongseong_char(index: u32) -> Option<char> {
    if index == 0 {
        return None;
    }
    JONGSEONG_CHARS.get(index as usize - 1).copied()
}

/// 호환용 자모 -> 종성 인덱스 (1~27)
pub fn jongseong_index(jamo: char) -> Option<u32> {
    JONGSEONG_INDEX.get(&jamo).copied()
}

/// 종성으로 쓰일 수 있는 자모인지 확인
pub fn is_final_consonant(jamo: char) -> bool {
    JONGSEONG_INDEX.contains_key(&jamo)
}
