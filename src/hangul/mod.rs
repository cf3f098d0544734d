//! 완성형 한글 음절 분해/조합
//!
//! 활용 규칙이 어간 마지막 음절을 검사하거나 고쳐 쓸 때 사용하는
//! 순수 산술 연산만 제공합니다.

pub mod jamo;
mod syllable;

pub use syllable::{
    compose, decompose, first_choseong, has_batchim, is_syllable, with_final_consonant,
    without_batchim, HangulError, Syllable, SYLLABLE_BASE, SYLLABLE_LAST,
};
