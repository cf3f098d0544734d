//! 정방향 활용 — 규칙 접합

use serde::Serialize;
use thiserror::Error;

use crate::hangul;
use crate::hangul::jamo;
use crate::paradigm::{EndingClassId, Lexicon, Rule, RuleMatrix, VerbClassId};

/// 규칙 접합 에러
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpliceError {
    /// 어간 절단 위치가 음절 수를 벗어남
    #[error("어간 절단 위치 {index}가 음절 수 {len}를 벗어남")]
    StemIndexOutOfRange { index: i32, len: usize },
    /// 어미 시작 위치가 음절 수를 벗어남
    #[error("어미 시작 위치 {index}가 음절 수 {len}를 벗어남")]
    EndingIndexOutOfRange { index: i32, len: usize },
    /// 음절 산술 실패
    #[error(transparent)]
    Hangul(#[from] hangul::HangulError),
}

/// 활용형 질의 결과 — 호출자가 소유하며 저장되지 않는다
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugatedForm {
    pub stem: String,
    pub verb_class: VerbClassId,
    pub ending: String,
    pub ending_class: EndingClassId,
    pub rule: Rule,
    pub surface: String,
}

/// 규칙 하나를 (어간, 어미)에 적용해 표면형 생성
///
/// 음절 단위로 동작한다:
/// - 어간부 = 어간[0..stop_index] (None이면 전체, 음수면 뒤에서부터)
/// - insert를 뒤에 덧붙임 — 종성 자모는 어간부 마지막 음절에 받침으로
///   접합하고, 그 외 글자는 음절로 덧붙인다
/// - 어미부 = 어미[start_index..] (None이면 전체, 음수면 뒤에서부터)
/// - 표면형 = 어간부 ++ 어미부
pub fn apply_rule(stem: &str, rule: &Rule, ending: &str) -> Result<String, SpliceError> {
    let stem_syllables: Vec<char> = stem.chars().collect();
    let ending_syllables: Vec<char> = ending.chars().collect();

    let cut = match rule.stop_index {
        None => stem_syllables.len(),
        Some(i) => {
            resolve_bound(i, stem_syllables.len()).ok_or(SpliceError::StemIndexOutOfRange {
                index: i,
                len: stem_syllables.len(),
            })?
        }
    };
    let mut surface: String = stem_syllables[..cut].iter().collect();

    for c in rule.insert.chars() {
        if jamo::is_final_consonant(c) {
            // 받침 접합: 마지막 음절의 종성을 교체
            match surface.pop() {
                Some(last) if hangul::is_syllable(last) => {
                    surface.push(hangul::with_final_consonant(last, c)?);
                }
                Some(last) => {
                    surface.push(last);
                    surface.push(c);
                }
                None => surface.push(c),
            }
        } else {
            surface.push(c);
        }
    }

    let start = match rule.start_index {
        None => 0,
        Some(i) => {
            resolve_bound(i, ending_syllables.len()).ok_or(SpliceError::EndingIndexOutOfRange {
                index: i,
                len: ending_syllables.len(),
            })?
        }
    };
    surface.extend(&ending_syllables[start..]);

    Ok(surface)
}

/// 음수 허용 경계를 실제 위치로 변환 (범위 밖이면 None)
fn resolve_bound(index: i32, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        (i <= len).then_some(i)
    } else {
        let back = index.unsigned_abs() as usize;
        (back <= len).then(|| len - back)
    }
}

/// 한 어간의 모든 활용형 열거
///
/// 동사 부류에 규칙이 있는 어미마다 하나씩 산출하는 유한한 지연
/// 시퀀스. 입력만의 순수 함수라 몇 번이든 다시 호출해 재순회할 수 있다.
/// 접합에 실패한 어미는 경고 로그를 남기고 건너뛰며 나머지는 계속된다.
pub fn conjugate<'a>(
    matrix: &'a RuleMatrix,
    lexicon: &'a Lexicon,
    stem: &'a str,
    verb_class: VerbClassId,
) -> impl Iterator<Item = ConjugatedForm> + 'a {
    lexicon.endings().iter().filter_map(move |ending| {
        let rule = matrix.get(verb_class, ending.class)?;
        match apply_rule(stem, rule, &ending.text) {
            Ok(surface) => Some(ConjugatedForm {
                stem: stem.to_string(),
                verb_class,
                ending: ending.text.clone(),
                ending_class: ending.class,
                rule: rule.clone(),
                surface,
            }),
            Err(e) => {
                log::warn!(
                    "활용 건너뜀 (어간 '{}', 어미 '{}'): {}",
                    stem,
                    ending.text,
                    e
                );
                None
            }
        }
    })
}
