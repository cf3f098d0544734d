//! 역방향 탐색 — 표면형에서 표제어 후보 복원
//!
//! 3단계 파이프라인으로 동작합니다:
//!
//! 1. **어미 검출**: 표면형의 접미 문자열과 일치하는 모든 어미에서
//!    (어미, 어간 후보) 분할을 만든다. 어미들은 서로 접미 관계일 수
//!    있으므로 겹치는 분할이 여러 개 나오는 것이 정상이며, 이 단계에서
//!    가지치기는 하지 않는다.
//! 2. **어간 특징 추출**: 어간 후보 첫 음절의 초성을 뽑는다.
//! 3. **표제어 후보 열거**: 역인덱스로 어미 부류와 호환되는 동사 부류를
//!    얻고, (부류, 초성) 필터에 맞는 어휘 항목마다 지배 규칙과 함께
//!    후보 하나를 낸다.
//!
//! # 초성 필터의 한계
//!
//! 첫 초성 비교는 선언된 휴리스틱 필터다. 초성만으로 동사 부류가
//! 정해지지 않으므로 거친 선별일 뿐이고, 재현율은 어휘에 기록된 특징과
//! 일치하는 항목으로 제한된다. 특징이 없는 항목(첫 글자가 완성형 한글이
//! 아닌 표제어)은 특징 없는 어간 후보하고만 맞는다. 후보를 정방향
//! 활용으로 재검증하지는 않는다 — 정밀도가 필요하면
//! [`Paradigm::verify_candidate`](crate::engine::Paradigm::verify_candidate)로
//! 확인한다.

use serde::Serialize;

use crate::hangul;
use crate::paradigm::{EndingClassId, Lexicon, Rule, RuleMatrix, VerbClassId};

/// 역방향 탐색 후보 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub lemma: String,
    pub verb_class: VerbClassId,
    pub ending_class: EndingClassId,
    pub rule: Rule,
    pub ending: String,
    /// 소비한 어미 음절 수 — 클수록 앞 순위
    pub rank_hint: usize,
}

/// 분할 하나의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SplitOutcome {
    /// 후보가 하나 이상 나옴
    Matched(Vec<Candidate>),
    /// 어미 부류와 호환되는 동사 부류가 아예 없음 — 문법 공백
    NoCompatibleVerbClass,
    /// 호환 부류는 있으나 초성 필터에 맞는 표제어가 없음 — 어휘 공백
    NoLexiconMatch,
}

/// (어미, 어간 후보) 분할 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    pub ending: String,
    pub ending_class: EndingClassId,
    pub stem_candidate: String,
    /// 어간 후보 첫 음절의 초성 인덱스
    pub first_jamo: Option<u32>,
    pub outcome: SplitOutcome,
}

/// 표면형 하나의 역방향 탐색 결과
///
/// 구조적으로 유효한 분할은 결과 없이 탈락한 경우에도 모두 보고된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub surface: String,
    pub splits: Vec<Split>,
}

impl Resolution {
    /// 전체 후보를 순위순으로 반환 (소비한 어미가 긴 분할 우선, 안정 정렬)
    pub fn candidates(&self) -> Vec<&Candidate> {
        let mut all: Vec<&Candidate> = self
            .splits
            .iter()
            .filter_map(|split| match &split.outcome {
                SplitOutcome::Matched(candidates) => Some(candidates.iter()),
                _ => None,
            })
            .flatten()
            .collect();
        all.sort_by_key(|c| std::cmp::Reverse(c.rank_hint));
        all
    }

    /// 후보가 하나라도 있는지 확인
    pub fn has_candidates(&self) -> bool {
        self.splits
            .iter()
            .any(|s| matches!(s.outcome, SplitOutcome::Matched(_)))
    }
}

/// 표면형에서 (표제어, 규칙) 후보 집합 복원
pub fn resolve(matrix: &RuleMatrix, lexicon: &Lexicon, surface: &str) -> Resolution {
    let mut splits = Vec::new();

    for ending in lexicon.endings() {
        if !surface.ends_with(&ending.text) {
            continue;
        }
        let stem_candidate = &surface[..surface.len() - ending.text.len()];
        if stem_candidate.is_empty() {
            continue;
        }

        let first_jamo = hangul::first_choseong(stem_candidate);
        let verb_classes: Vec<VerbClassId> =
            matrix.compatible_verb_classes(ending.class).collect();

        let outcome = if verb_classes.is_empty() {
            SplitOutcome::NoCompatibleVerbClass
        } else {
            let rank_hint = ending.text.chars().count();
            let mut candidates = Vec::new();
            for verb_class in verb_classes {
                // 역인덱스는 정방향 표와 함께 구축되므로 규칙이 항상 있다
                let Some(rule) = matrix.get(verb_class, ending.class) else {
                    continue;
                };
                for verb in lexicon.verbs_in(verb_class, first_jamo) {
                    candidates.push(Candidate {
                        lemma: verb.lemma.clone(),
                        verb_class,
                        ending_class: ending.class,
                        rule: rule.clone(),
                        ending: ending.text.clone(),
                        rank_hint,
                    });
                }
            }
            if candidates.is_empty() {
                SplitOutcome::NoLexiconMatch
            } else {
                SplitOutcome::Matched(candidates)
            }
        };

        splits.push(Split {
            ending: ending.text.clone(),
            ending_class: ending.class,
            stem_candidate: stem_candidate.to_string(),
            first_jamo,
            outcome,
        });
    }

    Resolution {
        surface: surface.to_string(),
        splits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradigm::{EndingRow, RawCell, VerbRow};

    fn fixture() -> (RuleMatrix, Lexicon) {
        let matrix = RuleMatrix::build(vec![
            RawCell {
                verb_class: 2,
                ending_class: 2,
                cell: "(,,)".to_string(),
            },
            RawCell {
                verb_class: 1,
                ending_class: 3,
                cell: "(None, , 0)".to_string(),
            },
        ]);
        let lexicon = Lexicon::build(
            vec![
                VerbRow {
                    id: 1,
                    lemma: "하".to_string(),
                    class: 2,
                },
                VerbRow {
                    id: 2,
                    lemma: "헤매".to_string(),
                    class: 2,
                },
                VerbRow {
                    id: 3,
                    lemma: "가".to_string(),
                    class: 1,
                },
            ],
            vec![
                EndingRow {
                    id: 1,
                    text: "면서".to_string(),
                    class: 2,
                },
                EndingRow {
                    id: 2,
                    text: "서".to_string(),
                    class: 3,
                },
                EndingRow {
                    id: 3,
                    text: "자".to_string(),
                    class: 5,
                },
            ],
        );
        (matrix, lexicon)
    }

    #[test]
    fn test_overlapping_suffixes_both_reported() {
        // "면서"와 "서"는 서로 접미 관계 — 두 분할 모두 나온다
        let (matrix, lexicon) = fixture();
        let resolution = resolve(&matrix, &lexicon, "하면서");

        assert_eq!(resolution.splits.len(), 2);
        let endings: Vec<_> = resolution.splits.iter().map(|s| s.ending.as_str()).collect();
        assert!(endings.contains(&"면서"));
        assert!(endings.contains(&"서"));
    }

    #[test]
    fn test_matched_split() {
        let (matrix, lexicon) = fixture();
        let resolution = resolve(&matrix, &lexicon, "하면서");

        let split = resolution
            .splits
            .iter()
            .find(|s| s.ending == "면서")
            .unwrap();
        assert_eq!(split.stem_candidate, "하");
        assert_eq!(split.first_jamo, Some(18)); // ㅎ

        // ㅎ 초성 표제어만 (하, 헤매) — 가는 필터에서 걸러짐
        let SplitOutcome::Matched(candidates) = &split.outcome else {
            panic!("후보가 있어야 함");
        };
        let lemmas: Vec<_> = candidates.iter().map(|c| c.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["하", "헤매"]);
        assert!(candidates[0].rule.is_identity());
    }

    #[test]
    fn test_lexicon_gap_vs_grammar_gap() {
        let (matrix, lexicon) = fixture();

        // "하면서"의 "서" 분할: 부류 1이 호환되지만 ㅎ 초성 표제어가 부류 1에 없음
        let resolution = resolve(&matrix, &lexicon, "하면서");
        let split = resolution.splits.iter().find(|s| s.ending == "서").unwrap();
        assert_eq!(split.stem_candidate, "하면");
        assert_eq!(split.outcome, SplitOutcome::NoLexiconMatch);

        // "가자"의 "자" 분할: 어미 부류 5에 호환 동사 부류가 아예 없음
        let resolution = resolve(&matrix, &lexicon, "가자");
        let split = resolution.splits.iter().find(|s| s.ending == "자").unwrap();
        assert_eq!(split.outcome, SplitOutcome::NoCompatibleVerbClass);
    }

    #[test]
    fn test_ranking_longer_ending_first() {
        let (matrix, lexicon) = fixture();
        let resolution = resolve(&matrix, &lexicon, "가서");

        // "서" 분할만 후보를 내는 경우에도 순위 규칙은 유지
        let candidates = resolution.candidates();
        assert!(!candidates.is_empty());
        for pair in candidates.windows(2) {
            assert!(pair[0].rank_hint >= pair[1].rank_hint);
        }
        assert_eq!(candidates[0].lemma, "가");
    }

    #[test]
    fn test_empty_stem_candidate_skipped() {
        let (matrix, lexicon) = fixture();
        // 표면형 전체가 어미면 어간 후보가 비므로 분할이 없다
        let resolution = resolve(&matrix, &lexicon, "면서");
        assert!(resolution.splits.is_empty());
        assert!(!resolution.has_candidates());
    }

    #[test]
    fn test_no_suffix_match() {
        let (matrix, lexicon) = fixture();
        let resolution = resolve(&matrix, &lexicon, "없는말");
        assert!(resolution.splits.is_empty());
    }
}
