//! (동사 부류, 어미 부류) 희소 호환표

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::paradigm::rule::{parse_cell, MalformedRuleError, Rule};
use crate::paradigm::{EndingClassId, VerbClassId};

/// 소스가 넘겨주는 원시 셀 (비어 있지 않은 칸만)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCell {
    pub verb_class: VerbClassId,
    pub ending_class: EndingClassId,
    pub cell: String,
}

/// 해석에 실패해 건너뛴 셀 기록
#[derive(Debug, Clone)]
pub struct CellDiagnostic {
    pub verb_class: VerbClassId,
    pub ending_class: EndingClassId,
    pub error: MalformedRuleError,
}

/// 활용 규칙표
///
/// 한 번 구축하면 읽기 전용. 키가 없는 (동사 부류, 어미 부류) 쌍은
/// 비호환이며, 이는 에러가 아니라 일상적인 결과다. 역방향 탐색을 위해
/// 어미 부류 -> 동사 부류 역인덱스를 구축 시점에 미리 계산한다.
pub struct RuleMatrix {
    rules: BTreeMap<VerbClassId, BTreeMap<EndingClassId, Rule>>,
    inverse: BTreeMap<EndingClassId, BTreeSet<VerbClassId>>,
    diagnostics: Vec<CellDiagnostic>,
}

impl RuleMatrix {
    /// 원시 셀 목록으로 규칙표 구축
    ///
    /// 해석 불가 셀은 경고 로그와 진단 기록을 남기고 건너뛴다.
    /// 셀 하나가 깨져도 나머지 표 적재는 계속된다.
    pub fn build(cells: Vec<RawCell>) -> Self {
        let mut rules: BTreeMap<VerbClassId, BTreeMap<EndingClassId, Rule>> = BTreeMap::new();
        let mut diagnostics = Vec::new();

        for raw in cells {
            match parse_cell(&raw.cell) {
                Ok(rule) => {
                    let row = rules.entry(raw.verb_class).or_default();
                    if row.insert(raw.ending_class, rule).is_some() {
                        // 같은 쌍의 중복 셀은 뒤의 것이 남는다
                        log::warn!(
                            "중복 규칙 셀 교체: 동사 부류 {}, 어미 부류 {}",
                            raw.verb_class,
                            raw.ending_class
                        );
                    }
                }
                Err(error) => {
                    log::warn!(
                        "규칙 셀 건너뜀 (동사 부류 {}, 어미 부류 {}): {}",
                        raw.verb_class,
                        raw.ending_class,
                        error
                    );
                    diagnostics.push(CellDiagnostic {
                        verb_class: raw.verb_class,
                        ending_class: raw.ending_class,
                        error,
                    });
                }
            }
        }

        let mut inverse: BTreeMap<EndingClassId, BTreeSet<VerbClassId>> = BTreeMap::new();
        for (&verb_class, row) in &rules {
            for &ending_class in row.keys() {
                inverse.entry(ending_class).or_default().insert(verb_class);
            }
        }

        Self {
            rules,
            inverse,
            diagnostics,
        }
    }

    /// 규칙 조회 — None은 비호환을 뜻한다
    pub fn get(&self, verb_class: VerbClassId, ending_class: EndingClassId) -> Option<&Rule> {
        self.rules.get(&verb_class)?.get(&ending_class)
    }

    /// 동사 부류와 호환되는 어미 부류 집합
    pub fn compatible_ending_classes(
        &self,
        verb_class: VerbClassId,
    ) -> impl Iterator<Item = EndingClassId> + '_ {
        self.rules
            .get(&verb_class)
            .into_iter()
            .flat_map(|row| row.keys().copied())
    }

    /// 어미 부류와 호환되는 동사 부류 집합 (미리 계산된 역인덱스)
    pub fn compatible_verb_classes(
        &self,
        ending_class: EndingClassId,
    ) -> impl Iterator<Item = VerbClassId> + '_ {
        self.inverse
            .get(&ending_class)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// 적재된 규칙 수
    pub fn len(&self) -> usize {
        self.rules.values().map(|row| row.len()).sum()
    }

    /// 규칙이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 적재 중 건너뛴 셀 기록
    pub fn diagnostics(&self) -> &[CellDiagnostic] {
        &self.diagnostics
    }
}
