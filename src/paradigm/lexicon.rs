//! 동사/어미 어휘 목록

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::hangul;
use crate::paradigm::{EndingClassId, VerbClassId};

/// 동사 행 (외부 소스 형식)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerbRow {
    pub id: u32,
    pub lemma: String,
    pub class: VerbClassId,
}

/// 어미 행 (외부 소스 형식)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndingRow {
    pub id: u32,
    pub text: String,
    pub class: EndingClassId,
}

/// 동사 항목
///
/// first_jamo는 표제어 첫 음절의 초성 인덱스로, 적재 시 한 번 계산해
/// 역방향 탐색의 거친 필터로 쓴다. 첫 글자가 완성형 한글이 아니면 None.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verb {
    pub id: u32,
    pub lemma: String,
    pub class: VerbClassId,
    pub first_jamo: Option<u32>,
}

/// 어미 항목 — 표면형의 접미 문자열
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ending {
    pub id: u32,
    pub text: String,
    pub class: EndingClassId,
}

/// 동사/어미 어휘
///
/// 같은 표제어 문자열이 서로 다른 부류에 별개 항목으로 존재할 수 있다.
/// 각 항목은 정확히 하나의 부류에 속한다.
pub struct Lexicon {
    verbs: Vec<Verb>,
    endings: Vec<Ending>,
    by_class_jamo: HashMap<(VerbClassId, Option<u32>), Vec<usize>>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// 소스 행으로 어휘 구축
    pub fn build(verb_rows: Vec<VerbRow>, ending_rows: Vec<EndingRow>) -> Self {
        let verbs: Vec<Verb> = verb_rows
            .into_iter()
            .map(|row| {
                let first_jamo = hangul::first_choseong(&row.lemma);
                Verb {
                    id: row.id,
                    lemma: row.lemma,
                    class: row.class,
                    first_jamo,
                }
            })
            .collect();

        let endings: Vec<Ending> = ending_rows
            .into_iter()
            .map(|row| Ending {
                id: row.id,
                text: row.text,
                class: row.class,
            })
            .collect();

        let mut by_class_jamo: HashMap<(VerbClassId, Option<u32>), Vec<usize>> = HashMap::new();
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, verb) in verbs.iter().enumerate() {
            by_class_jamo
                .entry((verb.class, verb.first_jamo))
                .or_default()
                .push(i);
            by_lemma.entry(verb.lemma.clone()).or_default().push(i);
        }

        Self {
            verbs,
            endings,
            by_class_jamo,
            by_lemma,
        }
    }

    /// 전체 동사 항목
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// 전체 어미 항목
    pub fn endings(&self) -> &[Ending] {
        &self.endings
    }

    /// (부류, 첫 초성) 필터에 맞는 동사 항목
    pub fn verbs_in(
        &self,
        class: VerbClassId,
        first_jamo: Option<u32>,
    ) -> impl Iterator<Item = &Verb> + '_ {
        self.by_class_jamo
            .get(&(class, first_jamo))
            .into_iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.verbs[i]))
    }

    /// 표제어 문자열로 동사 항목 조회 (부류별로 여러 개일 수 있음)
    pub fn verbs_with_lemma(&self, lemma: &str) -> impl Iterator<Item = &Verb> + '_ {
        self.by_lemma
            .get(lemma)
            .into_iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.verbs[i]))
    }
}
