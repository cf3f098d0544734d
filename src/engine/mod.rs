//! 활용/역탐색 질의 엔진
//!
//! 규칙표와 어휘를 한 번 적재해 불변 상태로 들고, 그 위에서 상태 없는
//! 질의만 제공합니다. 질의는 전부 `&self`라 잠금 없이 여러 스레드에서
//! 동시에 호출할 수 있습니다.
//!
//! # 사용 예시
//!
//! ```
//! use koyong::Paradigm;
//!
//! let table = r#"{
//!     "verbs":    [{ "id": 1, "lemma": "가", "class": 1 }],
//!     "endings":  [{ "id": 1, "text": "았다", "class": 1 }],
//!     "template": [{ "verb_class": 1, "ending_class": 1, "cell": "(None, , 0)" }]
//! }"#;
//! let paradigm = Paradigm::from_json_str(table).unwrap();
//!
//! let forms: Vec<_> = paradigm.conjugate("가", 1).collect();
//! assert_eq!(forms[0].surface, "가았다");
//!
//! let resolution = paradigm.resolve("가았다");
//! assert_eq!(resolution.candidates()[0].lemma, "가");
//! ```

mod conjugator;
mod resolver;
mod variant;

use std::path::Path;

use crate::paradigm::{
    JsonSource, Lexicon, LexiconSource, LoadError, RuleMatrix, RuleSource, VerbClassId,
};

pub use conjugator::{apply_rule, ConjugatedForm, SpliceError};
pub use resolver::{Candidate, Resolution, Split, SplitOutcome};
pub use variant::{fuse_onset, StemAlternation};

/// 활용 패러다임 엔진
///
/// 적재 후 읽기 전용. 질의 결과는 호출자 소유다.
pub struct Paradigm {
    matrix: RuleMatrix,
    lexicon: Lexicon,
}

impl Paradigm {
    /// 공급자에서 규칙표와 어휘를 적재해 엔진 구축
    ///
    /// 공급자는 값으로 소비되어 적재가 끝나면 해제된다. 유효한 규칙이
    /// 하나도 없거나 어휘가 비어 있으면 실패한다.
    pub fn load<R, L>(rules: R, lexicon: L) -> Result<Self, LoadError>
    where
        R: RuleSource,
        L: LexiconSource,
    {
        let cells = rules.cells()?;
        let (verb_rows, ending_rows) = lexicon.rows()?;

        if verb_rows.is_empty() {
            return Err(LoadError::EmptyVerbLexicon);
        }
        if ending_rows.is_empty() {
            return Err(LoadError::EmptyEndingLexicon);
        }

        let matrix = RuleMatrix::build(cells);
        if matrix.is_empty() {
            return Err(LoadError::EmptyRuleMatrix);
        }
        if !matrix.diagnostics().is_empty() {
            log::warn!("규칙 셀 {}개 건너뜀", matrix.diagnostics().len());
        }

        Ok(Self {
            matrix,
            lexicon: Lexicon::build(verb_rows, ending_rows),
        })
    }

    /// JSON 문자열에서 엔진 구축
    pub fn from_json_str(json_str: &str) -> Result<Self, LoadError> {
        let source = JsonSource::from_json(json_str)?;
        Self::load(source.clone(), source)
    }

    /// JSON 파일에서 엔진 구축
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let source = JsonSource::load(path)?;
        Self::load(source.clone(), source)
    }

    /// 규칙표
    pub fn matrix(&self) -> &RuleMatrix {
        &self.matrix
    }

    /// 어휘
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// 한 어간의 모든 활용형 (지연, 재순회 가능)
    pub fn conjugate<'a>(
        &'a self,
        stem: &'a str,
        verb_class: VerbClassId,
    ) -> impl Iterator<Item = ConjugatedForm> + 'a {
        conjugator::conjugate(&self.matrix, &self.lexicon, stem, verb_class)
    }

    /// 표제어의 모든 활용형
    ///
    /// 같은 표제어가 여러 부류에 있으면 전부 합친다. 어휘에 없는
    /// 표제어는 빈 목록.
    pub fn conjugate_lemma(&self, lemma: &str) -> Vec<ConjugatedForm> {
        let entries: Vec<(String, VerbClassId)> = self
            .lexicon
            .verbs_with_lemma(lemma)
            .map(|v| (v.lemma.clone(), v.class))
            .collect();

        let mut forms = Vec::new();
        for (stem, verb_class) in entries {
            forms.extend(self.conjugate(&stem, verb_class));
        }
        forms
    }

    /// 표면형에서 (표제어, 규칙) 후보 집합 복원
    pub fn resolve(&self, surface: &str) -> Resolution {
        resolver::resolve(&self.matrix, &self.lexicon, surface)
    }

    /// 후보를 정방향 접합으로 재검증
    ///
    /// 후보의 (표제어, 규칙, 어미)로 만든 표면형이 원래 표면형과
    /// 일치하는지 확인한다. resolve() 자체는 검증하지 않으므로
    /// 정밀도가 필요한 호출자가 선택적으로 쓴다.
    pub fn verify_candidate(&self, candidate: &Candidate, surface: &str) -> bool {
        apply_rule(&candidate.lemma, &candidate.rule, &candidate.ending)
            .map(|built| built == surface)
            .unwrap_or(false)
    }
}
