//! 외부 표 데이터 공급자
//!
//! 규칙표와 어휘는 시작 시 한 번만 공급자에서 읽어 들인다. 공급자는
//! 값으로 소비되어 적재가 끝나면 (성공이든 실패든) 해제된다.
//!
//! # JSON 형식
//! ```json
//! {
//!   "verbs":    [{ "id": 1, "lemma": "가", "class": 1 }],
//!   "endings":  [{ "id": 1, "text": "았다", "class": 1 }],
//!   "template": [{ "verb_class": 1, "ending_class": 1, "cell": "(None, , 0)" }]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::paradigm::lexicon::{EndingRow, VerbRow};
use crate::paradigm::matrix::RawCell;

/// 소스 읽기/해석 에러
#[derive(Debug, Error)]
pub enum SourceError {
    /// 파일 읽기 실패
    #[error("소스 파일 읽기 실패: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 해석 실패
    #[error("소스 JSON 해석 실패: {0}")]
    Json(#[from] serde_json::Error),
}

/// 규칙표 공급자
pub trait RuleSource {
    /// 비어 있지 않은 원시 셀 전체
    fn cells(self) -> Result<Vec<RawCell>, SourceError>;
}

/// 어휘 공급자
pub trait LexiconSource {
    /// (동사 행, 어미 행) 전체
    fn rows(self) -> Result<(Vec<VerbRow>, Vec<EndingRow>), SourceError>;
}

/// JSON 문서 기반 공급자 — 규칙표와 어휘를 한 파일로 공급
#[derive(Debug, Clone, Deserialize)]
pub struct JsonSource {
    verbs: Vec<VerbRow>,
    endings: Vec<EndingRow>,
    template: Vec<RawCell>,
}

impl JsonSource {
    /// JSON 문자열에서 공급자 생성
    pub fn from_json(json_str: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// JSON 파일에서 공급자 생성
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl RuleSource for JsonSource {
    fn cells(self) -> Result<Vec<RawCell>, SourceError> {
        Ok(self.template)
    }
}

impl LexiconSource for JsonSource {
    fn rows(self) -> Result<(Vec<VerbRow>, Vec<EndingRow>), SourceError> {
        Ok((self.verbs, self.endings))
    }
}
