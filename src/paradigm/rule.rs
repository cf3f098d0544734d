//! 활용 규칙과 규칙 셀 파서

use serde::Serialize;
use thiserror::Error;

/// (동사 부류, 어미 부류) 쌍의 접합 규칙
///
/// - stop_index: 어간을 자를 위치 (None = 어간 전체, 음수 = 뒤에서부터)
/// - insert: 잘린 어간 뒤에 덧붙일 문자열 (빈 문자열 = 삽입 없음)
/// - start_index: 어미를 시작할 위치 (None = 어미 전체, 음수 = 뒤에서부터)
///
/// 세 값이 모두 비어 있는 규칙은 "변형 없이 그대로 잇기"를 뜻하며,
/// 규칙이 아예 없는 것(비호환)과는 구별된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub stop_index: Option<i32>,
    pub insert: String,
    pub start_index: Option<i32>,
}

impl Rule {
    /// 변형 없이 그대로 잇는 규칙인지 확인
    pub fn is_identity(&self) -> bool {
        self.stop_index.is_none() && self.insert.is_empty() && self.start_index.is_none()
    }
}

/// 해석할 수 없는 규칙 셀
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("해석할 수 없는 규칙 셀 '{cell}': {reason}")]
pub struct MalformedRuleError {
    /// 원본 셀 텍스트
    pub cell: String,
    /// 실패 사유
    pub reason: String,
}

/// `"(stop_index, postfix, start_index)"` 꼴의 셀 텍스트를 규칙으로 해석
///
/// 각 경계는 정수 또는 빈 값/"None"(전체 사용), postfix는 문자열 또는
/// 빈 값/"None"(삽입 없음)이다. `(,,)`도 유효한 규칙이다.
pub fn parse_cell(text: &str) -> Result<Rule, MalformedRuleError> {
    let inner = text.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 3 {
        return Err(MalformedRuleError {
            cell: text.to_string(),
            reason: format!("필드가 3개가 아님 ({}개)", parts.len()),
        });
    }

    let stop_index = parse_bound(parts[0]).map_err(|reason| MalformedRuleError {
        cell: text.to_string(),
        reason,
    })?;
    let start_index = parse_bound(parts[2]).map_err(|reason| MalformedRuleError {
        cell: text.to_string(),
        reason,
    })?;

    let insert = match parts[1].trim() {
        "" | "None" => String::new(),
        s => s.to_string(),
    };

    Ok(Rule {
        stop_index,
        insert,
        start_index,
    })
}

/// 경계 필드 해석: 빈 값/"None" -> None, 그 외에는 정수
fn parse_bound(field: &str) -> Result<Option<i32>, String> {
    match field.trim() {
        "" | "None" => Ok(None),
        s => s
            .parse::<i32>()
            .map(Some)
            .map_err(|_| format!("정수가 아닌 경계 '{}'", s)),
    }
}
