//! 폴백 필드 추출 모듈
//!
//! 구조적 JSON 파싱이 실패하거나 필드를 채우지 못했을 때 사용하는
//! 텍스트 패턴 기반 추출을 담당합니다.

use regex::Regex;
use std::collections::HashMap;

use crate::error::{PlscanError, Result};

/// 필드별로 컴파일된 폴백 패턴 매처
///
/// 각 필드에 대해 `"<필드명>" : "<값>"` 형태의 텍스트를 찾는
/// 정규식을 보관합니다. 값 캡처는 첫 번째 `"` 에서 끝나므로
/// 이스케이프된 따옴표(`\"`)가 포함된 값은 그 앞에서 잘립니다.
/// 이는 의도된 제한 사항입니다.
#[derive(Debug, Default)]
pub struct FallbackMatcher {
    patterns: HashMap<String, Regex>,
}

impl FallbackMatcher {
    /// 주어진 필드 이름들에 대한 폴백 매처 생성
    ///
    /// # Arguments
    /// * `fields` - 추출 대상 JSON 필드 이름 목록
    ///
    /// # Returns
    /// 컴파일된 `FallbackMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use plscan::fallback::FallbackMatcher;
    ///
    /// let matcher = FallbackMatcher::new(&["shareCode"]).unwrap();
    /// let found = matcher.extract(r#"{"shareCode": "ABC-123", broken"#, "shareCode");
    /// assert_eq!(found.as_deref(), Some("ABC-123"));
    /// ```
    pub fn new(fields: &[&str]) -> Result<Self> {
        let mut patterns = HashMap::new();

        for field in fields {
            let source = format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(field));
            let compiled = Regex::new(&source).map_err(|e| PlscanError::InvalidPattern {
                field: field.to_string(),
                reason: e.to_string(),
            })?;
            patterns.insert(field.to_string(), compiled);
        }

        Ok(Self { patterns })
    }

    /// 파일 내용에서 특정 필드 값을 텍스트 패턴으로 추출
    ///
    /// # Arguments
    /// * `content` - 원본 파일 내용
    /// * `field` - 추출할 필드 이름 (생성 시 등록된 필드여야 함)
    ///
    /// # Returns
    /// 따옴표 사이의 원시 문자열 (이스케이프 해석 없음), 없으면 `None`
    pub fn extract(&self, content: &str, field: &str) -> Option<String> {
        let pattern = self.patterns.get(field)?;
        pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// 등록된 필드인지 확인
    pub fn has_field(&self, field: &str) -> bool {
        self.patterns.contains_key(field)
    }
}
