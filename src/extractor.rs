//! 필드 추출 모듈
//!
//! 개별 JSON 파일에서 플레이리스트 필드를 추출합니다.
//! 구조적 파싱을 먼저 시도하고, 비어 있는 필드는 텍스트 패턴
//! 폴백으로 보충하는 이중 전략을 사용합니다.

use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::error::PlscanError;
use crate::fallback::FallbackMatcher;

/// 인식하는 JSON 필드 키
pub const FIELD_PLAYLIST_NAME: &str = "playlistName";
pub const FIELD_SHARE_CODE: &str = "shareCode";
pub const FIELD_AUTHOR_NAME: &str = "authorName";
pub const FIELD_AUTHOR_STEAM_ID: &str = "authorSteamId";
pub const FIELD_DESCRIPTION: &str = "description";

/// 폴백 매처 생성 시 등록할 전체 필드 목록
pub const FIELD_KEYS: [&str; 5] = [
    FIELD_PLAYLIST_NAME,
    FIELD_SHARE_CODE,
    FIELD_AUTHOR_NAME,
    FIELD_AUTHOR_STEAM_ID,
    FIELD_DESCRIPTION,
];

/// 하나의 JSON 파일에서 추출된 필드 레코드
///
/// 빈 문자열은 "찾지 못함"을 의미합니다. 추출 완료 후에는 변경되지 않습니다.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    /// 플레이리스트 이름
    pub playlist_name: String,
    /// 공유 코드 (중복 감지 키)
    pub share_code: String,
    /// 작성자 이름 (작성자 모드에서만 채워짐)
    pub author_name: String,
    /// 작성자 Steam ID (작성자 모드에서만 채워짐)
    pub author_steam_id: String,
    /// 설명 (설명 모드에서만 채워짐)
    pub description: String,
}

impl Record {
    /// 파싱 성공 여부
    ///
    /// playlistName과 shareCode가 모두 비어 있지 않아야 성공입니다.
    /// 나머지 필드는 성공 여부와 무관하게 비어 있을 수 있습니다.
    pub fn is_successful(&self) -> bool {
        !self.playlist_name.is_empty() && !self.share_code.is_empty()
    }
}

/// 추출 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// 작성자 필드(authorName, authorSteamId) 추출 여부
    pub author: bool,
    /// 설명 필드(description) 추출 여부
    pub description: bool,
}

impl ExtractOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 작성자 필드 추출 설정
    pub fn with_author(mut self, author: bool) -> Self {
        self.author = author;
        self
    }

    /// 설명 필드 추출 설정
    pub fn with_description(mut self, description: bool) -> Self {
        self.description = description;
        self
    }

    /// 이번 실행에서 추출 대상인 필드 키 목록
    pub fn enabled_fields(&self) -> Vec<&'static str> {
        let mut fields = vec![FIELD_PLAYLIST_NAME, FIELD_SHARE_CODE];
        if self.author {
            fields.push(FIELD_AUTHOR_NAME);
            fields.push(FIELD_AUTHOR_STEAM_ID);
        }
        if self.description {
            fields.push(FIELD_DESCRIPTION);
        }
        fields
    }
}

/// 파일 하나의 추출 결과
#[derive(Debug)]
pub struct ExtractResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 추출된 레코드 (실패 시 전 필드 빈 문자열)
    pub record: Record,
    /// 파일을 읽지 못했거나 내용이 비어 있을 때의 사유
    pub error: Option<String>,
}

/// 단일 JSON 파일에서 필드 추출
///
/// # Arguments
/// * `path` - 처리할 JSON 파일 경로
/// * `matcher` - 폴백 패턴 매처
/// * `options` - 추출 옵션
///
/// # Returns
/// 추출 결과를 담은 `ExtractResult`. 이 함수는 실패하지 않으며
/// 읽기 실패는 빈 레코드와 에러 메시지로 표현됩니다.
pub fn extract_file(
    path: PathBuf,
    matcher: &FallbackMatcher,
    options: &ExtractOptions,
) -> ExtractResult {
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            let error = PlscanError::FileOpenError {
                file: path.clone(),
                reason: e.to_string(),
            };
            return ExtractResult {
                path,
                record: Record::default(),
                error: Some(error.to_string()),
            };
        }
    };

    if content.is_empty() {
        return ExtractResult {
            path,
            record: Record::default(),
            error: Some("파일 내용이 비어 있습니다".to_string()),
        };
    }

    let record = extract_from_content(&content, matcher, options);

    ExtractResult {
        path,
        record,
        error: None,
    }
}

/// 파일 내용에서 레코드 추출 (이중 전략)
///
/// 1차: 전체 JSON 파싱 후 문자열 타입 필드만 읽기.
/// 2차: 1차에서 채우지 못한 필드를 텍스트 패턴으로 개별 보충.
/// 1차에서 찾은 값은 2차가 덮어쓰지 않습니다.
pub fn extract_from_content(
    content: &str,
    matcher: &FallbackMatcher,
    options: &ExtractOptions,
) -> Record {
    let mut record = Record::default();

    // 1차 전략: 구조적 파싱
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(content) {
        let string_field = |key: &str| -> String {
            // 존재하지만 문자열이 아닌 필드는 없는 것으로 취급
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };

        record.playlist_name = string_field(FIELD_PLAYLIST_NAME);
        record.share_code = string_field(FIELD_SHARE_CODE);
        if options.author {
            record.author_name = string_field(FIELD_AUTHOR_NAME);
            record.author_steam_id = string_field(FIELD_AUTHOR_STEAM_ID);
        }
        if options.description {
            record.description = string_field(FIELD_DESCRIPTION);
        }
    }

    // 2차 전략: 빈 필드만 텍스트 패턴으로 보충
    for field in options.enabled_fields() {
        let slot = match field {
            FIELD_PLAYLIST_NAME => &mut record.playlist_name,
            FIELD_SHARE_CODE => &mut record.share_code,
            FIELD_AUTHOR_NAME => &mut record.author_name,
            FIELD_AUTHOR_STEAM_ID => &mut record.author_steam_id,
            FIELD_DESCRIPTION => &mut record.description,
            _ => continue,
        };

        if slot.is_empty() {
            if let Some(found) = matcher.extract(content, field) {
                *slot = found;
            }
        }
    }

    record
}

/// 파일별 진단 출력
///
/// 처리된 모든 파일(실패 포함)에 대해 파일 이름과 활성화된
/// 필드 값을 출력합니다. quiet 모드와 무관하게 항상 출력됩니다.
pub fn print_file_fields(result: &ExtractResult, options: &ExtractOptions, verbose: bool) {
    let file_name = result
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    println!("  {} {}", "📄".bright_white(), file_name.bright_white());

    if verbose {
        if let Some(ref error) = result.error {
            println!("      {}", error.red());
        }
    }

    print_field_line(FIELD_PLAYLIST_NAME, &result.record.playlist_name);
    print_field_line(FIELD_SHARE_CODE, &result.record.share_code);
    if options.author {
        print_field_line(FIELD_AUTHOR_NAME, &result.record.author_name);
        print_field_line(FIELD_AUTHOR_STEAM_ID, &result.record.author_steam_id);
    }
    if options.description {
        print_field_line(FIELD_DESCRIPTION, &result.record.description);
    }
}

fn print_field_line(field: &str, value: &str) {
    if value.is_empty() {
        println!("      {}: {}", field.cyan(), "(not found)".yellow());
    } else {
        println!("      {}: {}", field.cyan(), value);
    }
}
