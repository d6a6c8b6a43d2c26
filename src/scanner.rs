//! 디렉토리 스캔 모듈
//!
//! 대상 폴더 바로 아래의 .json 파일을 열거합니다.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{PlscanError, Result};

/// 대상 폴더에서 JSON 파일 수집
///
/// 폴더 바로 아래의 일반 파일 중 확장자가 정확히 `.json`
/// (대소문자 구분)인 것만 골라냅니다. 하위 폴더로 내려가지 않으며
/// 폴더, 특수 파일 등 일반 파일이 아닌 항목은 조용히 건너뜁니다.
/// 반환 순서는 OS의 디렉토리 나열 순서를 그대로 따릅니다 (정렬 없음).
///
/// # Errors
/// * `PathNotFound` - 대상 경로가 존재하지 않음
/// * `NotADirectory` - 대상 경로가 폴더가 아님
pub fn collect_json_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(PlscanError::PathNotFound {
            path: input.to_path_buf(),
        });
    }

    if !input.is_dir() {
        return Err(PlscanError::NotADirectory {
            path: input.to_path_buf(),
        });
    }

    let json_files: Vec<PathBuf> = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| has_json_extension(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    Ok(json_files)
}

/// 확장자가 정확히 `.json`인지 확인 (대소문자 구분)
fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "json")
        .unwrap_or(false)
}
