//! 에러 타입 정의 모듈
//!
//! plscan에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// plscan에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum PlscanError {
    /// 대상 폴더가 존재하지 않음
    #[error("대상 경로를 찾을 수 없습니다: {path:?}")]
    PathNotFound { path: PathBuf },

    /// 대상 경로가 폴더가 아님
    #[error("대상 경로가 폴더가 아닙니다: {path:?}")]
    NotADirectory { path: PathBuf },

    /// 출력 폴더가 존재하지 않음
    #[error("출력 폴더를 찾을 수 없습니다: {path:?}")]
    OutputDirNotFound { path: PathBuf },

    /// 출력 경로가 폴더가 아님
    #[error("출력 경로가 폴더가 아닙니다: {path:?}")]
    OutputDirNotADirectory { path: PathBuf },

    /// 입력 파일 열기 실패 (파일 단위, 치명적이지 않음)
    #[error("파일을 열 수 없습니다 ({file:?}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 폴백 패턴 컴파일 실패
    #[error("유효하지 않은 폴백 패턴 ({field}): {reason}")]
    InvalidPattern { field: String, reason: String },

    /// 리포트 파일 쓰기 실패
    #[error("리포트 파일 쓰기 실패 ({path:?}): {reason}")]
    OutputWriteError { path: PathBuf, reason: String },
}

/// plscan 결과 타입 별칭
pub type Result<T> = std::result::Result<T, PlscanError>;
