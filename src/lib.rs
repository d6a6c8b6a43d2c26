//! plscan - PLAYLIST JSON SCANNER
//!
//! 폴더 내 플레이리스트 JSON 파일들에서 공유 코드를 추출해
//! 사람이 읽을 수 있는 리포트를 생성하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **이중 추출 전략**: 구조적 JSON 파싱 후 빈 필드를 텍스트 패턴 폴백으로 보충
//! - 🔁 **중복 감지**: 공유 코드와 플레이리스트 이름의 중복을 각각 추적
//! - 📊 **실행 통계**: 전체/성공/실패 파일 수와 중복 수 표시
//! - 👤 **작성자/설명 모드**: authorName, authorSteamId, description 선택 추출
//! - 📝 **리포트 파일**: 성공 레코드를 블록 단위 텍스트로 기록
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! plscan -i ./playlists
//!
//! # 작성자 / 설명 필드 포함
//! plscan -i ./playlists -a -d
//!
//! # 리포트 위치와 이름 지정
//! plscan -i ./playlists -o ./reports -f codes.txt
//! ```

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod reporter;
pub mod scanner;

// Re-exports for convenient access
pub use aggregator::{Aggregator, IngestOutcome, RunStats};
pub use cli::Args;
pub use error::{PlscanError, Result};
pub use extractor::{extract_file, ExtractOptions, ExtractResult, Record, FIELD_KEYS};
pub use fallback::FallbackMatcher;
pub use reporter::{format_block, resolve_output_path, write_report};
pub use scanner::collect_json_files;
