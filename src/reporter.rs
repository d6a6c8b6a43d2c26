//! 리포트 작성 모듈
//!
//! 성공 레코드들을 사람이 읽을 수 있는 텍스트 블록으로
//! 리포트 파일에 기록합니다.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PlscanError, Result};
use crate::extractor::{ExtractOptions, Record};

/// 필드가 비어 있을 때 기록하는 표기
const NOT_FOUND: &str = "(not found)";

/// 리포트 파일 경로 결정
///
/// 출력 폴더가 지정되면 그 아래에, 아니면 스캔한 폴더의
/// 상위 폴더에 파일 이름을 붙여 반환합니다.
pub fn resolve_output_path(input: &Path, output_dir: Option<&Path>, filename: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(filename),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
            .join(filename),
    }
}

/// 출력 폴더 유효성 검사 (스캔 시작 전에 호출)
///
/// # Errors
/// * `OutputDirNotFound` - 출력 폴더가 존재하지 않음
/// * `OutputDirNotADirectory` - 출력 경로가 폴더가 아님
pub fn validate_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(PlscanError::OutputDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    if !dir.is_dir() {
        return Err(PlscanError::OutputDirNotADirectory {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}

/// 레코드 하나를 리포트 블록 문자열로 변환
///
/// 형식:
/// ```text
/// Playlist Name: <값 또는 (not found)>
/// Share Code: <값 또는 (not found)>
/// Author: <이름> SID: <ID>     (작성자 모드 + 두 값 모두 존재 시)
/// Description: <값>            (설명 모드 + 값 존재 시)
/// ```
/// 값에 이스케이프를 적용하지 않으므로 라벨 문자열을 포함한 값은
/// 왕복 복원이 깨질 수 있습니다 (알려진 제한 사항).
pub fn format_block(record: &Record, options: &ExtractOptions) -> String {
    let mut block = String::new();

    block.push_str("Playlist Name: ");
    block.push_str(label_or_not_found(&record.playlist_name));
    block.push('\n');

    block.push_str("Share Code: ");
    block.push_str(label_or_not_found(&record.share_code));
    block.push('\n');

    if options.author && !record.author_name.is_empty() && !record.author_steam_id.is_empty() {
        block.push_str("Author: ");
        block.push_str(&record.author_name);
        block.push_str(" SID: ");
        block.push_str(&record.author_steam_id);
        block.push('\n');
    }

    if options.description && !record.description.is_empty() {
        block.push_str("Description: ");
        block.push_str(&record.description);
        block.push('\n');
    }

    block.push('\n');
    block
}

fn label_or_not_found(value: &str) -> &str {
    if value.is_empty() {
        NOT_FOUND
    } else {
        value
    }
}

/// 성공 레코드들을 리포트 파일에 기록
///
/// 레코드 블록을 집계 순서 그대로 기록합니다. 호출 전에 레코드가
/// 하나 이상 있는지 확인하는 것은 호출자의 책임입니다.
///
/// # Errors
/// * `OutputWriteError` - 파일을 열거나 쓸 수 없음
pub fn write_report(path: &Path, records: &[Record], options: &ExtractOptions) -> Result<()> {
    let file = File::create(path).map_err(|e| PlscanError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut writer = BufWriter::new(file);

    for record in records {
        writer
            .write_all(format_block(record, options).as_bytes())
            .map_err(|e| PlscanError::OutputWriteError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
    }

    writer.flush().map_err(|e| PlscanError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, code: &str) -> Record {
        Record {
            playlist_name: name.to_string(),
            share_code: code.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_block_basic() {
        let block = format_block(&record("Foo", "ABC"), &ExtractOptions::new());

        assert_eq!(block, "Playlist Name: Foo\nShare Code: ABC\n\n");
    }

    #[test]
    fn test_format_block_not_found_marker() {
        let block = format_block(&record("", "ABC"), &ExtractOptions::new());

        assert_eq!(block, "Playlist Name: (not found)\nShare Code: ABC\n\n");
    }

    #[test]
    fn test_format_block_author_requires_both_values() {
        let mut rec = record("Foo", "ABC");
        rec.author_name = "Kim".to_string();
        let options = ExtractOptions::new().with_author(true);

        // authorSteamId가 비어 있으면 Author 줄 생략
        let block = format_block(&rec, &options);
        assert!(!block.contains("Author:"));

        rec.author_steam_id = "76561198000000000".to_string();
        let block = format_block(&rec, &options);
        assert!(block.contains("Author: Kim SID: 76561198000000000\n"));
    }

    #[test]
    fn test_format_block_author_hidden_when_mode_off() {
        let mut rec = record("Foo", "ABC");
        rec.author_name = "Kim".to_string();
        rec.author_steam_id = "765".to_string();

        let block = format_block(&rec, &ExtractOptions::new());

        assert!(!block.contains("Author:"));
    }

    #[test]
    fn test_format_block_description() {
        let mut rec = record("Foo", "ABC");
        rec.description = "nice maps".to_string();

        let without = format_block(&rec, &ExtractOptions::new());
        assert!(!without.contains("Description:"));

        let with = format_block(&rec, &ExtractOptions::new().with_description(true));
        assert!(with.contains("Description: nice maps\n"));

        rec.description = String::new();
        let empty = format_block(&rec, &ExtractOptions::new().with_description(true));
        assert!(!empty.contains("Description:"));
    }

    #[test]
    fn test_resolve_output_path_with_override() {
        let path = resolve_output_path(
            Path::new("/data/playlists"),
            Some(Path::new("/reports")),
            "results.txt",
        );

        assert_eq!(path, PathBuf::from("/reports/results.txt"));
    }

    #[test]
    fn test_resolve_output_path_defaults_to_parent() {
        let path = resolve_output_path(Path::new("/data/playlists"), None, "results.txt");

        assert_eq!(path, PathBuf::from("/data/results.txt"));
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();

        assert!(validate_output_dir(temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            validate_output_dir(&missing),
            Err(PlscanError::OutputDirNotFound { .. })
        ));

        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "x").unwrap();
        assert!(matches!(
            validate_output_dir(&file_path),
            Err(PlscanError::OutputDirNotADirectory { .. })
        ));
    }

    #[test]
    fn test_write_report_blocks_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.txt");
        let records = vec![record("Foo", "ABC"), record("Bar", "DEF")];

        write_report(&path, &records, &ExtractOptions::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Playlist Name: Foo\nShare Code: ABC\n\nPlaylist Name: Bar\nShare Code: DEF\n\n"
        );
    }

    #[test]
    fn test_write_report_unwritable_destination() {
        let result = write_report(
            Path::new("/nonexistent/dir/results.txt"),
            &[record("Foo", "ABC")],
            &ExtractOptions::new(),
        );

        assert!(matches!(
            result,
            Err(PlscanError::OutputWriteError { .. })
        ));
    }
}
