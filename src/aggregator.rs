//! 집계 모듈
//!
//! 파일별 추출 레코드를 순서대로 받아 성공/실패를 집계하고
//! 공유 코드와 플레이리스트 이름의 중복을 추적합니다.

use colored::Colorize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::extractor::Record;

/// 실행 통계 카운터
///
/// 집계 중 단조 증가만 하며 감소하지 않습니다.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// 파이프라인에 들어온 전체 파일 수
    pub files_seen: usize,
    /// 파싱 성공 수 (playlistName, shareCode 모두 존재)
    pub successful_parses: usize,
    /// 파싱 실패 수
    pub failed_parses: usize,
    /// 중복 공유 코드 발생 수 (첫 등장 이후 매 등장마다 1)
    pub duplicate_share_codes: usize,
    /// 중복 플레이리스트 이름 발생 수
    pub duplicate_names: usize,
}

/// 레코드 하나를 집계한 결과
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// 성공 레코드로 받아들여져 결과 목록에 추가되었는지
    pub accepted: bool,
    /// 이미 본 공유 코드였는지
    pub duplicate_share_code: bool,
    /// 이미 본 플레이리스트 이름이었는지
    pub duplicate_name: bool,
}

/// 레코드 집계기
///
/// 실행 하나의 수명 동안만 유지되는 두 개의 seen-set과
/// 성공 레코드의 순서 보존 목록을 소유합니다.
#[derive(Debug, Default)]
pub struct Aggregator {
    stats: RunStats,
    seen_share_codes: HashSet<String>,
    seen_names: HashSet<String>,
    records: Vec<Record>,
    start_time: Option<Instant>,
}

impl Aggregator {
    /// 새 집계기 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 레코드 하나 집계
    ///
    /// 성공 레코드는 공유 코드와 이름의 중복을 독립적으로 검사한 뒤
    /// 결과 목록에 추가됩니다. 실패 레코드는 카운트만 하고
    /// 중복 추적에 영향을 주지 않습니다. 이 단계는 실패할 수 없습니다.
    pub fn ingest(&mut self, record: &Record) -> IngestOutcome {
        self.stats.files_seen += 1;

        if !record.is_successful() {
            self.stats.failed_parses += 1;
            return IngestOutcome::default();
        }

        self.stats.successful_parses += 1;

        // 첫 등장은 중복이 아님, 이후 매 등장마다 중복 1회
        let duplicate_share_code = !self.seen_share_codes.insert(record.share_code.clone());
        if duplicate_share_code {
            self.stats.duplicate_share_codes += 1;
        }

        let duplicate_name = !self.seen_names.insert(record.playlist_name.clone());
        if duplicate_name {
            self.stats.duplicate_names += 1;
        }

        self.records.push(record.clone());

        IngestOutcome {
            accepted: true,
            duplicate_share_code,
            duplicate_name,
        }
    }

    /// 집계된 통계 반환
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// 성공 레코드 목록 반환 (집계 순서 유지)
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 통계 요약 출력
    pub fn print_summary(&self) {
        let stats = &self.stats;

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 스캔 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 전체 파일:       {}", "📁".bright_cyan(), stats.files_seen);
        println!(
            "  {} 파싱 성공:       {}",
            "✅".bright_green(),
            stats.successful_parses.to_string().green()
        );

        if stats.failed_parses > 0 {
            println!(
                "  {} 파싱 실패:       {}",
                "❌".bright_red(),
                stats.failed_parses.to_string().red()
            );
        } else {
            println!("  {} 파싱 실패:       {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 중복 공유 코드:  {}",
            "🔁".bright_yellow(),
            stats.duplicate_share_codes
        );
        println!(
            "  {} 중복 이름:       {}",
            "🔁".bright_yellow(),
            stats.duplicate_names
        );
        println!(
            "  {} 처리 시간:       {:.2}초",
            "⏱️".bright_cyan(),
            self.elapsed().as_secs_f64()
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}
