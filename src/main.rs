//! plscan - PLAYLIST JSON SCANNER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use plscan::{
    aggregator::Aggregator,
    cli::Args,
    extractor::{extract_file, print_file_fields, ExtractOptions, FIELD_KEYS},
    fallback::FallbackMatcher,
    reporter, scanner,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 출력 폴더 유효성 검사 (스캔 시작 전, 실패 시 치명적)
    if let Some(ref dir) = args.output_dir {
        reporter::validate_output_dir(dir)?;
    }

    // 헤더 출력
    print_header(&args);

    // 추출 옵션 및 폴백 매처 초기화
    let options = ExtractOptions::new()
        .with_author(args.author)
        .with_description(args.description);
    let matcher = FallbackMatcher::new(&FIELD_KEYS)?;

    // JSON 파일 수집
    let json_files = scanner::collect_json_files(&args.input)?;

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        json_files.len().to_string().bright_green()
    );

    let no_files = json_files.is_empty();

    // 순차 처리: 추출 → 진단 출력 → 집계 → 중복 경고
    let mut aggregator = Aggregator::new();

    if !no_files {
        println!("\n{}", "🔍 파일 처리 중...".bright_cyan());
    }

    for path in json_files {
        let result = extract_file(path, &matcher, &options);
        print_file_fields(&result, &options, args.verbose);

        let outcome = aggregator.ingest(&result.record);

        if outcome.duplicate_share_code {
            println!(
                "  {} 중복된 공유 코드: {}",
                "⚠️".bright_yellow(),
                result.record.share_code.yellow()
            );
        }
        if outcome.duplicate_name {
            println!(
                "  {} 중복된 플레이리스트 이름: {}",
                "⚠️".bright_yellow(),
                result.record.playlist_name.yellow()
            );
        }
    }

    // 통계 출력 (리포트 작성 전)
    if !args.quiet {
        aggregator.print_summary();
    }

    // 리포트 작성
    if no_files {
        println!("\n{}\n", "⚠️ 처리할 JSON 파일이 없습니다.".yellow());
        return Ok(());
    }

    if aggregator.records().is_empty() {
        println!(
            "\n{}\n",
            "⚠️ 유효한 결과가 없어 리포트를 생성하지 않습니다.".yellow()
        );
        return Ok(());
    }

    let output_path =
        reporter::resolve_output_path(&args.input, args.output_dir.as_deref(), &args.filename);

    // 쓰기 실패는 보고만 하고 종료 코드는 0 유지 (스캔 자체는 성공)
    match reporter::write_report(&output_path, aggregator.records(), &options) {
        Ok(()) => println!("\n{} 리포트 저장 완료: {:?}\n", "✅".bright_green(), output_path),
        Err(e) => eprintln!("\n{} {}\n", "❌".bright_red(), e.to_string().red()),
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🎵 PLAYLIST JSON SCANNER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 대상 폴더: {:?}", "📂".bright_cyan(), args.input);

    if let Some(ref dir) = args.output_dir {
        println!("  {} 출력 폴더: {:?}", "📄".bright_green(), dir);
    }
    println!("  {} 리포트 파일: {}", "📄".bright_green(), args.filename);

    if args.author {
        println!("  {} {}", "👤".bright_cyan(), "작성자 필드 추출 활성화".cyan());
    }
    if args.description {
        println!("  {} {}", "📝".bright_cyan(), "설명 필드 추출 활성화".cyan());
    }
    if args.quiet {
        println!("  {} {}", "🔇".bright_yellow(), "통계 출력 생략".yellow());
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}
