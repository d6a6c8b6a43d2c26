//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// plscan CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "plscan",
    author = "YourName <your@email.com>",
    version,
    about = "PLAYLIST JSON SCANNER - 폴더 내 플레이리스트 JSON에서 공유 코드를 추출해 리포트를 생성하는 CLI 도구",
    long_about = r#"
PLAYLIST JSON SCANNER
=====================

지정된 폴더 바로 아래의 .json 파일들을 읽어
playlistName / shareCode (옵션으로 작성자, 설명) 필드를 추출하고
중복 여부를 집계한 뒤 사람이 읽을 수 있는 리포트 파일을 생성합니다.

특징:
  • 구조적 JSON 파싱 + 텍스트 패턴 폴백의 이중 추출 전략
  • 공유 코드 / 플레이리스트 이름 중복 감지
  • 파일별 진단 출력 및 실행 통계
  • 리포트 저장 위치와 파일 이름 지정 가능

예제:
  plscan -i ./playlists
  plscan -i ./playlists -a -d
  plscan -i ./playlists -o ./reports -f codes.txt
  plscan -i ./playlists --quiet
"#
)]
pub struct Args {
    /// 스캔할 대상 폴더 경로
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// 리포트를 저장할 폴더 (기본값: 대상 폴더의 상위 폴더)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 리포트 파일 이름
    #[arg(short, long, default_value = "results.txt")]
    pub filename: String,

    /// 작성자 필드(authorName, authorSteamId) 추출 활성화
    #[arg(short, long)]
    pub author: bool,

    /// 설명 필드(description) 추출 활성화
    #[arg(short, long)]
    pub description: bool,

    /// 실행 통계 출력 생략 (파일별 진단은 계속 출력됨)
    #[arg(short, long)]
    pub quiet: bool,

    /// 상세 출력 모드 (파일별 실패 사유 표시)
    #[arg(short, long)]
    pub verbose: bool,
}
