//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// pconvert CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "pconvert",
    author = "YourName <your@email.com>",
    version,
    about = "JSONL PREDICTIONS TO JSON CONVERTER - JSONL 예측 파일을 단일 JSON 배열로 변환하는 CLI 도구",
    long_about = r#"
JSONL PREDICTIONS TO JSON CONVERTER
===================================

모델 예측 결과가 담긴 JSONL 파일을 읽어
instance_id, model_patch, model_name_or_path 세 필드만 추출한 뒤
하나의 JSON 배열 파일로 변환합니다.

특징:
  • 한 줄씩 스트리밍 처리로 대용량 파일에서도 메모리 효율적
  • 파싱 실패/필드 누락 줄은 경고 출력 후 건너뛰기 (변환은 계속)
  • 출력 경로의 상위 디렉토리 자동 생성
  • 2칸 들여쓰기 Pretty JSON 출력, 비ASCII 문자 그대로 유지
  • 처리 통계 요약 출력

예제:
  pconvert --input-file preds.jsonl --output-file out/preds.json
"#
)]
pub struct Args {
    /// 모델 예측이 담긴 입력 JSONL 파일 경로
    #[arg(long)]
    pub input_file: PathBuf,

    /// 변환 결과 JSON 파일이 저장될 경로
    #[arg(long)]
    pub output_file: PathBuf,
}
