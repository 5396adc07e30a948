//! pconvert - JSONL PREDICTIONS TO JSON CONVERTER
//!
//! 모델 예측 결과가 담긴 JSONL 파일을 단일 JSON 배열 파일로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📄 **스트리밍 읽기**: 한 줄씩 처리하여 대용량 파일에서도 메모리 효율적
//! - 🎯 **필드 추출**: instance_id, model_patch, model_name_or_path 세 필드만 추출
//! - ⚠️ **줄 단위 복구**: 파싱 실패/필드 누락 줄은 경고 후 건너뛰고 변환 계속
//! - 📂 **디렉토리 생성**: 출력 경로의 상위 디렉토리 자동 생성
//! - ✨ **Pretty 출력**: 2칸 들여쓰기, 비ASCII 문자 그대로 유지
//! - 📊 **상세 통계**: 줄 수, 추출/건너뜀 수, 입출력 용량, 처리 시간 표시
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! pconvert --input-file preds.jsonl --output-file out/preds.json
//! ```

pub mod cli;
pub mod error;
pub mod reader;
pub mod stats;
pub mod writer;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{PConvertError, Result};
pub use reader::{parse_prediction_line, read_predictions, LineOutcome, PredictionRecord};
pub use stats::{format_bytes, Statistics};
pub use writer::write_predictions;
