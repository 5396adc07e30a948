//! JSONL 예측 파일 읽기 모듈
//!
//! 입력 파일을 한 줄씩 스트리밍하며 필수 필드를 검증하고
//! `PredictionRecord`로 추출하는 작업을 담당합니다.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{PConvertError, Result};
use crate::stats::Statistics;

/// 출력 레코드가 반드시 포함해야 하는 필드 목록
pub const REQUIRED_FIELDS: [&str; 3] = ["instance_id", "model_patch", "model_name_or_path"];

/// 모델 예측 레코드
///
/// 입력 줄에서 세 필수 필드만 추출한 결과입니다. 값은 원본 JSON 값을
/// 그대로 보존하며, 직렬화 시 필드 선언 순서대로 출력됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// 태스크 인스턴스 고유 식별자
    pub instance_id: Value,
    /// 모델이 생성한 패치 내용
    pub model_patch: Value,
    /// 패치를 생성한 모델 식별자
    pub model_name_or_path: Value,
}

/// 한 줄 처리 결과
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    /// 필수 필드가 모두 존재하여 추출 성공
    Record(PredictionRecord),
    /// JSON 파싱 실패
    Invalid { reason: String },
    /// 필수 필드 누락 (누락된 필드 이름 목록)
    MissingFields(Vec<String>),
}

/// 한 줄을 파싱하여 레코드 추출을 시도
///
/// JSON 객체가 아닌 값(배열, 숫자 등)으로 파싱되는 줄은 키가 없으므로
/// 세 필드 모두 누락으로 처리됩니다.
pub fn parse_prediction_line(line: &str) -> LineOutcome {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            return LineOutcome::Invalid {
                reason: e.to_string(),
            }
        }
    };

    let empty = serde_json::Map::new();
    let map = value.as_object().unwrap_or(&empty);

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !map.contains_key(**field))
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return LineOutcome::MissingFields(missing);
    }

    LineOutcome::Record(PredictionRecord {
        instance_id: map["instance_id"].clone(),
        model_patch: map["model_patch"].clone(),
        model_name_or_path: map["model_name_or_path"].clone(),
    })
}

/// JSONL 파일에서 예측 레코드 읽기
///
/// # Arguments
/// * `path` - 입력 JSONL 파일 경로
/// * `stats` - 처리 통계 수집기
///
/// # Returns
/// 입력 순서가 보존된 `PredictionRecord` 벡터
///
/// 파싱 실패 또는 필드 누락 줄은 경고를 출력하고 건너뜁니다.
/// 입력 파일이 없거나 열 수 없는 경우에만 에러를 반환합니다.
pub fn read_predictions(path: &Path, stats: &mut Statistics) -> Result<Vec<PredictionRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PConvertError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => PConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let reader = BufReader::new(file);
    let pb = create_spinner();
    let mut predictions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|e| PConvertError::ReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        stats.record_line(line.len() as u64);
        pb.inc(1);

        match parse_prediction_line(&line) {
            LineOutcome::Record(record) => {
                stats.record_extracted();
                predictions.push(record);
            }
            LineOutcome::Invalid { reason } => {
                stats.record_parse_skip();
                println!(
                    "  {} {}번째 줄: JSON 파싱 실패 ({})",
                    "⚠️".bright_yellow(),
                    line_num,
                    reason.dimmed()
                );
            }
            LineOutcome::MissingFields(missing) => {
                stats.record_missing_skip();
                println!(
                    "  {} {}번째 줄: 필수 필드 누락 [{}]",
                    "⚠️".bright_yellow(),
                    line_num,
                    missing.join(", ").yellow()
                );
            }
        }
    }

    pb.finish_and_clear();

    Ok(predictions)
}

/// 진행 상황 스피너 생성
fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} 줄 처리 중...")
            .unwrap(),
    );
    pb
}
