//! JSON 배열 쓰기 모듈
//!
//! 추출된 예측 레코드를 하나의 JSON 배열 파일로 저장하는 작업을 담당합니다.

use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::error::{PConvertError, Result};
use crate::reader::PredictionRecord;
use crate::stats::Statistics;

/// 예측 레코드를 JSON 배열 파일로 저장
///
/// # Arguments
/// * `predictions` - 저장할 레코드 목록 (입력 순서 유지)
/// * `path` - 출력 파일 경로
/// * `stats` - 처리 통계 수집기
///
/// 출력 경로의 상위 디렉토리가 없으면 생성하고, 기존 파일은 덮어씁니다.
/// 출력은 2칸 들여쓰기 Pretty 형식이며 비ASCII 문자는 그대로 유지됩니다.
pub fn write_predictions(
    predictions: &[PredictionRecord],
    path: &Path,
    stats: &mut Statistics,
) -> Result<()> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(predictions).map_err(|e| {
        PConvertError::SerializeError {
            reason: e.to_string(),
        }
    })?;

    fs::write(path, &json).map_err(|e| PConvertError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    stats.add_bytes_written(json.len() as u64);

    println!(
        "\n{} {}개의 예측 저장 완료: {}",
        "✅".bright_green(),
        predictions.len().to_string().bright_green(),
        path.display()
    );

    Ok(())
}

/// 출력 경로의 상위 디렉토리 생성 (이미 있으면 무시)
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PConvertError::CreateDirError {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(id: &str) -> PredictionRecord {
        PredictionRecord {
            instance_id: json!(id),
            model_patch: json!("diff --git a b"),
            model_name_or_path: json!("modelX"),
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("deep").join("out.json");

        let mut stats = Statistics::new();
        write_predictions(&[record("a-1")], &out, &mut stats).unwrap();

        assert!(out.exists());
    }

    #[test]
    fn test_write_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("empty.json");

        let mut stats = Statistics::new();
        write_predictions(&[], &out, &mut stats).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "[]");
        assert_eq!(stats.bytes_written, 2);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.json");
        fs::write(&out, "이전 내용").unwrap();

        let mut stats = Statistics::new();
        write_predictions(&[record("a-1")], &out, &mut stats).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(!content.contains("이전 내용"));
        assert!(content.contains("a-1"));
    }

    #[test]
    fn test_write_pretty_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out.json");

        let mut stats = Statistics::new();
        write_predictions(&[record("a-1")], &out, &mut stats).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("[\n  {\n    \"instance_id\""));
    }

    #[test]
    fn test_write_relative_path_without_parent() {
        // 상위 디렉토리가 없는 경로도 에러 없이 처리되어야 함
        let temp_dir = TempDir::new().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let mut stats = Statistics::new();
        let result = write_predictions(&[record("a-1")], Path::new("out.json"), &mut stats);

        std::env::set_current_dir(prev).unwrap();
        result.unwrap();
    }
}
