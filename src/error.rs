//! 에러 타입 정의 모듈
//!
//! pconvert에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// pconvert에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum PConvertError {
    /// 입력 파일이 존재하지 않음
    #[error("입력 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력 파일 열기 실패 (존재하지만 열 수 없음)
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 입력 스트림 읽기 실패
    #[error("파일 읽기 실패 ({file}): {reason}")]
    ReadError { file: PathBuf, reason: String },

    /// 출력 디렉토리 생성 실패
    #[error("출력 디렉토리를 생성할 수 없습니다 ({path}): {reason}")]
    CreateDirError { path: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

/// pconvert 결과 타입 별칭
pub type Result<T> = std::result::Result<T, PConvertError>;
