//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 변환 통계 구조체
///
/// 전체 처리가 단일 스레드 순차 실행이므로 일반 카운터로 충분합니다.
#[derive(Debug)]
pub struct Statistics {
    /// 입력 파일의 전체 줄 수
    pub total_lines: usize,
    /// 추출 성공한 레코드 수
    pub extracted: usize,
    /// JSON 파싱 실패로 건너뛴 줄 수
    pub skipped_parse: usize,
    /// 필수 필드 누락으로 건너뛴 줄 수
    pub skipped_missing: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 처리 시작 시간
    start_time: Instant,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            extracted: 0,
            skipped_parse: 0,
            skipped_missing: 0,
            bytes_read: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    /// 읽은 줄 기록 (줄 내용 + 개행 문자 바이트)
    pub fn record_line(&mut self, line_bytes: u64) {
        self.total_lines += 1;
        self.bytes_read += line_bytes + 1; // +1 for newline
    }

    /// 추출 성공 기록
    pub fn record_extracted(&mut self) {
        self.extracted += 1;
    }

    /// 파싱 실패 스킵 기록
    pub fn record_parse_skip(&mut self) {
        self.skipped_parse += 1;
    }

    /// 필드 누락 스킵 기록
    pub fn record_missing_skip(&mut self) {
        self.skipped_missing += 1;
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
    }

    /// 건너뛴 전체 줄 수
    pub fn total_skipped(&self) -> usize {
        self.skipped_parse + self.skipped_missing
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 줄 수:   {}",
            "📄".bright_cyan(),
            self.total_lines
        );
        println!(
            "  {} 추출 성공:    {}",
            "✅".bright_green(),
            self.extracted.to_string().green()
        );

        if self.total_skipped() > 0 {
            println!(
                "  {} 건너뜀:       {} (파싱 실패 {}, 필드 누락 {})",
                "⚠️".bright_yellow(),
                self.total_skipped().to_string().yellow(),
                self.skipped_parse,
                self.skipped_missing
            );
        } else {
            println!("  {} 건너뜀:       {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );

        if self.total_lines > 0 {
            let extract_rate = (self.extracted as f64 / self.total_lines as f64) * 100.0;
            println!(
                "  {} 추출률:       {:.1}%",
                "📈".bright_white(),
                extract_rate
            );
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use pconvert::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
