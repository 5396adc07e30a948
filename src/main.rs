//! pconvert - JSONL PREDICTIONS TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pconvert::{
    cli::Args, reader::read_predictions, stats::Statistics, writer::write_predictions,
};

fn main() -> Result<()> {
    let args = Args::parse();

    print_header(&args);

    let mut stats = Statistics::new();

    println!("\n{}", "📖 JSONL 파일 읽는 중...".bright_cyan());
    let predictions = read_predictions(&args.input_file, &mut stats)?;

    println!("\n{}", "💾 JSON 파일 저장 중...".bright_cyan());
    write_predictions(&predictions, &args.output_file, &mut stats)?;

    stats.print_summary();

    println!("\n{} 변환 완료\n", "✅".bright_green());

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 JSONL PREDICTIONS TO JSON CONVERTER"
            .bright_white()
            .bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 파일: {}",
        "📂".bright_cyan(),
        args.input_file.display()
    );
    println!(
        "  {} 출력 파일: {}",
        "📄".bright_green(),
        args.output_file.display()
    );
    println!("{}", "═".repeat(50).bright_blue());
}
