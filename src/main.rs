//! hangul-spacing - 한글 띄어쓰기 보정 도구

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use hangul_spacing::config::{config_path, load_config, save_config, SpacingConfig};
use hangul_spacing::fix_spacing;
use hangul_spacing::store::{fix_target, FixReport, TargetKind};

/// 대상 종류 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetArg {
    /// 확장자로 판단
    Auto,
    Fixed(TargetKind),
}

/// 명령행 옵션
struct Options {
    apply: bool,
    init_config: bool,
    target: TargetArg,
    paths: Vec<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage: hangul-spacing [--apply] [--target auto|wm|sqlite|text] [<path>...]");
    eprintln!("       hangul-spacing --init-config");
    eprintln!();
    eprintln!("경로가 없으면 표준 입력을 보정하여 표준 출력으로 씁니다.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --apply            변경 사항을 파일에 저장 (기본: 미리보기)");
    eprintln!("  --target <kind>    auto (.json -> wm, .db/.sqlite -> sqlite), wm, sqlite, text");
    eprintln!("  --init-config      설정 파일을 기본값으로 채워 저장");
    eprintln!("  -h, --help         도움말");
}

fn parse_target(value: &str) -> Option<TargetArg> {
    match value {
        "auto" => Some(TargetArg::Auto),
        "wm" => Some(TargetArg::Fixed(TargetKind::WorkingMemory)),
        "sqlite" => Some(TargetArg::Fixed(TargetKind::Sqlite)),
        "text" => Some(TargetArg::Fixed(TargetKind::PlainText)),
        _ => None,
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        apply: false,
        init_config: false,
        target: TargetArg::Auto,
        paths: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--apply" {
            options.apply = true;
        } else if arg == "--init-config" {
            options.init_config = true;
        } else if arg == "--target" && i + 1 < args.len() {
            options.target = parse_target(&args[i + 1])
                .ok_or_else(|| format!("알 수 없는 대상: {}", args[i + 1]))?;
            i += 1;
        } else if let Some(value) = arg.strip_prefix("--target=") {
            options.target =
                parse_target(value).ok_or_else(|| format!("알 수 없는 대상: {}", value))?;
        } else if arg.starts_with('-') {
            return Err(format!("알 수 없는 옵션: {}", arg));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
        i += 1;
    }

    Ok(options)
}

/// 표준 입력 -> 표준 출력 필터
fn run_filter() -> io::Result<()> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    let output = fix_spacing(&input);
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()
}

fn print_report(kind: TargetKind, report: &FixReport) {
    println!("  {}: {} total, {} to fix", kind.unit(), report.total, report.changed);
    for preview in &report.previews {
        println!("    - \"{}\"", preview.before);
        println!("    + \"{}\"", preview.after);
    }
    if report.hidden_changes() > 0 {
        println!("    ... and {} more", report.hidden_changes());
    }
}

/// 파일 대상 보정, 실패한 대상 수 반환
fn run_targets(options: &Options, config: &SpacingConfig) -> usize {
    let mode = if options.apply { "APPLY" } else { "DRY-RUN" };
    println!("=== Korean Spacing Fix ({}) ===", mode);
    println!();

    let mut summary = FixReport::default();
    let mut failures = 0;

    for path in &options.paths {
        let kind = match options.target {
            TargetArg::Auto => TargetKind::from_path(path),
            TargetArg::Fixed(kind) => kind,
        };
        println!("[{}]", path.display());
        match fix_target(kind, path, config, options.apply) {
            Ok(report) => {
                print_report(kind, &report);
                summary.merge(&report);
            }
            Err(e) => {
                log::error!("{} 보정 실패: {}", path.display(), e);
                failures += 1;
            }
        }
        println!();
    }

    let verb = if options.apply { "fixed" } else { "would be fixed" };
    println!(
        "=== Summary: {}/{} documents {} ===",
        summary.changed, summary.total, verb
    );
    if !options.apply && summary.changed > 0 {
        println!("Run with --apply to apply changes.");
    }

    failures
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            print_usage();
            process::exit(1);
        }
    };

    if options.init_config {
        // 기존 값은 유지하고 빠진 필드만 기본값으로 채움
        if let Err(e) = save_config(&load_config()) {
            log::error!("{}", e);
            process::exit(1);
        }
        println!("설정 저장: {}", config_path().display());
        return;
    }

    if options.paths.is_empty() {
        if let Err(e) = run_filter() {
            log::error!("표준 입출력 실패: {}", e);
            process::exit(1);
        }
        return;
    }

    let config = load_config();
    if run_targets(&options, &config) > 0 {
        process::exit(1);
    }
}
