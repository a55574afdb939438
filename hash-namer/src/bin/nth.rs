//! `nth` 命令行入口：解析参数、读取输入、渲染识别结果。
//!
//! 识别逻辑全部在库里；这里只做参数解析、文件按行切分、
//! 日志初始化与最终打印。

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use hash_namer::{AppConfig, HashNamer, Prettifier};
use std::path::PathBuf;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

struct SimpleStderrLogger;

impl log::Log for SimpleStderrLogger {
    fn enabled(
        &self,
        metadata: &log::Metadata<'_>,
    ) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(
        &self,
        record: &log::Record<'_>,
    ) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: SimpleStderrLogger = SimpleStderrLogger;

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    LOGGER_INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
    });
    log::set_max_level(level);
}

const BANNER: &str = r"
 _   _           _
| | | | __ _ ___| |__        _ __   __ _ _ __ ___   ___ _ __
| |_| |/ _` / __| '_ \ _____| '_ \ / _` | '_ ` _ \ / _ \ '__|
|  _  | (_| \__ \ | | |_____| | | | (_| | | | | | |  __/ |
|_| |_|\__,_|___/_| |_|     |_| |_|\__,_|_| |_| |_|\___|_|
";

/// 识别哈希字符串的可能格式，常见格式优先展示。
#[derive(Parser, Debug)]
#[command(name = "nth", version, about = "识别哈希字符串的可能格式，常见格式优先展示")]
struct Cli {
    /// 识别单个哈希
    #[arg(short, long)]
    text: Option<String>,

    /// 按行读取哈希文件（每行一个哈希）
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 输出 JSON（适合 grep / 管道处理）
    #[arg(short, long)]
    greppable: bool,

    /// 无障碍模式：不打印 ASCII art 与大段「不太可能」列表
    #[arg(short, long)]
    accessible: bool,

    /// 不打印启动 banner
    #[arg(long)]
    no_banner: bool,

    /// 不输出 John the Ripper 信息
    #[arg(long)]
    no_john: bool,

    /// 不输出 hashcat 信息
    #[arg(long)]
    no_hashcat: bool,

    /// 配置文件路径（缺省时使用 XDG 默认路径）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 调试日志，-vvv 最详细
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    // 不带任何参数时打印帮助并正常退出
    if std::env::args().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    init_logger(cli.verbose);
    log::debug!("{cli:?}");

    if !cli.accessible && !cli.no_banner && !cli.greppable {
        println!("{BANNER}");
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref());
    if cli.no_john {
        config.output.john = false;
    }
    if cli.no_hashcat {
        config.output.hashcat = false;
    }

    let namer = HashNamer::with_config(&config)?;
    let prettifier = Prettifier::new(&config.output, cli.accessible, namer.popular().clone());

    let reports = if let Some(text) = &cli.text {
        vec![namer.report(text)]
    } else if let Some(path) = &cli.file {
        let raw = std::fs::read(path)
            .with_context(|| format!("读取哈希文件失败: {}", path.display()))?;
        let mut lines: Vec<&[u8]> = raw
            .split(|b| *b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .collect();
        // 只丢掉文件末尾换行产生的空行，保留行间的空行
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        namer.identify_batch_bytes(&lines)
    } else {
        bail!("需要 --text 或 --file 之一");
    };

    if cli.greppable {
        println!("{}", prettifier.greppable(&reports)?);
    } else {
        print!("{}", prettifier.pretty(&reports));
    }

    Ok(())
}
