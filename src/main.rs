use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use feedback_survey::infrastructure::PageAddress;
use feedback_survey::models::ExportFormat;
use feedback_survey::ui::TerminalUi;
use feedback_survey::utils::logging;
use feedback_survey::{Config, SurveyRunner};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// 终端反馈问卷
#[derive(Parser)]
#[command(name = "feedback_survey", version, about = "终端反馈问卷客户端")]
struct Cli {
    /// TOML 配置文件
    #[arg(long, env = "SURVEY_CONFIG")]
    config: Option<PathBuf>,

    /// 页面地址，带 session_id 时恢复该会话
    #[arg(long)]
    address: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 作答问卷（默认）
    Run,
    /// 通知服务端会话结束（会话ID取自地址）
    End,
    /// 下载导出数据
    Export {
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::from_env()?,
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    let address = cli.address.as_deref().unwrap_or(&config.page_url);
    let address = PageAddress::parse(address).context("页面地址无效")?;

    let mut runner = SurveyRunner::initialize(config, address)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let stdin = io::stdin();
            let mut ui = TerminalUi::new(stdin.lock(), io::stdout());
            let summary = runner.run(&mut ui).await?;
            info!("🔗 会话链接: {}", summary.address);
        }
        Command::End => runner.end_session().await?,
        Command::Export { format, output } => {
            let report = runner.export(format.into(), &output).await?;
            if let Some(rows) = report.rows {
                info!("共导出 {} 条记录", rows);
            }
        }
    }

    Ok(())
}
