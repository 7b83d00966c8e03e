use std::collections::HashSet;
use clap::Parser;
use crate::config::config::{normalize_flag_aliases, Cli, Command};
use crate::config::ports::{AppConfig, ConfigPort, Task};
use crate::error::Result;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::batch::BatchJob;
use crate::models::conversion::{ConvertOptions, SingleJob};
use crate::service::codec::ImageCodec;
use crate::service::file::FileService;
use crate::utils::utils::{parse_format_list, setup_logging};

pub fn process_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(normalize_flag_aliases(args));
    setup_logging(&cli.log_level)?;

    let config = CliConfigAdapter::new(cli).get_config()?;
    log::debug!("實際使用的配置：{:?}", config);

    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
        Box::new(ImageCodec::new()),
        Box::new(FileService::new()),
        config.options,
    ));
    run(facade.as_ref(), config.task)
}

/// 依子命令呼叫對應的轉換流程；個別檔案的失敗已在結果中回報，不會讓此處失敗
pub fn run(facade: &dyn ConversionFacadeTrait, task: Task) -> Result<()> {
    match task {
        Task::Single(job) => {
            facade.single_convert(job)?;
        }
        Task::Batch(job) => {
            facade.batch_convert(job)?;
        }
    }
    Ok(())
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let task = match &self.cli.command {
            Command::Single(args) => Task::Single(SingleJob {
                input_file: args.input_file.clone(),
                output_file: args.output_file.clone(),
                output_format: args.output_format.clone(),
            }),
            Command::Batch(args) => {
                let input_format_filter = args
                    .input_format
                    .as_deref()
                    .map(parse_format_list)
                    .filter(|formats| !formats.is_empty())
                    .map(|formats| formats.into_iter().collect::<HashSet<_>>());
                Task::Batch(BatchJob {
                    input_directory: args.input_directory.clone(),
                    output_directory: args.output_directory.clone(),
                    output_format: args.output_format.clone(),
                    input_format_filter,
                })
            }
        };

        Ok(AppConfig {
            task,
            options: ConvertOptions {
                keep_existing: self.cli.keep_existing,
                no_progress: self.cli.no_progress,
            },
            log_level: self.cli.log_level.clone(),
        })
    }
}
