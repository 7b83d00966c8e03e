use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use crate::error::{Error, Result};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::batch::{BatchJob, BatchSummary};
use crate::models::conversion::{ConversionOutcome, ConversionRequest, ConvertOptions, SingleJob};
use crate::service::convert::convert;
use crate::service::traits::i_service::{CodecServiceTrait, FileServiceTrait};
use crate::utils::utils::{normalize_format, replace_extension, unique_output_path, ProgressManager};

pub struct ConversionFacade {
    codec: Box<dyn CodecServiceTrait>,
    file_service: Box<dyn FileServiceTrait>,
    options: ConvertOptions,
}

impl ConversionFacade {
    pub fn new(
        codec: Box<dyn CodecServiceTrait>,
        file_service: Box<dyn FileServiceTrait>,
        options: ConvertOptions,
    ) -> Self {
        ConversionFacade {
            codec,
            file_service,
            options,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn single_convert(&self, job: SingleJob) -> Result<ConversionOutcome> {
        let output_format = job
            .output_format
            .as_deref()
            .map(normalize_format)
            .filter(|f| !f.is_empty());
        let output_path = match (job.output_file, output_format) {
            (Some(output_file), _) => output_file,
            (None, Some(format)) => replace_extension(&job.input_file, &format),
            (None, None) => {
                return Err(Error::usage("Either output format or output file must be specified."));
            }
        };

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                println!("Path: {} not found. Created new directory.", parent.display());
            }
        }
        let output_path = self.resolve_output(output_path);
        info!("開始單檔轉換，輸入檔案：{}，輸出檔案：{}", job.input_file.display(), output_path.display());

        let pm = ProgressManager::hidden();
        let request = ConversionRequest::new(job.input_file, output_path);
        let outcome = convert(self.codec.as_ref(), &request, &pm);
        info!("Took {:.3} seconds", pm.elapsed_secs());
        Ok(outcome)
    }

    fn batch_convert(&self, job: BatchJob) -> Result<BatchSummary> {
        let output_format = normalize_format(&job.output_format);
        if output_format.is_empty() {
            return Err(Error::usage("Output format must not be empty."));
        }
        if !job.output_directory.exists() {
            fs::create_dir_all(&job.output_directory)?;
            info!("建立輸出目錄：{}", job.output_directory.display());
        }
        info!(
            "開始批次轉換，輸入目錄：{}，輸出目錄：{}，輸出格式：{}，輸入格式過濾：{:?}",
            job.input_directory.display(),
            job.output_directory.display(),
            output_format,
            job.input_format_filter
        );

        let pm = ProgressManager::new(self.options.no_progress);
        let mut summary = BatchSummary::default();
        let mut visited = 0u64;

        for entry in self.file_service.walk(&job.input_directory, job.input_format_filter.as_ref()) {
            visited += 1;
            pm.update(visited, &entry.path);
            if !entry.is_eligible() {
                debug!("跳過檔案：{}（{:?}）", entry.path.display(), entry.decision);
                summary.skipped += 1;
                continue;
            }

            let output_path = flattened_output_path(&entry.path, &job.output_directory, &output_format)?;
            let request = ConversionRequest::new(entry.path, self.resolve_output(output_path));
            summary.outcomes.push(convert(self.codec.as_ref(), &request, &pm));
        }

        pm.finish(summary.converted(), summary.failed(), summary.skipped);
        if summary.outcomes.is_empty() {
            warn!("輸入目錄中沒有可轉換的檔案：{}", job.input_directory.display());
        }
        info!(
            "批次轉換完成，成功 {} 個，失敗 {} 個，跳過 {} 個",
            summary.converted(),
            summary.failed(),
            summary.skipped
        );
        info!("Took {:.3} seconds", pm.elapsed_secs());
        Ok(summary)
    }
}

impl ConversionFacade {
    fn resolve_output(&self, output_path: PathBuf) -> PathBuf {
        if !self.options.keep_existing {
            return output_path;
        }
        let resolved = unique_output_path(&output_path);
        if resolved != output_path {
            info!("輸出檔案已存在：{}，改寫入：{}", output_path.display(), resolved.display());
        }
        resolved
    }
}

/// `<output_directory>/<stem>.<format>`，不保留輸入的子目錄結構
pub fn flattened_output_path(input: &Path, output_directory: &Path, format: &str) -> io::Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("無法取得檔名：{}", input.display()),
        )
    })?;
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(format);
    Ok(output_directory.join(file_name))
}
