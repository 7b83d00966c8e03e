use std::path::PathBuf;

/// 單檔轉換的未解析參數
#[derive(Clone, Debug)]
pub struct SingleJob {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub output_format: Option<String>,
}

/// 一次轉換呼叫：輸入與已解析的輸出路徑
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        ConversionRequest {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionStatus {
    Converted,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ConversionOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub status: ConversionStatus,
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        self.status == ConversionStatus::Converted
    }
}

/// 整次執行共用的開關
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOptions {
    pub keep_existing: bool,
    pub no_progress: bool,
}
