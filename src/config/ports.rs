use crate::error::Result;
use crate::models::batch::BatchJob;
use crate::models::conversion::{ConvertOptions, SingleJob};

#[derive(Debug, Clone)]
pub enum Task {
    Single(SingleJob),
    Batch(BatchJob),
}

// 應用配置結構體，封裝一次執行所需的全部參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub task: Task,
    pub options: ConvertOptions,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
