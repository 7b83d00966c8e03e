use crate::error::Result;
use crate::models::batch::{BatchJob, BatchSummary};
use crate::models::conversion::{ConversionOutcome, SingleJob};

// Facade 接口，負責協調單檔與批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 轉換單一檔案
    /// # 參數
    /// - job: 輸入檔案，以及輸出檔案或輸出格式（至少其一）
    /// # 回傳
    /// - 轉換結果；兩者皆缺時返回 Usage 錯誤且不寫入任何檔案
    fn single_convert(&self, job: SingleJob) -> Result<ConversionOutcome>;

    /// 將目錄樹中所有可轉換的圖片轉到單一輸出目錄
    /// # 參數
    /// - job: 輸入與輸出目錄、輸出格式與選用的輸入格式過濾
    /// # 回傳
    /// - 每個檔案的結果與跳過數；建立輸出目錄失敗時返回 IO 錯誤
    fn batch_convert(&self, job: BatchJob) -> Result<BatchSummary>;
}
