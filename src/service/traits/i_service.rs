use std::collections::HashSet;
use std::path::Path;
use crate::error::Result;
use crate::service::file::WalkEntry;

// Codec 服務接口，負責實際的解碼與編碼
pub trait CodecServiceTrait: Send + Sync {
    /// 讀取輸入圖片並以輸出副檔名推斷的格式寫出
    /// # 參數
    /// - input: 來源圖片路徑
    /// - output: 目標路徑，格式由副檔名決定
    /// # 回傳
    /// - 失敗時返回解碼、編碼或 IO 錯誤
    fn transcode(&self, input: &Path, output: &Path) -> Result<()>;
}

// File 服務接口，負責走訪輸入目錄
pub trait FileServiceTrait: Send + Sync {
    /// 遞迴走訪目錄，逐一產生檔案及其是否可轉換的判定
    /// # 參數
    /// - root: 輸入目錄
    /// - filter: 選用的輸入格式過濾（小寫、不含 `.`）
    /// # 回傳
    /// - 惰性、有限且不可重來的序列
    fn walk<'a>(
        &'a self,
        root: &Path,
        filter: Option<&'a HashSet<String>>,
    ) -> Box<dyn Iterator<Item = WalkEntry> + 'a>;
}
