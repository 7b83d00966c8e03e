use std::collections::HashSet;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use walkdir::WalkDir;
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::lowercase_extension;

/// 批次模式可接受的輸入副檔名；輸出格式不受此限制
pub const SUPPORTED_EXTENSIONS: [&str; 11] = [
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp", "heif", "pdf", "eps", "raw",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileDecision {
    Eligible,
    NoExtension,
    /// 不在 `--input_format` 清單內
    Filtered,
    Unsupported,
}

#[derive(Clone, Debug)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub decision: FileDecision,
}

impl WalkEntry {
    pub fn is_eligible(&self) -> bool {
        self.decision == FileDecision::Eligible
    }
}

pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// 先套用使用者的過濾清單，再檢查支援清單
pub fn classify(path: &Path, filter: Option<&HashSet<String>>) -> FileDecision {
    let ext = match lowercase_extension(path) {
        Some(ext) => ext,
        None => return FileDecision::NoExtension,
    };
    if let Some(filter) = filter {
        if !filter.contains(&ext) {
            return FileDecision::Filtered;
        }
    }
    if !is_supported_extension(&ext) {
        return FileDecision::Unsupported;
    }
    FileDecision::Eligible
}

/// 以 walkdir 遞迴走訪，實作 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        FileService::new()
    }
}

impl FileServiceTrait for FileService {
    fn walk<'a>(
        &'a self,
        root: &Path,
        filter: Option<&'a HashSet<String>>,
    ) -> Box<dyn Iterator<Item = WalkEntry> + 'a> {
        let entries = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("無法讀取目錄項目，跳過：{}", e);
                    None
                }
            })
            // 指向檔案的符號連結也算檔案，但不跟隨目錄連結
            .filter(|entry| {
                entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
            })
            .map(move |entry| {
                let path = entry.into_path();
                let decision = classify(&path, filter);
                debug!("走訪檔案：{}，判定：{:?}", path.display(), decision);
                WalkEntry { path, decision }
            });
        Box::new(entries)
    }
}
