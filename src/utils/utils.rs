use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 批次轉換的進度顯示；狀態列一律經由這裡輸出，避免與轉圈動畫互相覆蓋
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            match ProgressStyle::default_spinner().template("{spinner} 已處理: {pos} 檔案 {wide_msg}") {
                Ok(style) => pb.set_style(style),
                Err(e) => log::debug!("進度樣式無效，使用預設樣式: {}", e),
            }
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn hidden() -> Self {
        ProgressManager::new(true)
    }

    pub fn println(&self, line: &str) {
        if self.no_progress || self.pb.is_hidden() {
            println!("{}", line);
        } else {
            self.pb.suspend(|| println!("{}", line));
        }
    }

    pub fn update(&self, count: u64, current: &Path) {
        if self.no_progress {
            return;
        }
        self.pb.set_position(count);
        self.pb.set_message(current.display().to_string());
    }

    pub fn finish(&self, converted: usize, failed: usize, skipped: usize) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "完成，成功 {} 個，失敗 {} 個，跳過 {} 個",
            converted, failed, skipped
        ));
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// 去除前後空白與開頭的 `.`，例如 ` .PNG` -> `PNG`
pub fn normalize_format(format: &str) -> String {
    format.trim().trim_start_matches('.').to_string()
}

/// 逗號分隔的輸入格式清單，統一為小寫並去除空項
pub fn parse_format_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|f| normalize_format(f).to_lowercase())
        .filter(|f| !f.is_empty())
        .collect()
}

/// 檔名最後一個 `.` 之後的小寫字串；`.png` 視為 `png`，檔名沒有 `.` 時回傳 None
pub fn lowercase_extension(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy();
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// `<path 去掉副檔名>.<format>`
pub fn replace_extension(path: &Path, format: &str) -> PathBuf {
    path.with_extension(format)
}

/// 找出 `<stem>_<n>.<ext>` 中第一個不存在的路徑，n 從 1 開始
pub fn unique_output_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let stem = path.file_stem().unwrap_or_default();
    let ext = path.extension();
    let mut count = 1u32;
    loop {
        let mut file_name = stem.to_os_string();
        file_name.push(format!("_{}", count));
        if let Some(ext) = ext {
            file_name.push(".");
            file_name.push(ext);
        }
        let candidate = path.with_file_name(file_name);
        if !candidate.exists() {
            return candidate;
        }
        count += 1;
    }
}
