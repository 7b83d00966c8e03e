use log::{debug, info};
use crate::models::conversion::{ConversionOutcome, ConversionRequest, ConversionStatus};
use crate::service::traits::i_service::CodecServiceTrait;
use crate::utils::utils::ProgressManager;

/// 單一檔案的轉換，錯誤在此處回報並吞下，不會往上拋
/// # 參數
/// - codec: 實際執行解碼與編碼的服務
/// - request: 輸入與輸出路徑
/// - pm: 狀態列的輸出位置
/// # 回傳
/// - 成功或失敗（含錯誤訊息）的結果
pub fn convert(
    codec: &dyn CodecServiceTrait,
    request: &ConversionRequest,
    pm: &ProgressManager,
) -> ConversionOutcome {
    let input = request.input_path.display();
    let output = request.output_path.display();

    let status = match codec.transcode(&request.input_path, &request.output_path) {
        Ok(()) => {
            info!("轉換完成：{} -> {}", input, output);
            pm.println(&format!("Converted {} to {}", input, output));
            ConversionStatus::Converted
        }
        Err(e) => {
            debug!("轉換失敗：{} -> {}：{}", input, output, e);
            pm.println(&format!("Error converting {} to {}: {}", input, output, e));
            ConversionStatus::Failed(e.to_string())
        }
    };

    ConversionOutcome {
        input_path: request.input_path.clone(),
        output_path: request.output_path.clone(),
        status,
    }
}
