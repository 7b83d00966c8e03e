use std::path::Path;
use log::debug;
use crate::error::Result;
use crate::service::traits::i_service::CodecServiceTrait;

/// 以 `image` crate 實作的 codec：依內容與副檔名解碼，依輸出副檔名編碼
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        ImageCodec
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        ImageCodec::new()
    }
}

impl CodecServiceTrait for ImageCodec {
    fn transcode(&self, input: &Path, output: &Path) -> Result<()> {
        let img = image::ImageReader::open(input)?
            .with_guessed_format()?
            .decode()?;
        debug!(
            "解碼完成：{}，尺寸 {}x{}，色彩 {:?}",
            input.display(),
            img.width(),
            img.height(),
            img.color()
        );
        img.save(output)?;
        Ok(())
    }
}
