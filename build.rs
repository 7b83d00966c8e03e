// 在 Windows 上把 Cargo.toml 的產品資訊與版本寫入執行檔資源

#[cfg(windows)]
fn main() {
    let version = env!("CARGO_PKG_VERSION");
    let author = env!("CARGO_PKG_AUTHORS").replace(':', ", ");
    let copyright = format!("Copyright (c) {}", author);

    let mut res = winres::WindowsResource::new();
    res.set("ProductName", env!("CARGO_PKG_NAME"))
        .set("FileDescription", env!("CARGO_PKG_DESCRIPTION"))
        .set("CompanyName", &author)
        .set("LegalCopyright", &copyright)
        .set("OriginalFilename", concat!(env!("CARGO_PKG_NAME"), ".exe"))
        .set("FileVersion", version)
        .set("ProductVersion", version)
        .set_version_info(winres::VersionInfo::FILEVERSION, packed_version())
        .set_version_info(winres::VersionInfo::PRODUCTVERSION, packed_version());

    if let Err(e) = res.compile() {
        println!("cargo:warning=Failed to compile Windows resources: {}", e);
    }
}

/// `major,minor,patch,0` 依序放進 64 位元的四個 16 位元欄位
#[cfg(windows)]
fn packed_version() -> u64 {
    let part = |value: &str| value.parse::<u64>().unwrap_or(0) & 0xFFFF;
    (part(env!("CARGO_PKG_VERSION_MAJOR")) << 48)
        | (part(env!("CARGO_PKG_VERSION_MINOR")) << 32)
        | (part(env!("CARGO_PKG_VERSION_PATCH")) << 16)
}

#[cfg(not(windows))]
fn main() {}
