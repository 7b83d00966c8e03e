use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "convert_img",
    version,
    about = "Converts images to other formats. You can convert a single image or a batch of images.",
    long_about = "Converts images to other formats. You can convert a single image or a batch of images.\nThe output encoding is inferred from the output file extension.\n`-of` and `-if` are accepted as aliases of `-o` and `-i`.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long, global = true, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    /// Hide the batch progress spinner
    #[arg(long, global = true, default_value_t = false)]
    pub no_progress: bool,
    /// Never overwrite an existing output; write `<stem>_<n>.<ext>` instead
    #[arg(short = 'k', long, global = true, default_value_t = false)]
    pub keep_existing: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Converts a single image file to another format.
    /// If output_file is not specified, the output file is the input file with the new extension.
    Single(SingleArgs),
    /// Converts all images in a directory to another format.
    /// If input_format is specified, only images with the specified formats are converted.
    Batch(BatchArgs),
}

#[derive(Args, Clone, Debug)]
pub struct SingleArgs {
    #[arg(value_parser = existing_path)]
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    /// Output format (e.g. png)
    #[arg(short = 'o', long = "output_format", visible_alias = "output-format")]
    pub output_format: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    #[arg(value_parser = existing_dir)]
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    /// Filter formats (e.g. png,jpg)
    #[arg(short = 'i', long = "input_format", visible_alias = "input-format")]
    pub input_format: Option<String>,
    /// Output format (e.g. png)
    #[arg(short = 'o', long = "output_format", visible_alias = "output-format")]
    pub output_format: String,
}

// 在 clap 解析階段執行，此時日誌尚未初始化，錯誤只透過 clap 的訊息呈現
pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Path '{}' does not exist.", input)
        ));
    }
    Ok(path)
}

pub fn validate_input_dir(input: &str) -> io::Result<&Path> {
    let path = validate_input_path(input)?;
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path '{}' is not a directory.", input)
        ));
    }
    Ok(path)
}

fn existing_path(input: &str) -> Result<PathBuf, String> {
    validate_input_path(input)
        .map(Path::to_path_buf)
        .map_err(|e| e.to_string())
}

fn existing_dir(input: &str) -> Result<PathBuf, String> {
    validate_input_dir(input)
        .map(Path::to_path_buf)
        .map_err(|e| e.to_string())
}

/// 將舊式的兩字元短旗標 `-of`、`-if` 改寫成 clap 可解析的 `-o`、`-i`
pub fn normalize_flag_aliases<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            for (legacy, short) in [("-of", "-o"), ("-if", "-i")] {
                if arg == legacy {
                    return short.to_string();
                }
                if let Some(value) = arg.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('=')) {
                    return format!("{}={}", short, value);
                }
            }
            arg
        })
        .collect()
}
