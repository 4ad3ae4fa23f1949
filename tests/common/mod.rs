#![allow(dead_code)]

pub mod shape;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

impl CmdResult {
    /// Parse stdout as a single JSON line.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}); log: {}",
                self.log_path.display()
            )
        })
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_mockseam") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "mockseam.exe" } else { "mockseam" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve mockseam binary path for integration test"),
    }
}

/// Run the CLI inside `cwd` with JSON output forced, keeping a transcript.
pub fn run_cli_case(case_name: &str, cwd: &Path, args: &[&str]) -> CmdResult {
    let root = std::env::temp_dir().join("mockseam-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let log_path = root.join(format!("{}-{}.log", sanitize(case_name), now_millis()));
    let bin_path = resolve_bin_path();

    let output = Command::new(&bin_path)
        .args(args)
        .current_dir(cwd)
        .env("MOCKSEAM_OUTPUT_FORMAT", "json")
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("execute mockseam command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let mut log_content = String::new();
    log_content.push_str(&format!("case={case_name}\n"));
    log_content.push_str(&format!("bin={}\n", bin_path.display()));
    log_content.push_str(&format!("cwd={}\n", cwd.display()));
    log_content.push_str(&format!("args={args:?}\n"));
    log_content.push_str(&format!("status={}\n", output.status));
    log_content.push_str("----- stdout -----\n");
    log_content.push_str(&stdout);
    log_content.push('\n');
    log_content.push_str("----- stderr -----\n");
    log_content.push_str(&stderr);
    log_content.push('\n');
    fs::write(&log_path, log_content).expect("write test log");

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}

/// Upload-client composition: `Uploader` embeds an `S3Api` in field `api`.
pub const UPLOADER_DEFS: &str = r#"
[[component]]
name = "Uploader"
embed = [{ type = "S3Api", field = "api" }]

[[component.method]]
name = "upload"
params = [{ name = "path", type = "&Path" }]
results = ["Result<(), UploadError>"]

[[component]]
name = "S3Api"

[[component.method]]
name = "head_bucket"
params = [{ name = "bucket", type = "&str" }]
results = ["Result<(), S3Error>"]

[[component.method]]
name = "create_bucket"
params = [{ name = "bucket", type = "&str" }]
results = ["Result<(), S3Error>"]

[[component.method]]
name = "put_object"
params = [
    { name = "bucket", type = "&str" },
    { name = "key", type = "&str" },
    { name = "body", type = "Vec<u8>" },
]
results = ["Result<(), S3Error>"]
"#;

/// Two components that embed each other.
pub const CYCLIC_DEFS: &str = r#"
[[component]]
name = "A"
embed = [{ type = "B" }]

[[component]]
name = "B"
embed = [{ type = "A" }]

[[component.method]]
name = "ping"
"#;

pub fn write_defs(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write defs fixture");
    path
}
