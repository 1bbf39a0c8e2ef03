//! Build script for cradle-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates cradle.toml at compile time
//! - Embeds the validated configuration as postcard bytes

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use cradle_core::config::CradleConfig;

/// Name of the encoded configuration inside OUT_DIR
const CONFIG_BLOB: &str = "cradle_config.bin";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = validate_config();
    embed_config(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and check cradle.toml, aborting the build on any problem
fn validate_config() -> CradleConfig {
    println!("cargo:rerun-if-changed=cradle.toml");

    let config_path = Path::new("cradle.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: cradle.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a cradle.toml configuration file.         ║\n\
            ║  Please create one in the cradle-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read cradle.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse straight into the firmware's own types so values of the wrong
    // type are caught here rather than on the board
    let config: CradleConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid cradle.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Inconsistent values in cradle.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e),
            explain(&config)
        );
    }

    println!("cargo:warning=cradle.toml validated successfully");
    config
}

/// One-line hint pointing at the offending section
fn explain(config: &CradleConfig) -> String {
    let swing = &config.swing;
    if !(swing.min_deg < swing.rest_deg && swing.rest_deg < swing.max_deg) || swing.max_deg > 180 {
        format!(
            "[swing] needs min < rest < max <= 180 (got {}/{}/{})",
            swing.min_deg, swing.rest_deg, swing.max_deg
        )
    } else if config.alert.destination.is_empty() {
        "[alert] destination must not be empty".to_string()
    } else if config.buzzer.beeps == 0 || config.buzzer.beeps > 127 {
        format!("[buzzer] beeps must be 1..=127 (got {})", config.buzzer.beeps)
    } else {
        "a period or on-time is zero".to_string()
    }
}

/// Write the postcard encoding for `include_bytes!`
fn embed_config(out_dir: &Path, config: &CradleConfig) {
    let mut buf = [0u8; 256];
    let encoded = match config.to_postcard(&mut buf) {
        Ok(bytes) => bytes,
        Err(e) => panic!("Failed to encode configuration: {:?}", e),
    };

    fs::write(out_dir.join(CONFIG_BLOB), &*encoded).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
