use crate::models::ECLevel;
use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .and_then(|v| ECLevel::from_letter(&v))
        .unwrap_or(default)
}

static RENDER_SIZE: OnceLock<u32> = OnceLock::new();

/// Default QR image edge length in pixels
pub fn render_size() -> u32 {
    *RENDER_SIZE.get_or_init(|| parse_env_u32("QRCRAFT_RENDER_SIZE", 400).clamp(64, 4096))
}

static RENDER_MARGIN: OnceLock<u32> = OnceLock::new();

/// Default quiet-zone width in modules
pub fn render_margin() -> u32 {
    *RENDER_MARGIN.get_or_init(|| parse_env_u32("QRCRAFT_RENDER_MARGIN", 2).clamp(0, 16))
}

static RENDER_EC: OnceLock<ECLevel> = OnceLock::new();

/// Default error correction level
pub fn render_error_correction() -> ECLevel {
    *RENDER_EC.get_or_init(|| parse_env_ec_level("QRCRAFT_RENDER_EC", ECLevel::M))
}

static PARALLEL_THRESHOLD: OnceLock<usize> = OnceLock::new();

/// Batch size from which classification fans out across threads
pub fn parallel_batch_threshold() -> usize {
    *PARALLEL_THRESHOLD
        .get_or_init(|| parse_env_usize("QRCRAFT_PARALLEL_THRESHOLD", 256).max(1))
}
