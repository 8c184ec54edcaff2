//! One-time system summary for log file headers.
//!
//! Assembled once so individual reports do not pay for OS queries.

use std::sync::OnceLock;

use sysinfo::System;

static SYSTEM_SUMMARY: OnceLock<String> = OnceLock::new();

/// The OS/kernel line written at the top of every error log. First call
/// assembles it; later calls are free.
pub fn system_summary() -> &'static str {
    SYSTEM_SUMMARY.get_or_init(|| {
        let name = System::name().unwrap_or_else(|| "unknown".to_string());
        let os_version = System::long_os_version()
            .or_else(System::os_version)
            .unwrap_or_else(|| "unknown".to_string());
        let kernel = System::kernel_version().unwrap_or_else(|| "unknown".to_string());

        format!(
            "System: {} Version: {} Kernel: {} Arch: {}",
            name,
            os_version,
            kernel,
            std::env::consts::ARCH
        )
    })
}
