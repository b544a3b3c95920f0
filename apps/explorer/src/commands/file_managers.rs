//! File manager detection command

use crate::platform::traits::FileManagerInfo;
use crate::platform::{detect_file_managers, PlatformKind};

/// Host platform and the file managers found on it
#[derive(Debug, Clone, serde::Serialize)]
pub struct DetectionReport {
    pub platform: PlatformKind,
    pub file_managers: Vec<FileManagerInfo>,
}

/// Detect the current platform and its file managers
pub fn detect() -> DetectionReport {
    let report = DetectionReport {
        platform: PlatformKind::current(),
        file_managers: detect_file_managers(),
    };
    tracing::debug!(
        platform = %report.platform,
        count = report.file_managers.len(),
        "Detected file managers"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_current_platform() {
        let report = detect();
        assert_eq!(report.platform, PlatformKind::current());
    }

    #[test]
    fn test_report_serializes() {
        let report = DetectionReport {
            platform: PlatformKind::MacOs,
            file_managers: vec![FileManagerInfo::new("Finder", "open")],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["platform"], "macos");
        assert_eq!(json["file_managers"][0]["command"], "open");
    }
}
