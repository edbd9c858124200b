//! 时间格式化模块
//!
//! 后端返回的 `created_at` 可能带时区（RFC 3339），也可能是无时区的
//! ISO 字符串，甚至只有日期。统一格式化为法式 `dd/mm/yyyy`。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const FR_DATE_FORMAT: &str = "%d/%m/%Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// 解析为日期部分
///
/// 返回 None 如果所有格式都无法解析
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// 格式化为 `dd/mm/yyyy`
pub fn format_fr_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format(FR_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_supported_shapes() {
        assert_eq!(format_fr_date("2024-01-31T23:10:00+02:00").as_deref(), Some("31/01/2024"));
        assert_eq!(format_fr_date("2024-01-31T08:00:00.123456").as_deref(), Some("31/01/2024"));
        assert_eq!(format_fr_date("2024-01-31 08:00:00").as_deref(), Some("31/01/2024"));
        assert_eq!(format_fr_date("2024-01-31").as_deref(), Some("31/01/2024"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(format_fr_date("hier"), None);
        assert_eq!(format_fr_date(""), None);
    }
}
