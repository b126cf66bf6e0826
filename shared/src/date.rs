//! 日期模块
//!
//! 出生日期在线路上有两种形态：
//! - 客户端发送 `YYYY-MM-DD`
//! - 服务端可能返回完整的 RFC 3339 时间戳（如 `1990-01-01T00:00:00.000Z`）
//!
//! 这里统一解析为 `NaiveDate`，序列化时始终输出 `YYYY-MM-DD`。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// 表单与线路使用的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析日期字符串
///
/// 先尝试 RFC 3339 时间戳，再尝试纯日期。
/// 返回 None 如果两者都失败
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// 转换为 `<input type="date">` 可接受的值
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 列表中展示用的日期，如 `Mon Jan 01 1990`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// `#[serde(with = "date::wire")]` 适配器
pub mod wire {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_input_value(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// 可选日期的适配器，用于部分更新载荷
pub mod wire_opt {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_some(&to_input_value(*d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(parse_date("1990-01-01"), Some(expected));
        assert_eq!(parse_date("1990-01-01T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date(" 1990-01-01 "), Some(expected));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("01/01/1990"), None);
    }

    #[test]
    fn formats_for_input_and_display() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(to_input_value(date), "1990-01-01");
        assert_eq!(display_date(date), "Mon Jan 01 1990");
    }
}
