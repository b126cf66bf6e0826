//! API 错误类型
//!
//! 网关把所有失败归一为 `ApiError`：
//! 传输失败、非 2xx 响应（可能附带服务端消息）、响应体解析失败、请求体编码失败。

use serde::Deserialize;

/// 服务端未提供消息时展示给用户的通用提示
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// 服务端提供的错误消息（如果有）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    /// 面向用户的错误文本：服务端消息优先，否则为通用提示
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or(GENERIC_FAILURE).to_string()
    }

    /// 由非 2xx 响应构造，尝试从 JSON 体中提取 `error` / `message` 字段
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.trim().is_empty());

        ApiError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_from_body() {
        let err = ApiError::from_status(401, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(
            err.to_string(),
            "server responded with status 401: Invalid credentials"
        );
    }

    #[test]
    fn falls_back_to_message_field() {
        let err = ApiError::from_status(400, r#"{"message":"Email already used"}"#);
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn non_json_body_uses_generic_message() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(err.to_string(), "server responded with status 502");
    }

    #[test]
    fn transport_errors_use_generic_message() {
        let err = ApiError::Transport("offline".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }
}
