//! 运行时配置
//!
//! 后端地址的解析顺序：
//! 1. LocalStorage 中的覆盖值（方便在已部署的页面上切换后端）
//! 2. 构建时环境变量 `IMDB_API_BASE_URL`
//! 3. 默认值

use crate::web::LocalStorage;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const API_BASE_URL_OVERRIDE_KEY: &str = "imdb_api_base_url";

/// 会话令牌在 LocalStorage 中的键
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl AppConfig {
    /// 从浏览器环境加载配置
    pub fn load() -> Self {
        Self::resolve(
            LocalStorage::get(API_BASE_URL_OVERRIDE_KEY),
            option_env!("IMDB_API_BASE_URL"),
        )
    }

    fn resolve(stored: Option<String>, build_time: Option<&str>) -> Self {
        let api_base_url = stored
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim().to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}
