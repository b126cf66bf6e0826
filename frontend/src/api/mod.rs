//! 远程 REST API 访问层
//!
//! - `transport`: HTTP 传输抽象与浏览器实现
//! - `gateway`: 统一的网关客户端（基础 URL、令牌、错误归一）
//! - `resources`: 各实体的资源客户端

mod gateway;
mod resources;
mod transport;

pub use gateway::{ApiClient, use_api};
pub use resources::{AuthApi, ResourceClient};
pub use transport::{FetchTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
