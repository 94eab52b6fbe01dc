//! 持久化协议（persist）
//!
//! 仅定义服务层依赖的最小仓储接口：保存并刷新、按标识查找、删除。
//! 具体存储后端（如 Postgres）由上层提供实现并注入。
//!
mod repository;

pub use repository::Repository;
