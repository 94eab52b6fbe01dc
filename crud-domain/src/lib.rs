//! CRUD 领域层基础库（crud-domain）
//!
//! 为通用 CRUD 服务提供与存储无关的抽象：
//! - 标识、版本与审计能力（`entity`、`audit`）
//! - 编译期确定的并发控制模式（`concurrency`）
//! - 版本号值对象（`value_object`）
//! - 最小仓储协议（`persist`）与统一错误（`error`）
//!
//! 具体的持久化实现（连接管理、事务、审计字段填充）由上层基础设施提供并注入。
//!
pub mod audit;
pub mod concurrency;
pub mod entity;
pub mod error;
pub mod persist;
pub mod value_object;

pub use crud_macros::{entity, entity_id, model};

// 允许在本 crate 内部通过 ::crud_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::crud_domain 路径。
extern crate self as crud_domain;
