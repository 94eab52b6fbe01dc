//! CRUD 应用层（crud-application）
//!
//! 以 `CrudService` 为核心，在接口模型与持久化实体之间做映射，
//! 并把持久化委托给 `crud_domain::persist::Repository`：
//! - `operations`：服务接口（创建/更新/读取，以及按并发模式区分的删除）
//! - `mapper`：实体与模型的映射契约
//! - `hooks`：创建/更新/删除前的扩展点
//! - `config`：服务配置
//! - `inmemory_repository` / `id_generator`：测试与演示用的内存仓储
//!
pub mod config;
pub mod crud_service;
pub mod hooks;
pub mod id_generator;
pub mod inmemory_repository;
pub mod mapper;
pub mod operations;

pub use crud_service::CrudService;
pub use inmemory_repository::InMemoryRepository;
pub use operations::{CrudOperations, Delete, VersionedDelete};
