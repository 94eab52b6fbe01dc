//! 过程宏（crud-macros）
//!
//! 为 `crud-domain` 的标识/版本/审计抽象生成样板代码：
//! - `#[entity]`：持久化实体，注入 `id`/`version`/`audit` 字段并实现 `Entity`
//! - `#[model]`：面向接口的模型，注入 `id`/`version` 字段并实现 `Model`
//! - `#[entity_id]`：单字段 newtype 标识
//!
//! 生成代码以 `::crud_domain` 路径引用 trait，使用方需要同时依赖 `crud-domain` 与 `serde`。
//!
use proc_macro::TokenStream;

mod entity;
mod entity_id;
mod model;
mod utils;

/// 持久化实体宏
///
/// ```ignore
/// #[entity(id = u64, versioned, auditable, name = "product")]
/// struct Product {
///     sku: String,
/// }
/// ```
///
/// - `id`：标识类型，默认 `String`，字段类型为 `Option<Id>`（由仓储在保存时分配）
/// - `versioned`：追加 `version: Version`，并发模式为 `Optimistic`
/// - `auditable`：追加扁平化的 `audit: AuditInfo`
/// - `name`：`Entity::TYPE`，默认使用结构体名的 snake_case
/// - `debug = false`：不派生 Debug
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 接口模型宏，参数 `id`、`versioned`、`debug` 含义同 `#[entity]`
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model::expand(attr, item)
}

/// 实体 ID 宏，用于 `struct OrderId(u64);` 形式的 newtype 标识
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
