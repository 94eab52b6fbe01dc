//! 实体（Entity）与模型（Model）基础抽象
//!
//! - `Identified`：携带泛型标识；标识在仓储首次保存前可以为空
//! - `Versioned`：可选能力，携带乐观锁版本号
//! - `Entity`：持久化表示，声明类型名与并发模式
//! - `Model`：面向接口的表示，并发模式需与对应实体一致
//!
//! 通常由 `#[entity]` / `#[model]` 宏生成实现。
//!
use crate::concurrency::{ConcurrencyMode, Stamp};
use crate::value_object::Version;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 具备唯一标识的对象，同一性以标识判断
pub trait Identified {
    /// 标识类型，要求可比较、可哈希、可显示与可克隆
    type Id: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// 获取标识；尚未持久化的对象返回 `None`
    fn id(&self) -> Option<&Self::Id>;
}

/// 携带乐观锁版本号的对象
pub trait Versioned: Identified {
    fn version(&self) -> Version;

    fn set_version(&mut self, version: Version);
}

/// 持久化实体
pub trait Entity: Identified + Send + Sync + 'static {
    /// 实体类型名，用于日志与错误信息
    const TYPE: &'static str;

    /// 并发控制模式（`Unversioned` 或 `Optimistic`）
    type Concurrency: ConcurrencyMode;

    /// 由仓储在首次保存时分配标识
    fn assign_id(&mut self, id: Self::Id);

    /// 当前版本戳
    fn stamp(&self) -> Stamp<Self::Concurrency>;

    /// 覆盖版本戳
    fn set_stamp(&mut self, stamp: Stamp<Self::Concurrency>);
}

/// 面向接口的模型
pub trait Model: Identified + Send + Sync + 'static {
    type Concurrency: ConcurrencyMode;

    /// 调用方最后一次观察到的版本戳
    fn stamp(&self) -> Stamp<Self::Concurrency>;
}
