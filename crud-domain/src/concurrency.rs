//! 并发控制模式
//!
//! 实体是否参与乐观锁在类型层面决定：`Entity::Concurrency` 取 `Unversioned` 或
//! `Optimistic`。服务层据此只为匹配的类型提供对应的删除入口，
//! 错用删除方式在编译期即被拒绝；仅运行时才知道是否携带版本的调用方经由
//! `ConcurrencyMode::expect` 得到 `UnsupportedOperation`。
//!
use crate::error::{CrudError, CrudResult};
use crate::value_object::Version;
use std::fmt::Debug;

/// 某个并发模式下的版本戳类型
pub type Stamp<C> = <C as ConcurrencyMode>::Stamp;

/// 期望版本与存储版本不一致
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMismatch {
    pub expected: Version,
    pub actual: Version,
}

/// 并发控制模式
pub trait ConcurrencyMode: Send + Sync + 'static {
    /// 版本戳：无版本实体为 `()`，乐观锁实体为 `Version`
    type Stamp: Copy + PartialEq + Debug + Send + Sync + 'static;

    /// 是否携带版本号
    const VERSIONED: bool;

    /// 持久化层写入已存在的记录后得到的版本戳；版本号耗尽时返回 `None`
    fn advance(stamp: Self::Stamp) -> Option<Self::Stamp>;

    /// 比较调用方期望的版本戳与存储中的版本戳
    fn verify(expected: Self::Stamp, actual: Self::Stamp) -> Result<(), VersionMismatch>;

    /// 将运行时可选的期望版本解析为版本戳；与模式不符时返回 `UnsupportedOperation`
    fn expect(entity: &'static str, expected: Option<Version>) -> CrudResult<Self::Stamp>;
}

/// 不参与乐观锁的实体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unversioned {}

/// 以版本号做乐观锁的实体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimistic {}

impl ConcurrencyMode for Unversioned {
    type Stamp = ();

    const VERSIONED: bool = false;

    fn advance(_stamp: ()) -> Option<()> {
        Some(())
    }

    fn verify(_expected: (), _actual: ()) -> Result<(), VersionMismatch> {
        Ok(())
    }

    fn expect(entity: &'static str, expected: Option<Version>) -> CrudResult<()> {
        match expected {
            None => Ok(()),
            Some(version) => Err(CrudError::UnsupportedOperation {
                reason: format!(
                    "entity `{entity}` is not versioned and must be deleted without a version (got {version})"
                ),
            }),
        }
    }
}

impl ConcurrencyMode for Optimistic {
    type Stamp = Version;

    const VERSIONED: bool = true;

    fn advance(stamp: Version) -> Option<Version> {
        stamp.checked_next()
    }

    fn verify(expected: Version, actual: Version) -> Result<(), VersionMismatch> {
        if expected == actual {
            Ok(())
        } else {
            Err(VersionMismatch { expected, actual })
        }
    }

    fn expect(entity: &'static str, expected: Option<Version>) -> CrudResult<Version> {
        expected.ok_or_else(|| CrudError::UnsupportedOperation {
            reason: format!("entity `{entity}` is versioned and must be deleted with the expected version"),
        })
    }
}
