//! 实体仓储协议
//!
use crate::entity::Entity;
use crate::error::{CrudError, CrudResult};
use async_trait::async_trait;
use std::sync::Arc;

/// 以标识为键的持久化仓储。
///
/// 每次写入在返回前已刷新到存储；`save_and_flush` 返回的实体可能已被存储侧更新
/// （例如生成的标识、推进后的版本号或审计字段）。
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity,
{
    /// 持久化并立即刷新，返回存储后的实体
    async fn save_and_flush(&self, entity: E) -> CrudResult<E>;

    /// 按标识查找
    async fn find_by_id(&self, id: &E::Id) -> CrudResult<Option<E>>;

    /// 删除实体
    async fn delete(&self, entity: E) -> CrudResult<()>;

    /// 按标识加载，不存在时返回 `NotFound`
    async fn get_by_id(&self, id: &E::Id) -> CrudResult<E> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CrudError::not_found(E::TYPE, id))
    }
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity,
    T: Repository<E> + ?Sized,
{
    async fn save_and_flush(&self, entity: E) -> CrudResult<E> {
        (**self).save_and_flush(entity).await
    }

    async fn find_by_id(&self, id: &E::Id) -> CrudResult<Option<E>> {
        (**self).find_by_id(id).await
    }

    async fn delete(&self, entity: E) -> CrudResult<()> {
        (**self).delete(entity).await
    }

    async fn get_by_id(&self, id: &E::Id) -> CrudResult<E> {
        (**self).get_by_id(id).await
    }
}
