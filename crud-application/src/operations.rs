//! CRUD 服务接口
//!
//! - `CrudOperations`：创建/更新/按标识读取，任何实体可用
//! - `Delete`：仅对无版本实体实现
//! - `VersionedDelete`：仅对乐观锁实体实现，必须提供期望版本
//!
//! 批量方法逐个调用单条方法并保持输入顺序；遇到第一个错误即停止，
//! 已完成的元素不会回滚，原子性由外层事务负责。
//!
use async_trait::async_trait;
use crud_domain::entity::Model;
use crud_domain::error::CrudResult;
use crud_domain::value_object::Version;

#[async_trait]
pub trait CrudOperations<M>: Send + Sync
where
    M: Model,
{
    /// 新建并返回持久化后的模型（标识由仓储分配）
    async fn create(&self, model: &M) -> CrudResult<M>;

    async fn create_all(&self, models: &[M]) -> CrudResult<Vec<M>> {
        let mut created = Vec::with_capacity(models.len());
        for model in models {
            created.push(self.create(model).await?);
        }
        Ok(created)
    }

    /// 按模型标识加载实体、覆盖字段后保存
    async fn update(&self, model: &M) -> CrudResult<M>;

    async fn update_all(&self, models: &[M]) -> CrudResult<Vec<M>> {
        let mut updated = Vec::with_capacity(models.len());
        for model in models {
            updated.push(self.update(model).await?);
        }
        Ok(updated)
    }

    async fn find_by_id(&self, id: &M::Id) -> CrudResult<Option<M>>;

    /// 不存在时返回 `NotFound`
    async fn get_by_id(&self, id: &M::Id) -> CrudResult<M>;
}

#[async_trait]
pub trait Delete<Id>: Send + Sync
where
    Id: Send + Sync + 'static,
{
    async fn delete(&self, id: &Id) -> CrudResult<()>;

    async fn delete_all<I>(&self, ids: I) -> CrudResult<()>
    where
        I: IntoIterator<Item = Id> + Send,
        I::IntoIter: Send,
    {
        for id in ids {
            self.delete(&id).await?;
        }
        Ok(())
    }
}

#[async_trait]
pub trait VersionedDelete<Id>: Send + Sync
where
    Id: Send + Sync + 'static,
{
    /// 存储版本与 `version` 不一致时返回 `VersionConflict`，实体保持不变
    async fn delete_versioned(&self, id: &Id, version: Version) -> CrudResult<()>;

    /// 按映射的迭代顺序逐条删除（`HashMap`、`BTreeMap` 或 `Vec<(Id, Version)>`）
    async fn delete_all_versioned<I>(&self, entries: I) -> CrudResult<()>
    where
        I: IntoIterator<Item = (Id, Version)> + Send,
        I::IntoIter: Send,
    {
        for (id, version) in entries {
            self.delete_versioned(&id, version).await?;
        }
        Ok(())
    }
}
