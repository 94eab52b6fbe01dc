//! 通用 CRUD 服务
//!
//! 在模型与实体之间做映射，并把持久化委托给 `Repository`：
//! 调用方 → 映射为实体 → 生命周期钩子 → 仓储 → 映射回模型。
//!
use crate::config::{ServiceConfig, UpdateVersionCheck};
use crate::hooks::{LifecycleHooks, NoHooks};
use crate::mapper::EntityMapper;
use crate::operations::{CrudOperations, Delete, VersionedDelete};
use async_trait::async_trait;
use crud_domain::concurrency::{ConcurrencyMode, Optimistic, Stamp, Unversioned, VersionMismatch};
use crud_domain::entity::{Entity, Model};
use crud_domain::error::{CrudError, CrudResult};
use crud_domain::persist::Repository;
use crud_domain::value_object::Version;
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// 面向应用层的通用 CRUD 服务。
///
/// - `E`：持久化实体
/// - `M`：接口模型，并发模式须与 `E` 一致
/// - `R`：实体仓储
/// - `P`：实体/模型映射
/// - `H`：生命周期钩子，默认 `NoHooks`
pub struct CrudService<E, M, R, P, H = NoHooks> {
    repository: R,
    mapper: P,
    hooks: H,
    config: ServiceConfig,
    _marker: PhantomData<fn() -> (E, M)>,
}

impl<E, M, R, P> CrudService<E, M, R, P, NoHooks> {
    pub fn new(repository: R, mapper: P) -> Self {
        Self {
            repository,
            mapper,
            hooks: NoHooks,
            config: ServiceConfig::default(),
            _marker: PhantomData,
        }
    }
}

impl<E, M, R, P, H> CrudService<E, M, R, P, H> {
    /// 替换生命周期钩子
    pub fn with_hooks<H2>(self, hooks: H2) -> CrudService<E, M, R, P, H2> {
        CrudService {
            repository: self.repository,
            mapper: self.mapper,
            hooks,
            config: self.config,
            _marker: PhantomData,
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn mapper(&self) -> &P {
        &self.mapper
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl<E, M, R, P, H> CrudService<E, M, R, P, H>
where
    E: Entity,
    M: Model<Id = E::Id, Concurrency = E::Concurrency>,
    R: Repository<E>,
    P: EntityMapper<E, M>,
    H: LifecycleHooks<E>,
{
    /// 按运行时才确定的期望版本删除。
    ///
    /// 无版本实体必须传 `None`，乐观锁实体必须传 `Some(version)`；
    /// 与实体能力不符时返回 `UnsupportedOperation`，且不会访问仓储。
    pub async fn delete_with(&self, id: &E::Id, expected: Option<Version>) -> CrudResult<()> {
        let stamp = <E::Concurrency as ConcurrencyMode>::expect(E::TYPE, expected)?;
        self.remove(id, stamp).await
    }

    #[instrument(level = "debug", skip_all, fields(entity = E::TYPE, id = %id))]
    async fn remove(&self, id: &E::Id, expected: Stamp<E::Concurrency>) -> CrudResult<()> {
        let entity = self.repository.get_by_id(id).await?;

        <E::Concurrency as ConcurrencyMode>::verify(expected, entity.stamp())
            .map_err(|mismatch| Self::conflict(id, mismatch))?;

        let entity = self.hooks.before_delete(entity)?;
        self.repository.delete(entity).await?;

        debug!("entity deleted");
        Ok(())
    }

    fn conflict(id: &E::Id, mismatch: VersionMismatch) -> CrudError {
        warn!(
            entity = E::TYPE,
            %id,
            expected = %mismatch.expected,
            actual = %mismatch.actual,
            "optimistic lock conflict"
        );
        CrudError::VersionConflict {
            entity: E::TYPE,
            id: id.to_string(),
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }
}

#[async_trait]
impl<E, M, R, P, H> CrudOperations<M> for CrudService<E, M, R, P, H>
where
    E: Entity,
    M: Model<Id = E::Id, Concurrency = E::Concurrency>,
    R: Repository<E>,
    P: EntityMapper<E, M>,
    H: LifecycleHooks<E>,
{
    async fn create(&self, model: &M) -> CrudResult<M> {
        let entity = self.mapper.to_entity(model, self.mapper.new_entity());
        let entity = self.hooks.before_create(entity)?;
        let saved = self.repository.save_and_flush(entity).await?;

        let Some(id) = saved.id() else {
            return Err(CrudError::MissingId { entity: E::TYPE });
        };
        debug!(entity = E::TYPE, %id, "entity created");

        Ok(self.mapper.to_model(&saved))
    }

    async fn update(&self, model: &M) -> CrudResult<M> {
        let id = model.id().ok_or(CrudError::MissingId { entity: E::TYPE })?;
        let stored = self.repository.get_by_id(id).await?;

        if self.config.update_version_check() == UpdateVersionCheck::Strict {
            <E::Concurrency as ConcurrencyMode>::verify(model.stamp(), stored.stamp())
                .map_err(|mismatch| Self::conflict(id, mismatch))?;
        }

        let entity = self.mapper.to_entity(model, stored);
        let mut entity = self.hooks.before_update(entity)?;
        // 信任调用方提供的版本，交由仓储写入
        entity.set_stamp(model.stamp());

        let saved = self.repository.save_and_flush(entity).await?;
        debug!(entity = E::TYPE, %id, stamp = ?saved.stamp(), "entity updated");

        Ok(self.mapper.to_model(&saved))
    }

    async fn find_by_id(&self, id: &M::Id) -> CrudResult<Option<M>> {
        let found = self.repository.find_by_id(id).await?;
        Ok(found.map(|entity| self.mapper.to_model(&entity)))
    }

    async fn get_by_id(&self, id: &M::Id) -> CrudResult<M> {
        let entity = self.repository.get_by_id(id).await?;
        Ok(self.mapper.to_model(&entity))
    }
}

#[async_trait]
impl<E, M, R, P, H> Delete<E::Id> for CrudService<E, M, R, P, H>
where
    E: Entity<Concurrency = Unversioned>,
    M: Model<Id = E::Id, Concurrency = E::Concurrency>,
    R: Repository<E>,
    P: EntityMapper<E, M>,
    H: LifecycleHooks<E>,
{
    async fn delete(&self, id: &E::Id) -> CrudResult<()> {
        self.remove(id, ()).await
    }
}

#[async_trait]
impl<E, M, R, P, H> VersionedDelete<E::Id> for CrudService<E, M, R, P, H>
where
    E: Entity<Concurrency = Optimistic>,
    M: Model<Id = E::Id, Concurrency = E::Concurrency>,
    R: Repository<E>,
    P: EntityMapper<E, M>,
    H: LifecycleHooks<E>,
{
    async fn delete_versioned(&self, id: &E::Id, version: Version) -> CrudResult<()> {
        self.remove(id, version).await
    }
}
