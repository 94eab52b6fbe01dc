use crate::id_generator::{IdGenerator, SequenceGenerator};
use async_trait::async_trait;
use crud_domain::concurrency::ConcurrencyMode;
use crud_domain::entity::Entity;
use crud_domain::error::{CrudError, CrudResult};
use crud_domain::persist::Repository;
use dashmap::DashMap;
use tracing::trace;

/// 基于内存的 Repository 实现
/// - 首次保存时通过 `IdGenerator` 分配标识
/// - 覆盖已存在的记录时在存储版本的基础上推进（与 ORM 的版本列一致），写入时不做版本比较
/// - 适用于测试与演示，不提供事务语义
pub struct InMemoryRepository<E, G = SequenceGenerator>
where
    E: Entity,
{
    rows: DashMap<E::Id, E>,
    ids: G,
}

impl<E> Default for InMemoryRepository<E, SequenceGenerator>
where
    E: Entity,
{
    fn default() -> Self {
        Self::with_generator(SequenceGenerator::default())
    }
}

impl<E> InMemoryRepository<E, SequenceGenerator>
where
    E: Entity,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, G> InMemoryRepository<E, G>
where
    E: Entity,
{
    pub fn with_generator(ids: G) -> Self {
        Self {
            rows: DashMap::new(),
            ids,
        }
    }

    /// 原样写入一条已有标识的记录（不分配标识、不推进版本），用于准备测试数据
    pub fn seed(&self, entity: E) -> CrudResult<()> {
        let id = entity
            .id()
            .cloned()
            .ok_or(CrudError::MissingId { entity: E::TYPE })?;
        self.rows.insert(id, entity);
        Ok(())
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl<E, G> Repository<E> for InMemoryRepository<E, G>
where
    E: Entity + Clone,
    G: IdGenerator<E::Id>,
{
    async fn save_and_flush(&self, mut entity: E) -> CrudResult<E> {
        let id = match entity.id().cloned() {
            Some(id) => {
                // 以存储中的版本为基准推进，调用方携带的版本不参与比较
                let stored = self.rows.get(&id).map(|row| row.stamp());
                if let Some(stored) = stored {
                    let next = <E::Concurrency as ConcurrencyMode>::advance(stored).ok_or_else(
                        || CrudError::Repository {
                            reason: format!("{} with id {id}: version exhausted", E::TYPE),
                        },
                    )?;
                    entity.set_stamp(next);
                }
                id
            }
            None => {
                let id = self.ids.next_id();
                entity.assign_id(id.clone());
                id
            }
        };

        trace!(entity = E::TYPE, %id, stamp = ?entity.stamp(), "row flushed");
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &E::Id) -> CrudResult<Option<E>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn delete(&self, entity: E) -> CrudResult<()> {
        let id = entity.id().ok_or(CrudError::MissingId { entity: E::TYPE })?;
        self.rows.remove(id);
        trace!(entity = E::TYPE, %id, "row removed");
        Ok(())
    }
}
