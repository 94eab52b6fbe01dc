//! 标识生成器
//!
//! 供内存仓储在首次保存时分配标识；真实存储通常由数据库序列或默认值生成。
//!
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait IdGenerator<Id>: Send + Sync {
    fn next_id(&self) -> Id;
}

/// 自增序列，适用于可由 `u64` 构造的标识（含 `#[entity_id] struct X(u64)`）
#[derive(Debug)]
pub struct SequenceGenerator {
    next: AtomicU64,
}

impl SequenceGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<Id> IdGenerator<Id> for SequenceGenerator
where
    Id: From<u64>,
{
    fn next_id(&self) -> Id {
        Id::from(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// 随机 UUID（v4）
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl<Id> IdGenerator<Id> for UuidGenerator
where
    Id: From<Uuid>,
{
    fn next_id(&self) -> Id {
        Id::from(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let seq = SequenceGenerator::starting_at(7);
        let a: u64 = seq.next_id();
        let b: u64 = seq.next_id();
        assert_eq!((a, b), (7, 8));
    }

    #[test]
    fn uuid_ids_are_unique() {
        let a: Uuid = UuidGenerator.next_id();
        let b: Uuid = UuidGenerator.next_id();
        assert_ne!(a, b);
    }
}
