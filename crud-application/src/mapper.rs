/// 实体与模型之间的映射
///
/// 每个具体服务都需要提供：如何构造空白实体、如何把模型字段复制到实体上、
/// 以及如何把实体映射回模型。标识、版本与审计字段由服务与仓储维护，
/// 映射实现只需关心业务字段。
pub trait EntityMapper<E, M>: Send + Sync {
    /// 构造用于新建的空白实体
    fn new_entity(&self) -> E;

    /// 把模型字段复制到实体上（新建时为空白实体，更新时为已加载的实体）
    fn to_entity(&self, model: &M, entity: E) -> E;

    /// 把实体映射为模型
    fn to_model(&self, entity: &E) -> M;
}

impl<E, M, T> EntityMapper<E, M> for std::sync::Arc<T>
where
    T: EntityMapper<E, M> + ?Sized,
{
    fn new_entity(&self) -> E {
        (**self).new_entity()
    }

    fn to_entity(&self, model: &M, entity: E) -> E {
        (**self).to_entity(model, entity)
    }

    fn to_model(&self, entity: &E) -> M {
        (**self).to_model(entity)
    }
}
