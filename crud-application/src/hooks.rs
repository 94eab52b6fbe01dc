//! 生命周期钩子
//!
//! 在持久化调用之前对实体做最后的调整或拒绝操作。默认实现原样返回实体；
//! 以策略对象注入服务，而不是通过继承覆写。
//!
use bon::Builder;
use crud_domain::error::CrudResult;

/// 创建/更新/删除前的扩展点
pub trait LifecycleHooks<E>: Send + Sync {
    fn before_create(&self, entity: E) -> CrudResult<E> {
        Ok(entity)
    }

    fn before_update(&self, entity: E) -> CrudResult<E> {
        Ok(entity)
    }

    fn before_delete(&self, entity: E) -> CrudResult<E> {
        Ok(entity)
    }
}

/// 不做任何处理的钩子
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl<E> LifecycleHooks<E> for NoHooks {}

pub type HookFn<E> = Box<dyn Fn(E) -> CrudResult<E> + Send + Sync>;

/// 由闭包组成的钩子，未设置的阶段保持原样
///
/// ```
/// use crud_application::hooks::{FnHooks, LifecycleHooks};
/// use crud_domain::error::{CrudError, CrudResult};
///
/// let hooks = FnHooks::<String>::builder()
///     .before_create(Box::new(|name: String| -> CrudResult<String> { Ok(name.trim().to_string()) }))
///     .before_delete(Box::new(|_: String| -> CrudResult<String> {
///         Err(CrudError::Validation { reason: "locked".into() })
///     }))
///     .build();
///
/// assert_eq!(hooks.before_create("  a ".to_string()).unwrap(), "a");
/// assert_eq!(hooks.before_update("b".to_string()).unwrap(), "b");
/// assert!(hooks.before_delete("c".to_string()).is_err());
/// ```
#[derive(Builder)]
pub struct FnHooks<E> {
    before_create: Option<HookFn<E>>,
    before_update: Option<HookFn<E>>,
    before_delete: Option<HookFn<E>>,
}

impl<E> FnHooks<E> {
    fn run(hook: Option<&HookFn<E>>, entity: E) -> CrudResult<E> {
        match hook {
            Some(f) => f(entity),
            None => Ok(entity),
        }
    }
}

impl<E> LifecycleHooks<E> for FnHooks<E> {
    fn before_create(&self, entity: E) -> CrudResult<E> {
        Self::run(self.before_create.as_ref(), entity)
    }

    fn before_update(&self, entity: E) -> CrudResult<E> {
        Self::run(self.before_update.as_ref(), entity)
    }

    fn before_delete(&self, entity: E) -> CrudResult<E> {
        Self::run(self.before_delete.as_ref(), entity)
    }
}

impl<E, T> LifecycleHooks<E> for std::sync::Arc<T>
where
    T: LifecycleHooks<E> + ?Sized,
{
    fn before_create(&self, entity: E) -> CrudResult<E> {
        (**self).before_create(entity)
    }

    fn before_update(&self, entity: E) -> CrudResult<E> {
        (**self).before_update(entity)
    }

    fn before_delete(&self, entity: E) -> CrudResult<E> {
        (**self).before_delete(entity)
    }
}
