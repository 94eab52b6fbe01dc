//! 统一错误定义
//!
//! 覆盖查找失败、乐观锁冲突、删除方式与实体能力不匹配、钩子拒绝与仓储故障，
//! 便于各实现层统一转换为 `CrudError`。
//!
use crate::value_object::Version;
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CrudError {
    // --- 查找/标识 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("missing id: entity={entity}")]
    MissingId { entity: &'static str },

    // --- 并发控制 ---
    #[error("version conflict: entity={entity}, id={id}, expected={expected}, actual={actual}")]
    VersionConflict {
        entity: &'static str,
        id: String,
        expected: Version,
        actual: Version,
    },
    #[error("unsupported operation: {reason}")]
    UnsupportedOperation { reason: String },

    // --- 生命周期钩子 ---
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("database error: {reason}")]
    Database { reason: String },
}

/// 统一 Result 类型别名
pub type CrudResult<T> = Result<T, CrudError>;

impl CrudError {
    /// 按实体类型与标识构造 `NotFound`
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        CrudError::NotFound {
            reason: format!("{entity} with id {id}"),
        }
    }

    /// 是否为乐观锁冲突（调用方可据此决定是否重新读取后重试）
    pub fn is_conflict(&self) -> bool {
        matches!(self, CrudError::VersionConflict { .. })
    }
}

// 允许在基础设施层直接使用 `?` 将 sqlx 错误转换为 CrudError
#[cfg(feature = "infra-sqlx")]
impl From<sqlx::Error> for CrudError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => CrudError::NotFound {
                reason: "row not found".to_string(),
            },
            other => CrudError::Database {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = CrudError::not_found("product", 7);
        assert_eq!(err.to_string(), "not found: product with id 7");

        let err = CrudError::VersionConflict {
            entity: "product",
            id: "7".into(),
            expected: Version::from_value(2),
            actual: Version::from_value(3),
        };
        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "version conflict: entity=product, id=7, expected=v2, actual=v3"
        );
    }

    #[cfg(feature = "infra-sqlx")]
    #[test]
    fn sqlx_row_not_found_maps_to_not_found() {
        let err: CrudError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, CrudError::NotFound { .. }));
    }
}
