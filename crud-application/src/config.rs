use bon::Builder;
use serde::{Deserialize, Serialize};

/// 更新时是否比较版本号
///
/// 删除总是比较版本；更新默认信任调用方提供的版本并直接覆盖（后写者胜），
/// 需要时可切换为严格模式。无版本实体在任何模式下都不会产生冲突。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateVersionCheck {
    /// 把模型版本直接写到实体上，不与存储版本比较
    #[default]
    LastWriteWins,
    /// 模型版本与存储版本不一致时返回 `VersionConflict`
    Strict,
}

/// CRUD 服务配置
///
/// ```
/// use crud_application::config::{ServiceConfig, UpdateVersionCheck};
///
/// let cfg = ServiceConfig::builder()
///     .update_version_check(UpdateVersionCheck::Strict)
///     .build();
/// assert_eq!(cfg.update_version_check(), UpdateVersionCheck::Strict);
/// assert_eq!(ServiceConfig::default().update_version_check(), UpdateVersionCheck::LastWriteWins);
/// ```
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    #[builder(default)]
    update_version_check: UpdateVersionCheck,
}

impl ServiceConfig {
    pub fn update_version_check(&self) -> UpdateVersionCheck {
        self.update_version_check
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let cfg: ServiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ServiceConfig::default());

        let cfg: ServiceConfig =
            serde_json::from_str(r#"{ "update_version_check": "strict" }"#).unwrap();
        assert_eq!(cfg.update_version_check(), UpdateVersionCheck::Strict);
    }

    #[test]
    fn rejects_unknown_policy() {
        let res = serde_json::from_str::<ServiceConfig>(r#"{ "update_version_check": "merge" }"#);
        assert!(res.is_err());
    }
}
