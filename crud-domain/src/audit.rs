//! 审计信息（Auditable）
//!
//! 创建者/修改者与对应时间，由持久化层在写入时填充；服务层只读不写。
//!
use crate::entity::Identified;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 审计字段
#[derive(Builder, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// 创建者
    created_by: Option<String>,
    /// 最后修改者
    modified_by: Option<String>,
    /// 创建时间
    created_at: Option<DateTime<Utc>>,
    /// 最后修改时间
    modified_at: Option<DateTime<Utc>>,
}

impl AuditInfo {
    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn modified_by(&self) -> Option<&str> {
        self.modified_by.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// 记录创建：同时视为一次修改。创建字段一经写入不再覆盖。
    pub fn record_creation(&mut self, actor: impl Into<String>, at: DateTime<Utc>) {
        let actor = actor.into();
        if self.created_by.is_none() {
            self.created_by = Some(actor.clone());
            self.created_at = Some(at);
        }
        self.record_modification(actor, at);
    }

    /// 记录修改
    pub fn record_modification(&mut self, actor: impl Into<String>, at: DateTime<Utc>) {
        self.modified_by = Some(actor.into());
        self.modified_at = Some(at);
    }
}

/// 携带审计字段的对象
pub trait Auditable: Identified {
    fn audit(&self) -> &AuditInfo;

    fn audit_mut(&mut self) -> &mut AuditInfo;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn creation_fields_are_written_once() {
        let t0 = Utc::now();
        let t1 = t0 + Duration::seconds(5);

        let mut audit = AuditInfo::default();
        audit.record_creation("alice", t0);
        audit.record_creation("bob", t1);

        assert_eq!(audit.created_by(), Some("alice"));
        assert_eq!(audit.created_at(), Some(t0));
        assert_eq!(audit.modified_by(), Some("bob"));
        assert_eq!(audit.modified_at(), Some(t1));
    }

    #[test]
    fn builder_and_serde_flatten_friendly() {
        let audit = AuditInfo::builder()
            .created_by("system".to_string())
            .build();
        assert_eq!(audit.created_by(), Some("system"));
        assert_eq!(audit.modified_by(), None);

        let json = serde_json::to_value(&audit).unwrap();
        assert_eq!(json["created_by"], "system");
        assert!(json["modified_at"].is_null());
    }
}
