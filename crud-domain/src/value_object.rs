//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象。目前仅包含乐观锁使用的版本号。
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// 版本号（用于乐观锁和并发控制）
///
/// 由持久化层在每次写入时推进；调用方在删除或严格更新时回传最后一次观察到的值。
///
/// # 示例
///
/// ```
/// use crud_domain::value_object::Version;
///
/// let v1 = Version::new();
/// assert_eq!(v1.value(), 0);
/// assert!(v1.is_new());
///
/// let v2 = v1.next();
/// assert_eq!(v2.value(), 1);
/// assert!(v2 > v1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version(usize);

impl Version {
    /// 创建初始版本（版本号为 0）
    pub const fn new() -> Self {
        Self(0)
    }

    /// 从值创建版本号
    ///
    /// ```
    /// use crud_domain::value_object::Version;
    ///
    /// let v = Version::from_value(5);
    /// assert_eq!(v.value(), 5);
    /// ```
    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 获取下一个版本号
    ///
    /// 达到 `usize::MAX` 后保持不变；持久化路径请使用 [`Version::checked_next`]。
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// 获取下一个版本号，溢出时返回 `None`
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 获取版本号的值
    pub const fn value(&self) -> usize {
        self.0
    }

    /// 是否为尚未写入过的初始版本
    pub fn is_new(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_next_and_ordering() {
        let v0 = Version::new();
        let v1 = v0.next();
        let v3 = v1.next().next();

        assert!(v0.is_new());
        assert!(!v1.is_new());
        assert_eq!(v3.value(), 3);
        assert!(v3 > v1 && v1 > v0);
    }

    #[test]
    fn test_version_checked_next_stops_at_max() {
        assert_eq!(Version::new().checked_next(), Some(Version::from_value(1)));
        assert_eq!(Version::from_value(usize::MAX).checked_next(), None);
    }

    #[test]
    fn test_version_next_saturates_at_max() {
        let max = Version::from_value(usize::MAX);
        assert_eq!(max.next(), max);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new().to_string(), "v0");
        assert_eq!(Version::from_value(5).to_string(), "v5");
    }

    #[test]
    fn test_version_conversions() {
        let v: Version = 42.into();
        assert_eq!(v, Version::from_value(42));

        let num: usize = v.into();
        assert_eq!(num, 42);
        assert_eq!(Version::default(), Version::new());
    }

    // 序列化为裸整数，便于直接映射数据库的 version 列
    #[test]
    fn test_version_serde() {
        let v = Version::from_value(42);

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "42");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
