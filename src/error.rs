//! 统一错误类型
//!
//! 路径解析与网络解析不会失败（降级为 Unknown），
//! 只有严格解析、编解码和一致性检查会把错误交给调用方。

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityErrorCode {
    MalformedPath,
    Serialization,
    InconsistentIndex,
}

impl IdentityErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityErrorCode::MalformedPath => "malformed_path",
            IdentityErrorCode::Serialization => "serialization",
            IdentityErrorCode::InconsistentIndex => "inconsistent_index",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// 路径不符合 `//hard` / `/soft` 语法
    #[error("malformed derivation path {path:?}: {reason}")]
    MalformedPath { path: String, reason: String },

    /// 输入不是身份列表的形状（缺字段、映射不是键值对数组等）
    #[error("identity serialization failed: {0}")]
    Serialization(String),

    /// `addresses` 与 `meta` 对同一账户的记录不一致
    #[error("inconsistent identity index for address {address:?} / path {path:?}: {detail}")]
    InconsistentIndex {
        address: String,
        path: String,
        detail: String,
    },
}

impl IdentityError {
    pub fn malformed_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn inconsistent_index(
        address: impl Into<String>,
        path: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::InconsistentIndex {
            address: address.into(),
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> IdentityErrorCode {
        match self {
            IdentityError::MalformedPath { .. } => IdentityErrorCode::MalformedPath,
            IdentityError::Serialization(_) => IdentityErrorCode::Serialization,
            IdentityError::InconsistentIndex { .. } => IdentityErrorCode::InconsistentIndex,
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
