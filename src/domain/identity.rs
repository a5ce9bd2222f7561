//! 身份领域模型
//!
//! 一个身份 = 一个加密种子 + 由它派生出的账户集合。
//! `addresses`（按地址）和 `meta`（按路径）是同一批账户的两个视图，
//! 必须使用插入有序的映射，分组与网络收集的确定性依赖它。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::network_key::{resolve, NetworkKey};
use crate::error::{IdentityError, Result};

/// 派生账户元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub address: String,
    pub name: String,
    /// 毫秒时间戳
    pub created_at: i64,
    /// 毫秒时间戳
    pub updated_at: i64,
}

impl AccountMeta {
    /// 以当前时间创建元数据
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            address: address.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 身份
#[derive(Debug, Clone, Default)]
pub struct Identity {
    pub name: String,
    /// 加密种子密文，本模块从不解密
    pub encrypted_seed: String,
    pub derivation_password: String,
    /// 地址 → 派生路径
    pub addresses: IndexMap<String, String>,
    /// 派生路径 → 元数据
    pub meta: IndexMap<String, AccountMeta>,
}

// IndexMap 自带的相等比较忽略顺序，这里连同插入顺序一起比较
impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.encrypted_seed == other.encrypted_seed
            && self.derivation_password == other.derivation_password
            && self.addresses.iter().eq(other.addresses.iter())
            && self.meta.iter().eq(other.meta.iter())
    }
}

impl Eq for Identity {}

impl Identity {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 派生路径对应的账户地址
    pub fn address_with_path(&self, path: &str) -> Option<&str> {
        self.meta.get(path).map(|meta| meta.address.as_str())
    }

    /// 属于指定网络的所有路径（按 `meta` 顺序）
    pub fn paths_with_network(&self, network_key: NetworkKey) -> Vec<&str> {
        self.meta
            .keys()
            .filter(|path| resolve(path) == network_key)
            .map(String::as_str)
            .collect()
    }

    /// 检查 `addresses` 与 `meta` 是否互相一致
    ///
    /// 只报告第一处不一致，不做任何修复。
    pub fn check_consistency(&self) -> Result<()> {
        for (address, path) in &self.addresses {
            match self.meta.get(path) {
                Some(meta) if meta.address == *address => {}
                Some(meta) => {
                    return Err(IdentityError::inconsistent_index(
                        address,
                        path,
                        format!("meta records address {:?}", meta.address),
                    ))
                }
                None => {
                    return Err(IdentityError::inconsistent_index(
                        address,
                        path,
                        "path has no meta entry",
                    ))
                }
            }
        }

        if let Some((path, meta)) = self
            .meta
            .iter()
            .find(|(path, meta)| self.addresses.get(&meta.address) != Some(*path))
        {
            return Err(IdentityError::inconsistent_index(
                &meta.address,
                path,
                "address is not indexed under this path",
            ));
        }

        Ok(())
    }
}
