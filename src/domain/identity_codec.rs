//! 身份列表编解码
//!
//! 持久化层只认识纯 JSON，没有原生的映射类型，
//! 所以 `addresses` / `meta` 以 `[[key, value], ...]` 的有序数组形式保存。
//! 往返必须严格相等（包括键顺序），不一致的数据原样保留。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::identity::{AccountMeta, Identity};
use crate::error::{IdentityError, Result};

/// 身份的传输形式
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    addresses: Vec<(String, String)>,
    derivation_password: String,
    encrypted_seed: String,
    meta: Vec<(String, AccountMeta)>,
    name: String,
}

impl From<&Identity> for IdentityRecord {
    fn from(identity: &Identity) -> Self {
        Self {
            addresses: identity
                .addresses
                .iter()
                .map(|(address, path)| (address.clone(), path.clone()))
                .collect(),
            derivation_password: identity.derivation_password.clone(),
            encrypted_seed: identity.encrypted_seed.clone(),
            meta: identity
                .meta
                .iter()
                .map(|(path, meta)| (path.clone(), meta.clone()))
                .collect(),
            name: identity.name.clone(),
        }
    }
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = IdentityError;

    fn try_from(record: IdentityRecord) -> Result<Self> {
        let addresses = collect_unique(record.addresses, "addresses", &record.name)?;
        let meta = collect_unique(record.meta, "meta", &record.name)?;

        Ok(Self {
            name: record.name,
            encrypted_seed: record.encrypted_seed,
            derivation_password: record.derivation_password,
            addresses,
            meta,
        })
    }
}

/// 键值对数组 → 有序映射，重复键视为损坏数据
fn collect_unique<V>(
    pairs: Vec<(String, V)>,
    field: &str,
    identity_name: &str,
) -> Result<IndexMap<String, V>> {
    let mut map = IndexMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        if map.contains_key(&key) {
            return Err(IdentityError::serialization(format!(
                "duplicate key {:?} in `{}` of identity {:?}",
                key, field, identity_name
            )));
        }
        map.insert(key, value);
    }
    Ok(map)
}

/// 序列化身份列表为 JSON 值
pub fn serialize_identities(identities: &[Identity]) -> Result<Value> {
    let records: Vec<IdentityRecord> = identities.iter().map(IdentityRecord::from).collect();
    Ok(serde_json::to_value(records)?)
}

/// 从 JSON 值恢复身份列表
///
/// 任何一个身份的形状不对都会使整体失败，不会返回部分结果。
pub fn deserialize_identities(value: &Value) -> Result<Vec<Identity>> {
    let records = Vec::<IdentityRecord>::deserialize(value).map_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed identity list");
        IdentityError::from(e)
    })?;

    records
        .into_iter()
        .map(Identity::try_from)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            tracing::warn!(error = %e, "rejecting identity list with duplicate keys");
            e
        })
}

/// 序列化为 UTF-8 JSON 文本
pub fn to_json_string(identities: &[Identity], pretty: bool) -> Result<String> {
    let value = serialize_identities(identities)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// 从 UTF-8 JSON 文本恢复
pub fn from_json_str(text: &str) -> Result<Vec<Identity>> {
    let value: Value = serde_json::from_str(text)?;
    deserialize_identities(&value)
}
