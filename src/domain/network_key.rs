//! 网络标识模块
//!
//! 静态网络目录 + 路径到网络的解析规则：
//! - `""` → Unknown
//! - 不以 `/` 开头的旧式扁平索引 → Ethereum FRONTIER
//! - 首个硬派生段名称命中 Substrate 目录 → 对应网络，否则 Unknown

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::derivation_path::{parse, Junction, ParsedPath};
use crate::domain::identity::Identity;

/// Unknown 网络的字符串键
pub const UNKNOWN_NETWORK_KEY: &str = "unknown";

/// Ethereum 系列网络（键为 EIP-155 chain id）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EthereumNetwork {
    Frontier,
    Ropsten,
    Goerli,
    Kovan,
    Classic,
}

impl EthereumNetwork {
    pub const ALL: [EthereumNetwork; 5] = [
        EthereumNetwork::Frontier,
        EthereumNetwork::Ropsten,
        EthereumNetwork::Goerli,
        EthereumNetwork::Kovan,
        EthereumNetwork::Classic,
    ];

    pub fn chain_id(&self) -> u64 {
        match self {
            EthereumNetwork::Frontier => 1,
            EthereumNetwork::Ropsten => 3,
            EthereumNetwork::Goerli => 5,
            EthereumNetwork::Kovan => 42,
            EthereumNetwork::Classic => 61,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EthereumNetwork::Frontier => "Ethereum",
            EthereumNetwork::Ropsten => "Ropsten Testnet",
            EthereumNetwork::Goerli => "Görli Testnet",
            EthereumNetwork::Kovan => "Kovan Testnet",
            EthereumNetwork::Classic => "Ethereum Classic",
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
    }
}

/// Substrate 系列网络（键为创世块哈希）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstrateNetwork {
    Kusama,
    Polkadot,
    Westend,
}

impl SubstrateNetwork {
    pub const ALL: [SubstrateNetwork; 3] = [
        SubstrateNetwork::Kusama,
        SubstrateNetwork::Polkadot,
        SubstrateNetwork::Westend,
    ];

    /// 路径中标识该网络的硬派生段名称（大小写敏感）
    pub fn path_id(&self) -> &'static str {
        match self {
            SubstrateNetwork::Kusama => "kusama",
            SubstrateNetwork::Polkadot => "polkadot",
            SubstrateNetwork::Westend => "westend",
        }
    }

    pub fn genesis_hash(&self) -> &'static str {
        match self {
            SubstrateNetwork::Kusama => {
                "0xb0a8d493285c2df73290dfb7e61f870f17b41801197a149ca93654499ea3dafe"
            }
            SubstrateNetwork::Polkadot => {
                "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3"
            }
            SubstrateNetwork::Westend => {
                "0xe143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e"
            }
        }
    }

    pub fn ss58_prefix(&self) -> u16 {
        match self {
            SubstrateNetwork::Kusama => 2,
            SubstrateNetwork::Polkadot => 0,
            SubstrateNetwork::Westend => 42,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubstrateNetwork::Kusama => "Kusama",
            SubstrateNetwork::Polkadot => "Polkadot",
            SubstrateNetwork::Westend => "Westend",
        }
    }

    /// 通过路径段名称查找网络
    pub fn from_path_id(path_id: &str) -> Option<Self> {
        PATH_ID_REGISTRY.get(path_id).copied()
    }
}

/// 路径段名称 → Substrate 网络（静态初始化）
static PATH_ID_REGISTRY: Lazy<HashMap<&'static str, SubstrateNetwork>> = Lazy::new(|| {
    SubstrateNetwork::ALL
        .into_iter()
        .map(|network| (network.path_id(), network))
        .collect()
});

/// 网络键：封闭的和类型，Unknown 是真实的变体而不是哨兵字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NetworkKey {
    Ethereum(EthereumNetwork),
    Substrate(SubstrateNetwork),
    Unknown,
}

impl NetworkKey {
    pub const FRONTIER: NetworkKey = NetworkKey::Ethereum(EthereumNetwork::Frontier);
    pub const KUSAMA: NetworkKey = NetworkKey::Substrate(SubstrateNetwork::Kusama);
    pub const POLKADOT: NetworkKey = NetworkKey::Substrate(SubstrateNetwork::Polkadot);
    pub const WESTEND: NetworkKey = NetworkKey::Substrate(SubstrateNetwork::Westend);

    pub fn is_ethereum(&self) -> bool {
        matches!(self, NetworkKey::Ethereum(_))
    }

    pub fn is_substrate(&self) -> bool {
        matches!(self, NetworkKey::Substrate(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            NetworkKey::Ethereum(network) => network.title(),
            NetworkKey::Substrate(network) => network.title(),
            NetworkKey::Unknown => "Unknown network",
        }
    }
}

impl fmt::Display for NetworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkKey::Ethereum(network) => write!(f, "{}", network.chain_id()),
            NetworkKey::Substrate(network) => f.write_str(network.genesis_hash()),
            NetworkKey::Unknown => f.write_str(UNKNOWN_NETWORK_KEY),
        }
    }
}

impl FromStr for NetworkKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNKNOWN_NETWORK_KEY {
            return Ok(NetworkKey::Unknown);
        }
        if let Some(network) = SubstrateNetwork::ALL
            .into_iter()
            .find(|n| n.genesis_hash() == s)
        {
            return Ok(NetworkKey::Substrate(network));
        }
        s.parse::<u64>()
            .ok()
            .and_then(EthereumNetwork::from_chain_id)
            .map(NetworkKey::Ethereum)
            .ok_or_else(|| format!("unknown network key: {}", s))
    }
}

impl From<NetworkKey> for String {
    fn from(key: NetworkKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for NetworkKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 根据派生路径解析网络键
///
/// 不会失败：无法识别的路径一律返回 `NetworkKey::Unknown`，
/// 旧数据和部分导入的数据仍然需要能被渲染。
pub fn resolve(path: &str) -> NetworkKey {
    match parse(path) {
        ParsedPath::Root => NetworkKey::Unknown,
        ParsedPath::Legacy(_) => NetworkKey::FRONTIER,
        ParsedPath::Hierarchical { network, .. } => match network {
            Junction::Hard(name) => match SubstrateNetwork::from_path_id(&name) {
                Some(network) => NetworkKey::Substrate(network),
                None => {
                    tracing::debug!(path, path_id = %name, "unrecognized network path id");
                    NetworkKey::Unknown
                }
            },
            Junction::Soft(_) => {
                tracing::debug!(path, "path starts with a soft junction, no network");
                NetworkKey::Unknown
            }
        },
    }
}

/// 收集身份中出现过的所有网络键
///
/// 按 `meta` 的插入顺序遍历路径，按首次出现顺序去重（值相等比较）。
pub fn known_network_keys_of(identity: &Identity) -> Vec<NetworkKey> {
    let keys: IndexSet<NetworkKey> = identity.meta.keys().map(|path| resolve(path)).collect();
    keys.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::AccountMeta;

    #[test]
    fn test_resolve_network_key() {
        assert_eq!(resolve(""), NetworkKey::Unknown);
        assert_eq!(resolve("//kusama"), NetworkKey::KUSAMA);
        assert_eq!(resolve("//kusama//derived//anything"), NetworkKey::KUSAMA);
        assert_eq!(resolve("//polkadot//default"), NetworkKey::POLKADOT);
        assert_eq!(resolve("1"), NetworkKey::FRONTIER);
        assert_eq!(resolve("//anything/could/be"), NetworkKey::Unknown);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("//Kusama"), NetworkKey::Unknown);
        assert_eq!(resolve("/kusama"), NetworkKey::Unknown);
        assert_eq!(resolve("//kusamax//default"), NetworkKey::Unknown);
    }

    #[test]
    fn test_network_key_string_form() {
        assert_eq!(NetworkKey::FRONTIER.to_string(), "1");
        assert_eq!(NetworkKey::Unknown.to_string(), "unknown");
        for network in SubstrateNetwork::ALL {
            let key = NetworkKey::Substrate(network);
            assert_eq!(key.to_string().parse::<NetworkKey>().unwrap(), key);
        }
        assert_eq!("61".parse::<NetworkKey>().unwrap().title(), "Ethereum Classic");
        assert!("0xdeadbeef".parse::<NetworkKey>().is_err());

        let json = serde_json::to_string(&NetworkKey::KUSAMA).unwrap();
        assert_eq!(json, format!("\"{}\"", SubstrateNetwork::Kusama.genesis_hash()));
        let back: NetworkKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NetworkKey::KUSAMA);
    }

    #[test]
    fn test_known_network_keys_first_occurrence() {
        let mut identity = Identity::empty();
        for (address, path) in [
            ("a1", "1"),
            ("a2", "//kusama"),
            ("a3", "//kusama//default"),
            ("a4", "//custom"),
        ] {
            identity.addresses.insert(address.to_string(), path.to_string());
            identity.meta.insert(
                path.to_string(),
                AccountMeta {
                    address: address.to_string(),
                    name: String::new(),
                    created_at: 0,
                    updated_at: 0,
                },
            );
        }

        assert_eq!(
            known_network_keys_of(&identity),
            vec![NetworkKey::FRONTIER, NetworkKey::KUSAMA, NetworkKey::Unknown]
        );
    }

    #[test]
    fn test_known_network_keys_empty_identity() {
        assert!(known_network_keys_of(&Identity::empty()).is_empty());
    }
}
