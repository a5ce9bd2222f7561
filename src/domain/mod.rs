//! Domain 模块
//!
//! 派生路径语法、网络目录、身份模型、编解码与分组

pub mod derivation_path;
pub mod identity;
pub mod identity_codec;
pub mod network_key;
pub mod path_grouper;

// 重新导出常用类型
pub use derivation_path::{
    is_root_path, network_path_id, parse, segment_name, DerivationPath, Junction, ParsedPath,
};
pub use identity::{AccountMeta, Identity};
pub use identity_codec::{deserialize_identities, from_json_str, serialize_identities, to_json_string};
pub use network_key::{
    known_network_keys_of, resolve, EthereumNetwork, NetworkKey, SubstrateNetwork,
};
pub use path_grouper::{group_paths, PathGroup};
