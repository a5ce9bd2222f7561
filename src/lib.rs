//! signer-identity - 硬件隔离签名设备的身份与派生路径核心
//!
//! 纯计算：不签名、不生成种子、不做安全存储，只处理路径语法、网络解析、
//! 身份编解码与账户分组。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;

// 重新导出常用类型
pub use domain::network_key::resolve as get_network_key_by_path;
pub use domain::{
    deserialize_identities, group_paths, serialize_identities, AccountMeta, Identity,
    NetworkKey, PathGroup,
};
pub use error::{IdentityError, IdentityErrorCode, Result};
pub use service::{get_existed_network_keys, get_path_name, IdentityIndex};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        domain::{
            DerivationPath, EthereumNetwork, Identity, NetworkKey, ParsedPath, PathGroup,
            SubstrateNetwork,
        },
        error::{IdentityError, Result},
        service::IdentityIndex,
    };
}
