//! 身份索引服务
//!
//! 面向 UI 的组合接口：路径语法 + 网络目录 + 分组，作用于单个身份的
//! `addresses` / `meta`。自身不持有状态，只借用传入的身份。

use crate::domain::derivation_path::segment_name;
use crate::domain::identity::Identity;
use crate::domain::network_key::{known_network_keys_of, NetworkKey};
use crate::domain::path_grouper::{group_paths, PathGroup};

/// 路径显示名称
///
/// 元数据中名称非空时原样返回（仅空白也算非空），否则回退到路径语法推导的名称。
pub fn get_path_name(path: &str, identity: &Identity) -> String {
    match identity.meta.get(path) {
        Some(meta) if !meta.name.is_empty() => meta.name.clone(),
        _ => segment_name(path),
    }
}

/// 身份中出现过的网络键（首次出现顺序）
pub fn get_existed_network_keys(identity: &Identity) -> Vec<NetworkKey> {
    known_network_keys_of(identity)
}

/// 单个身份的只读视图
#[derive(Debug, Clone, Copy)]
pub struct IdentityIndex<'a> {
    identity: &'a Identity,
}

impl<'a> IdentityIndex<'a> {
    pub fn new(identity: &'a Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &'a Identity {
        self.identity
    }

    pub fn path_name(&self, path: &str) -> String {
        get_path_name(path, self.identity)
    }

    pub fn existed_network_keys(&self) -> Vec<NetworkKey> {
        get_existed_network_keys(self.identity)
    }

    pub fn address_with_path(&self, path: &str) -> Option<&'a str> {
        self.identity.address_with_path(path)
    }

    pub fn paths_with_network(&self, network_key: NetworkKey) -> Vec<&'a str> {
        self.identity.paths_with_network(network_key)
    }

    /// 某个网络下账户列表的显示分组
    pub fn grouped_paths_with_network(&self, network_key: NetworkKey) -> Vec<PathGroup> {
        group_paths(&self.paths_with_network(network_key))
    }
}
