//! 测试辅助模块
//! 提供两个共享同一账户集合的身份样本

#![allow(dead_code)]

use signer_identity::{AccountMeta, Identity};

pub const PATHS: [&str; 10] = [
    "//kusama//default",
    "//kusama//funding/1",
    "//kusama/softKey1",
    "//kusama//funding/2",
    "//kusama//staking/1",
    "//polkadot//default",
    "1",
    "//kusama",
    "",
    "//custom",
];

pub const KUSAMA_PATHS: [&str; 6] = [
    "//kusama//default",
    "//kusama//funding/1",
    "//kusama/softKey1",
    "//kusama//funding/2",
    "//kusama//staking/1",
    "//kusama",
];

fn meta(address: &str, name: &str, created_at: i64, updated_at: i64) -> AccountMeta {
    AccountMeta {
        address: address.to_string(),
        name: name.to_string(),
        created_at,
        updated_at,
    }
}

/// 注意：`funding/2` 与 `staking/1` 的元数据是交叉登记的，
/// 用于验证编解码不会修复不一致的索引。
pub fn sample_identity(name: &str, encrypted_seed: &str) -> Identity {
    let addresses = [
        ("addressDefault", PATHS[0]),
        ("address1", PATHS[1]),
        ("address3", PATHS[2]),
        ("address2", PATHS[3]),
        ("address4", PATHS[4]),
        ("address5", PATHS[5]),
        ("address6", PATHS[6]),
        ("addressKusamaRoot", PATHS[7]),
        ("addressRoot", PATHS[8]),
        ("addressCustom", PATHS[9]),
    ];
    let metas = [
        meta("addressDefault", "", 1571068850409, 1571078850509),
        meta("address1", "funding account1", 1571068850409, 1571078850509),
        meta("address3", "", 1573142786972, 1573142786972),
        meta("address4", "", 1571068850409, 1571078850509),
        meta("address2", "", 1571068850409, 1571078850509),
        meta("address5", "PolkadotFirst", 1573142786972, 1573142786972),
        meta("address6", "Eth account", 1573142786972, 1573142786972),
        meta("addressKusamaRoot", "", 1573142786972, 1573142786972),
        meta("addressRoot", "", 1573142786972, 1573142786972),
        meta("addressCustom", "custom Path", 1571068850409, 1571068850409),
    ];

    Identity {
        name: name.to_string(),
        encrypted_seed: encrypted_seed.to_string(),
        derivation_password: String::new(),
        addresses: addresses
            .iter()
            .map(|(address, path)| (address.to_string(), path.to_string()))
            .collect(),
        meta: PATHS
            .iter()
            .map(|path| path.to_string())
            .zip(metas)
            .collect(),
    }
}

pub fn sample_identities() -> Vec<Identity> {
    vec![
        sample_identity("identity1", "yyyy"),
        sample_identity("identity2", "xxxx"),
    ]
}
