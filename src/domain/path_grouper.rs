//! 派生路径分组
//!
//! 把扁平的路径列表聚合成账户列表的显示分组：
//! - 已知网络下的路径按“网络段 + 其后第一个派生段”分组，标题为该派生段（`//default`、`/softKey1`、`//funding`）
//! - 首段不是已知网络的路径、旧式索引，按显示名称分组（`custom`、`1`）
//! - `""` 与已知网络的根路径（如 `//kusama`）不产生分组
//!
//! 分组按首次出现顺序建立，组内保持输入顺序，最后按成员数量升序稳定排序。

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::derivation_path::{parse, segment_name, ParsedPath};

/// 显示分组，仅用于渲染，不会持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathGroup {
    pub title: String,
    pub paths: Vec<String>,
}

/// 分组键：网络前缀 + 类别段，标题只是它的显示形式
///
/// 不同网络下同名的类别（`//kusama//default` 与 `//polkadot//default`）属于不同分组。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    network: String,
    category: String,
}

/// 计算路径所属分组的键与标题，`None` 表示该路径不参与分组
fn group_key(path: &str) -> Option<(GroupKey, String)> {
    let parsed = parse(path);
    match &parsed {
        ParsedPath::Root => None,
        ParsedPath::Legacy(_) => {
            let title = segment_name(path);
            Some((
                GroupKey {
                    network: String::new(),
                    category: title.clone(),
                },
                title,
            ))
        }
        ParsedPath::Hierarchical { network, segments } => {
            let title = if parsed.substrate_network().is_none() {
                segment_name(path)
            } else {
                segments.first()?.to_string()
            };
            Some((
                GroupKey {
                    network: network.to_string(),
                    category: title.clone(),
                },
                title,
            ))
        }
    }
}

/// 对路径列表分组
pub fn group_paths<S: AsRef<str>>(paths: &[S]) -> Vec<PathGroup> {
    let mut grouped: IndexMap<GroupKey, PathGroup> = IndexMap::new();

    for path in paths {
        let path = path.as_ref();
        match group_key(path) {
            Some((key, title)) => grouped
                .entry(key)
                .or_insert_with(|| PathGroup {
                    title,
                    paths: Vec::new(),
                })
                .paths
                .push(path.to_string()),
            None => tracing::trace!(path, "path skipped from grouping"),
        }
    }

    let mut groups: Vec<PathGroup> = grouped.into_values().collect();
    groups.sort_by_key(|group| group.paths.len());

    tracing::debug!(
        input = paths.len(),
        groups = groups.len(),
        "grouped derivation paths"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(title: &str, paths: &[&str]) -> PathGroup {
        PathGroup {
            title: title.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_group_kusama_paths() {
        let paths = [
            "//kusama//default",
            "//kusama//funding/1",
            "//kusama/softKey1",
            "//kusama//funding/2",
            "//kusama//staking/1",
            "//kusama",
        ];
        assert_eq!(
            group_paths(&paths),
            vec![
                group("//default", &["//kusama//default"]),
                group("/softKey1", &["//kusama/softKey1"]),
                group("//staking", &["//kusama//staking/1"]),
                group("//funding", &["//kusama//funding/1", "//kusama//funding/2"]),
            ]
        );
    }

    #[test]
    fn test_group_unknown_paths() {
        let paths = ["//polkadot//default", "", "//custom"];
        assert_eq!(
            group_paths(&paths),
            vec![
                group("//default", &["//polkadot//default"]),
                group("custom", &["//custom"]),
            ]
        );
    }

    #[test]
    fn test_group_is_deterministic() {
        let paths = vec![
            "//kusama//b/1".to_string(),
            "//kusama//a/1".to_string(),
            "//kusama//b/2".to_string(),
            "//kusama//c".to_string(),
            "//kusama//a/2".to_string(),
        ];
        let first = group_paths(&paths);
        for _ in 0..10 {
            assert_eq!(group_paths(&paths), first);
        }
        assert_eq!(first[0].title, "//c");
        assert_eq!(first[1].title, "//b");
        assert_eq!(first[2].title, "//a");
    }

    #[test]
    fn test_group_heterogeneous_suffixes_share_category() {
        let paths = ["//kusama//funding/1", "//kusama//funding//x", "//kusama//funding"];
        assert_eq!(
            group_paths(&paths),
            vec![group("//funding", &paths)]
        );
    }

    #[test]
    fn test_same_category_on_different_networks_stays_apart() {
        let paths = ["//kusama//default", "//polkadot//default", "//kusama//default/2"];
        assert_eq!(
            group_paths(&paths),
            vec![
                group("//default", &["//polkadot//default"]),
                group("//default", &["//kusama//default", "//kusama//default/2"]),
            ]
        );
    }

    #[test]
    fn test_group_legacy_and_empty_input() {
        assert_eq!(group_paths(&["1", ""]), vec![group("1", &["1"])]);
        assert!(group_paths::<&str>(&[]).is_empty());
    }
}
