//! Substrate 风格派生路径语法
//!
//! - `""`：种子根账户
//! - 不以 `/` 开头（如 `"1"`）：旧式扁平索引，属于 Ethereum
//! - `//name` 硬派生段、`/name` 软派生段，首段标识网络，其后为子账户
//!
//! `parse` 是宽松解析，任何字符串都能得到 `ParsedPath`；
//! `DerivationPath::parse` 是严格解析，语法错误返回 `MalformedPath`。

use std::fmt;

use crate::domain::network_key::SubstrateNetwork;
use crate::error::{IdentityError, Result};

/// 单个派生段
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Junction {
    /// `//name`
    Hard(String),
    /// `/name`
    Soft(String),
}

impl Junction {
    pub fn name(&self) -> &str {
        match self {
            Junction::Hard(name) | Junction::Soft(name) => name,
        }
    }

    pub fn is_hard(&self) -> bool {
        matches!(self, Junction::Hard(_))
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Junction::Hard(name) => write!(f, "//{}", name),
            Junction::Soft(name) => write!(f, "/{}", name),
        }
    }
}

/// 解析后的派生路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPath {
    Root,
    Legacy(String),
    Hierarchical {
        /// 首段，标识网络
        network: Junction,
        /// 其后的子账户段
        segments: Vec<Junction>,
    },
}

impl ParsedPath {
    /// 首段是硬派生且命中 Substrate 目录时返回该网络
    pub fn substrate_network(&self) -> Option<SubstrateNetwork> {
        match self {
            ParsedPath::Hierarchical {
                network: Junction::Hard(name),
                ..
            } => SubstrateNetwork::from_path_id(name),
            _ => None,
        }
    }

    /// 去掉首段后的剩余部分（保留斜杠形式）
    pub fn sub_path(&self) -> String {
        match self {
            ParsedPath::Root => String::new(),
            ParsedPath::Legacy(index) => index.clone(),
            ParsedPath::Hierarchical { segments, .. } => {
                segments.iter().map(ToString::to_string).collect()
            }
        }
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedPath::Root => Ok(()),
            ParsedPath::Legacy(index) => f.write_str(index),
            ParsedPath::Hierarchical { network, segments } => {
                write!(f, "{}", network)?;
                for segment in segments {
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
        }
    }
}

/// 把以 `/` 开头的字符串切分为派生段
///
/// `//` 开启硬派生段，单个 `/` 开启软派生段，名称延伸到下一个 `/`。
/// 空名称会被保留（如 `"///x"` → `Hard("")`, `Soft("x")`），交给严格解析判定。
fn split_junctions(path: &str) -> Vec<Junction> {
    let mut junctions = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        let (hard, body) = match rest.strip_prefix("//") {
            Some(body) => (true, body),
            None => (false, rest.strip_prefix('/').unwrap_or(rest)),
        };
        let end = body.find('/').unwrap_or(body.len());
        let name = body[..end].to_string();
        junctions.push(if hard {
            Junction::Hard(name)
        } else {
            Junction::Soft(name)
        });
        rest = &body[end..];
    }

    junctions
}

/// 宽松解析：永不失败
pub fn parse(path: &str) -> ParsedPath {
    if path.is_empty() {
        return ParsedPath::Root;
    }
    if !path.starts_with('/') {
        return ParsedPath::Legacy(path.to_string());
    }

    let mut junctions = split_junctions(path).into_iter();
    match junctions.next() {
        Some(network) => ParsedPath::Hierarchical {
            network,
            segments: junctions.collect(),
        },
        None => ParsedPath::Root,
    }
}

/// 经过严格校验的派生路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    raw: String,
    parsed: ParsedPath,
}

impl DerivationPath {
    /// 严格解析
    ///
    /// # 错误
    /// - 任一派生段名称为空（`"/"`、`"//"`、`"///x"`、末尾多余的 `/`）
    /// - 旧式索引中包含 `/`
    pub fn parse(path: &str) -> Result<Self> {
        let parsed = parse(path);

        match &parsed {
            ParsedPath::Root => {}
            ParsedPath::Legacy(index) => {
                if index.contains('/') {
                    return Err(IdentityError::malformed_path(
                        path,
                        "legacy index must not contain '/'",
                    ));
                }
            }
            ParsedPath::Hierarchical { network, segments } => {
                if let Some(position) = std::iter::once(network)
                    .chain(segments.iter())
                    .position(|junction| junction.name().is_empty())
                {
                    return Err(IdentityError::malformed_path(
                        path,
                        format!("empty junction name at segment {}", position),
                    ));
                }
            }
        }

        Ok(Self {
            raw: path.to_string(),
            parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> &ParsedPath {
        &self.parsed
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for DerivationPath {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// 路径首个硬派生段的名称
pub fn network_path_id(path: &str) -> Option<&str> {
    let body = path.strip_prefix("//")?;
    let end = body.find('/').unwrap_or(body.len());
    Some(&body[..end])
}

/// 路径的显示名称
///
/// 首段为已知网络时返回网络段之后的剩余部分（去掉开头的斜杠），
/// 否则返回整条路径去掉开头斜杠后的内容。
pub fn segment_name(path: &str) -> String {
    let parsed = parse(path);
    if parsed.substrate_network().is_some() {
        parsed.sub_path().trim_start_matches('/').to_string()
    } else {
        path.trim_start_matches('/').to_string()
    }
}

/// 去掉首个网络段后是否为空
pub fn is_root_path(path: &str) -> bool {
    match parse(path) {
        ParsedPath::Root => true,
        ParsedPath::Legacy(_) => false,
        ParsedPath::Hierarchical { segments, .. } => segments.is_empty(),
    }
}
