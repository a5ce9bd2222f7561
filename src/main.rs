//! signer-identity 检查工具
//! 读取序列化的身份列表，输出每个身份的网络与账户分组

use anyhow::{Context, Result};
use serde::Serialize;
use signer_identity::{
    config::Config, domain::identity_codec::from_json_str, infrastructure::logging, IdentityIndex,
    NetworkKey, PathGroup,
};

#[derive(Debug, Default)]
struct Args {
    file: Option<String>,
    config: Option<String>,
}

fn parse_args<I>(args: I, config: Option<String>) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args {
        config,
        ..Args::default()
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => parsed.file = args.next(),
            "--config" => parsed.config = args.next(),
            other => anyhow::bail!("unknown argument: {}", other),
        }
    }

    Ok(parsed)
}

#[derive(Serialize)]
struct NetworkReport {
    network: NetworkKey,
    title: &'static str,
    groups: Vec<PathGroup>,
}

#[derive(Serialize)]
struct IdentityReport<'a> {
    name: &'a str,
    networks: Vec<NetworkReport>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = parse_args(std::env::args().skip(1), std::env::var("CONFIG_PATH").ok())?;
    let config = Config::from_env_and_file(args.config.as_deref())?;
    config.validate()?;

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let file = args
        .file
        .context("missing --file <serialized identities json>")?;
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read identities file: {}", file))?;
    let identities = from_json_str(&text)
        .with_context(|| format!("Failed to load identities from {}", file))?;
    tracing::info!(count = identities.len(), file = %file, "identities loaded");

    let mut reports = Vec::with_capacity(identities.len());
    for identity in &identities {
        if let Err(e) = identity.check_consistency() {
            tracing::warn!(identity = %identity.name, error = %e, "identity index is inconsistent");
        }

        let index = IdentityIndex::new(identity);
        let networks = index
            .existed_network_keys()
            .into_iter()
            .map(|network| NetworkReport {
                network,
                title: network.title(),
                groups: index.grouped_paths_with_network(network),
            })
            .collect();

        reports.push(IdentityReport {
            name: &identity.name,
            networks,
        });
    }

    let output = if config.codec.pretty_json {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", output);

    Ok(())
}
