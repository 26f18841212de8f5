use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::store::{User, UserStore};

/// Record count and per-level breakdown. Never carries passwords.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UsersSummary {
    pub total: usize,
    pub levels: BTreeMap<String, usize>,
    pub duplicate_usernames: Vec<String>,
}

impl UsersSummary {
    pub fn from_users(users: &[User]) -> Self {
        let mut levels = BTreeMap::new();
        let mut seen = BTreeMap::new();
        for user in users {
            *levels.entry(user.level.clone()).or_insert(0) += 1;
            *seen.entry(user.username.as_str()).or_insert(0usize) += 1;
        }

        let duplicate_usernames = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.to_string())
            .collect();

        Self {
            total: users.len(),
            levels,
            duplicate_usernames,
        }
    }
}

pub async fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = UserStore::new(&config.store.users_file);
    let users = store.load().await?;
    let summary = UsersSummary::from_users(&users);

    match output_format {
        OutputFormat::Json => {
            let out = json!({
                "success": true,
                "data": {
                    "path": store.path().display().to_string(),
                    "summary": summary,
                }
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("{}: {} user(s)", store.path().display(), summary.total);
            for (level, count) in &summary.levels {
                println!("  {:<12} {}", level, count);
            }
            if !summary.duplicate_usernames.is_empty() {
                // Later duplicates are only reachable with a different password
                println!(
                    "  duplicate usernames (first record wins): {}",
                    summary.duplicate_usernames.join(", ")
                );
            }
        }
    }

    Ok(())
}
