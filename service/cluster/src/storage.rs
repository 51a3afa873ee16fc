//! Home and scratch usage of one user, read from a small shell probe.
//!
//! The probe prints four numbers per directory, in this order: `du` used
//! bytes, then `df` size, used and available bytes. Home comes first, scratch
//! second, so the output holds either 4 or 8 tokens.

use domain_cluster::exception::{ParseException, ParseResult};
use domain_cluster::model::entity::StorageUsageRecord;

use crate::unit;

pub const HOME_LABEL: &str = "Home Directory";
pub const SCRATCH_LABEL: &str = "Scratch Directory";
pub const DEFAULT_HOME_ROOT: &str = "/home";
pub const DEFAULT_SCRATCH_ROOT: &str = "/scratch";

/// Run as `sh -c PROBE_SCRIPT sh <dir>...`. A missing directory prints zeros
/// so later directories keep their position.
pub const PROBE_SCRIPT: &str = r#"for dir in "$@"; do
  if [ -d "$dir" ]; then
    used=$(du -sb "$dir" 2>/dev/null | cut -f1)
    echo "${used:-0}"
    df -B1 --output=size,used,avail "$dir" 2>/dev/null | tail -n 1
  else
    echo 0 0 0 0
  fi
done"#;

const TOKENS_PER_VOLUME: usize = 4;

/// Where the user's volumes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub user: String,
    pub home_root: String,
    /// `None` when the site has no scratch file system.
    pub scratch_root: Option<String>,
}

impl StorageLayout {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            home_root: DEFAULT_HOME_ROOT.to_owned(),
            scratch_root: Some(DEFAULT_SCRATCH_ROOT.to_owned()),
        }
    }

    pub fn home_dir(&self) -> String {
        join(&self.home_root, &self.user)
    }

    pub fn scratch_dir(&self) -> Option<String> {
        self.scratch_root.as_deref().map(|root| join(root, &self.user))
    }

    /// Arguments for the shell that runs [`PROBE_SCRIPT`].
    pub fn probe_args(&self) -> Vec<String> {
        let mut args = vec!["-c".to_owned(), PROBE_SCRIPT.to_owned(), "sh".to_owned()];
        args.push(self.home_dir());
        args.extend(self.scratch_dir());
        args
    }
}

fn join(root: &str, user: &str) -> String {
    format!("{}/{user}", root.trim_end_matches('/'))
}

/// Split probe output into byte counts. Anything but 4 or 8 size tokens is an
/// error. Tokens may carry a unit suffix; fractions of a byte are dropped.
pub fn tokenize(output: &str) -> ParseResult<Vec<u64>> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    if tokens.len() != TOKENS_PER_VOLUME && tokens.len() != 2 * TOKENS_PER_VOLUME {
        return Err(ParseException::TokenCount {
            count: tokens.len(),
        });
    }
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            unit::to_bytes(token)
                .map(|bytes| bytes as u64)
                .ok()
                .ok_or_else(|| ParseException::InvalidToken {
                    position,
                    token: (*token).to_owned(),
                })
        })
        .collect()
}

/// Turn probe output into usage records, omitting volumes of size zero.
pub fn parse_storage(output: &str, layout: &StorageLayout) -> ParseResult<Vec<StorageUsageRecord>> {
    let numbers = tokenize(output)?;
    let scratch_dir = layout
        .scratch_dir()
        .unwrap_or_else(|| join(DEFAULT_SCRATCH_ROOT, &layout.user));
    let volumes = [(HOME_LABEL, layout.home_dir()), (SCRATCH_LABEL, scratch_dir)];

    Ok(numbers
        .chunks(TOKENS_PER_VOLUME)
        .zip(volumes)
        .filter(|(values, _)| values[1] > 0)
        .map(|(values, (label, path))| StorageUsageRecord {
            mount_point: label.to_owned(),
            path,
            total: values[1],
            used: values[0],
            available: values[3],
        })
        .collect())
}
