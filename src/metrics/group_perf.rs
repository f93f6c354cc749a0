use anyhow::Result;

use crate::client::MarketClient;
use crate::model::{AssetGroup, HistoryPoint, Interval};

use super::fetch::{self, FetchPolicy, REQUEST_SPACING};
use super::performance::normalized_performance;

/// What happened to one group member. Skips carry the reason so a flaky
/// upstream never silently thins out an average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberOutcome {
    Included { id: String },
    Skipped { id: String, reason: String },
}

impl MemberOutcome {
    pub fn id(&self) -> &str {
        match self {
            MemberOutcome::Included { id } | MemberOutcome::Skipped { id, .. } => id,
        }
    }
}

/// Pointwise average of member normalized performance over a shared
/// timestamp grid.
#[derive(Debug, Clone)]
pub struct GroupPerformance {
    pub label: String,
    pub times_ms: Vec<i64>,
    pub average: Vec<f64>,
    pub members: Vec<MemberOutcome>,
}

impl GroupPerformance {
    pub fn included_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| matches!(m, MemberOutcome::Included { .. }))
            .count()
    }
}

/// Average the members of one group.
///
/// The first member with a usable history defines the group's reference
/// timestamp grid; members whose series diverge from it (length or
/// timestamps) are skipped rather than averaged positionally against
/// misaligned buckets. Fetch failures arrive as `Err(reason)` and are
/// skipped the same way.
pub fn aggregate_group(
    label: &str,
    fetched: Vec<(String, Result<Vec<HistoryPoint>, String>)>,
) -> GroupPerformance {
    let mut grid: Vec<i64> = Vec::new();
    let mut sums: Vec<f64> = Vec::new();
    let mut included = 0usize;
    let mut members = Vec::with_capacity(fetched.len());

    for (id, result) in fetched {
        let points = match result {
            Ok(points) => points,
            Err(reason) => {
                members.push(MemberOutcome::Skipped { id, reason });
                continue;
            }
        };

        let perf = match normalized_performance(&points) {
            Ok(perf) => perf,
            Err(e) => {
                members.push(MemberOutcome::Skipped {
                    id,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if grid.is_empty() {
            grid = points.iter().map(|p| p.time_ms).collect();
            sums = vec![0.0; grid.len()];
        } else if !matches_grid(&grid, &points) {
            members.push(MemberOutcome::Skipped {
                id,
                reason: format!(
                    "history grid mismatch: expected {} buckets on the group grid, got {}",
                    grid.len(),
                    points.len()
                ),
            });
            continue;
        }

        for (sum, v) in sums.iter_mut().zip(&perf) {
            *sum += v;
        }
        included += 1;
        members.push(MemberOutcome::Included { id });
    }

    let average = if included > 0 {
        sums.iter().map(|s| s / included as f64).collect()
    } else {
        Vec::new()
    };

    GroupPerformance {
        label: label.to_string(),
        times_ms: if included > 0 { grid } else { Vec::new() },
        average,
        members,
    }
}

fn matches_grid(grid: &[i64], points: &[HistoryPoint]) -> bool {
    points.len() == grid.len() && points.iter().zip(grid).all(|(p, &t)| p.time_ms == t)
}

/// Fetch every member of every group and aggregate. Partial-failure
/// tolerant (`FetchPolicy::SkipFailed`): a failing member reduces the
/// group's member count and nothing else.
pub async fn group_performance(
    client: &MarketClient,
    groups: &[AssetGroup],
    lookback_days: u32,
    interval: Interval,
) -> Result<Vec<GroupPerformance>> {
    let (start_ms, end_ms) = fetch::lookback_window_ms(lookback_days);
    let mut out = Vec::with_capacity(groups.len());

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(REQUEST_SPACING).await;
        }
        let fetched = fetch::fetch_many_histories(
            client,
            &group.members,
            interval,
            start_ms,
            end_ms,
            FetchPolicy::SkipFailed,
        )
        .await?;

        let aggregated = aggregate_group(&group.label, fetched);
        for member in &aggregated.members {
            if let MemberOutcome::Skipped { id, reason } = member {
                tracing::warn!(group = %group.label, member = %id, %reason, "skipping group member");
            }
        }
        out.push(aggregated);
    }

    Ok(out)
}
