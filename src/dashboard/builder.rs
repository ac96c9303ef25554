use crate::dashboard::catalog::*;
use crate::models::sidebar::{Environment, QuickAction, QuickActionEntry};
use crate::models::snapshot::*;
use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Builds a fresh `DashboardSnapshot` per render.
///
/// With a seed every call yields the same trend series; without one each call
/// draws a new seed.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    seed: Option<u64>,
}

impl SnapshotBuilder {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn build(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);

        debug!(seeded = self.seed.is_some(), "Building dashboard snapshot");

        build_snapshot(now, &mut rng)
    }
}

/// Assemble every dataset. Total for any `now` whose 90-day window is representable.
pub fn build_snapshot<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> DashboardSnapshot {
    DashboardSnapshot {
        generated_at: now,
        summary: summary_tiles(),
        overview: overview_tab(),
        cicd: cicd_tab(),
        scans: scans_tab(),
        compliance: compliance_tab(),
        trends: trends_tab(now.date_naive(), rng),
        sidebar: sidebar(),
    }
}

/// Open KICS findings: everything in the distribution except passed checks
pub fn kics_open_findings() -> u32 {
    KICS_DISTRIBUTION
        .iter()
        .filter(|(label, _)| *label != "Passed")
        .map(|(_, count)| count)
        .sum()
}

fn summary_tiles() -> Vec<MetricTile> {
    SUMMARY_TILES
        .iter()
        .map(|&(key, label, status)| {
            let value = match key {
                "aws_accounts" => AWS_ACCOUNTS.to_string(),
                "policies_in_git" => POLICIES_IN_GIT.to_string(),
                "policy_compliance" => format!("{:.1}%", POLICY_COMPLIANCE_PCT),
                "open_prs" => OPEN_PRS.to_string(),
                "kics_findings" => kics_open_findings().to_string(),
                _ => (if PIPELINE_HEALTHY { "✓" } else { "✗" }).to_string(),
            };
            MetricTile { key, label, value, status }
        })
        .collect()
}

fn overview_tab() -> OverviewTab {
    OverviewTab {
        architecture: ARCHITECTURE.to_vec(),
        architecture_caption: format!(
            "Policies defined as code in GitHub • Validated by KICS & OPA on every PR • \
             Deployed via Terraform to {} AWS accounts across {} portfolios",
            AWS_ACCOUNTS, PORTFOLIOS
        ),
        policy_distribution: counts(&POLICY_DISTRIBUTION),
        quick_links: QUICK_LINKS
            .iter()
            .map(|&(title, headline, detail)| QuickLink { title, headline, detail })
            .collect(),
        framework_compliance: FRAMEWORK_SCORES
            .iter()
            .map(|&(label, score)| CategoryScore {
                label,
                score,
                // Frameworks only distinguish on-target from below-target
                status: if score >= COMPLIANCE_TARGET { Status::Healthy } else { Status::Warning },
            })
            .collect(),
    }
}

fn cicd_tab() -> CiCdTab {
    CiCdTab {
        stages: PIPELINE_STAGES
            .iter()
            .map(|&(name, status, duration)| PipelineStage { name, status, duration })
            .collect(),
        pull_requests: PULL_REQUESTS
            .iter()
            .map(|&(number, title, author, state, checks, age)| PullRequest {
                number,
                title,
                author,
                state,
                checks,
                age,
            })
            .collect(),
        weekly_runs: MultiSeries {
            labels: WEEKDAYS.to_vec(),
            series: vec![
                series("Total Runs", &PIPELINE_RUNS),
                series("Failures", &PIPELINE_FAILURES),
            ],
        },
        repository_layout: REPOSITORY_LAYOUT,
    }
}

fn scans_tab() -> ScansTab {
    let distribution = counts(&KICS_DISTRIBUTION);
    let total_checks = distribution.iter().map(|c| c.count).sum();

    ScansTab {
        kics: KicsPanel {
            stats: stats(&KICS_STATS),
            distribution,
            total_checks,
            top_findings: KICS_FINDINGS
                .iter()
                .map(|&(severity, query, file, line)| ScanFinding { severity, query, file, line })
                .collect(),
        },
        opa: OpaPanel {
            stats: stats(&OPA_STATS),
            evaluations: OPA_EVALUATIONS
                .iter()
                .map(|&(name, verdict, resources)| PolicyEvaluation { name, verdict, resources })
                .collect(),
            sample_policy: SAMPLE_REGO,
        },
    }
}

fn compliance_tab() -> ComplianceTab {
    ComplianceTab {
        org_units: ORG_UNITS
            .iter()
            .map(|&(name, score, accounts)| OrgUnitCompliance {
                name,
                score,
                accounts,
                status: Status::for_score(score),
            })
            .collect(),
        guardrails: GUARDRAILS
            .iter()
            .map(|&(name, kind, accounts)| Guardrail {
                name,
                kind,
                active: true,
                accounts,
            })
            .collect(),
        config_rules: CONFIG_RULES
            .iter()
            .map(|&(rule, compliant, non_compliant, last_evaluated)| ConfigRuleRow {
                rule,
                compliant,
                non_compliant,
                compliance_pct: compliance_pct(compliant, non_compliant),
                last_evaluated,
            })
            .collect(),
    }
}

fn trends_tab<R: Rng>(today: NaiveDate, rng: &mut R) -> TrendsTab {
    TrendsTab {
        compliance_score: compliance_trend(today, rng),
        compliance_target: COMPLIANCE_TARGET,
        findings: MultiSeries {
            labels: WEEKS.to_vec(),
            series: vec![
                series("Critical", &FINDINGS_CRITICAL),
                series("High", &FINDINGS_HIGH),
                series("Medium", &FINDINGS_MEDIUM),
            ],
        },
        deployments: MultiSeries {
            labels: MONTHS.to_vec(),
            series: vec![
                series("SCP Deployments", &SCP_DEPLOYS),
                series("Config Rules", &CONFIG_DEPLOYS),
                series("OPA Policy Updates", &OPA_UPDATES),
            ],
        },
    }
}

/// One point per day for `TREND_DAYS` days ending on `today`. The last point is
/// pinned to the headline compliance figure.
fn compliance_trend<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<DatedValue> {
    let start = today
        .checked_sub_days(Days::new(TREND_DAYS as u64 - 1))
        .expect("snapshot timestamp leaves no room for a 90-day trend window");

    let mut points: Vec<DatedValue> = start
        .iter_days()
        .take(TREND_DAYS)
        .enumerate()
        .map(|(day, date)| DatedValue {
            date,
            value: TREND_BASE
                + TREND_SLOPE * day as f64
                + rng.random_range(-TREND_JITTER..TREND_JITTER),
        })
        .collect();

    if let Some(last) = points.last_mut() {
        last.value = POLICY_COMPLIANCE_PCT;
    }

    points
}

fn sidebar() -> Sidebar {
    Sidebar {
        quick_actions: QuickAction::ALL.into_iter().map(QuickActionEntry::from).collect(),
        components: SYSTEM_COMPONENTS
            .iter()
            .map(|&name| ComponentStatus { name, connected: true })
            .collect(),
        environments: Environment::ALL.iter().map(Environment::as_str).collect(),
        version: VERSION,
        edition: EDITION,
    }
}

fn counts(table: &[(&'static str, u32)]) -> Vec<CategoryCount> {
    table
        .iter()
        .map(|&(label, count)| CategoryCount { label, count })
        .collect()
}

fn stats(table: &[(&'static str, u32, Option<i32>)]) -> Vec<StatDelta> {
    table
        .iter()
        .map(|&(label, value, delta)| StatDelta { label, value, delta })
        .collect()
}

fn series(name: &'static str, values: &[u32]) -> Series {
    Series {
        name,
        values: values.iter().map(|&v| f64::from(v)).collect(),
    }
}

/// Share of compliant resources, rounded to one decimal
fn compliance_pct(compliant: u32, non_compliant: u32) -> f64 {
    let total = compliant + non_compliant;
    if total == 0 {
        return 100.0;
    }
    (f64::from(compliant) / f64::from(total) * 1000.0).round() / 10.0
}
