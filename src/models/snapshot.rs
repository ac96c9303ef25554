// View-model types handed to the presentation layer

use crate::models::account::Role;
use crate::models::session::Session;
use crate::models::sidebar::QuickActionEntry;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Colour band of a tile, score or bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Info,
    Warning,
    Critical,
}

impl Status {
    /// >= 90 healthy, >= 80 warning, otherwise critical
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            Status::Healthy
        } else if score >= 80.0 {
            Status::Warning
        } else {
            Status::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Healthy => "healthy",
            Status::Info => "info",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricTile {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: &'static str,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryScore {
    pub label: &'static str,
    pub score: f64,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Shared category axis with one or more value series of the same length
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MultiSeries {
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl MultiSeries {
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// A stat with an optional change indicator (st.metric style)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatDelta {
    pub label: &'static str,
    pub value: u32,
    pub delta: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickLink {
    pub title: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Success,
    Running,
    Pending,
    Failed,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Success => "success",
            StageStatus::Running => "running",
            StageStatus::Pending => "pending",
            StageStatus::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub status: StageStatus,
    pub duration: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Merged,
    Open,
    Failed,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Merged => "merged",
            PrState::Open => "open",
            PrState::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PullRequest {
    pub number: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub state: PrState,
    pub checks: &'static str,
    pub age: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    /// Badge colour; low findings share the info colour
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScanFinding {
    pub severity: Severity,
    pub query: &'static str,
    pub file: &'static str,
    pub line: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    Warn,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Warn => "WARN",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
            Verdict::Warn => "warn",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyEvaluation {
    pub name: &'static str,
    pub verdict: Verdict,
    pub resources: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GuardrailKind {
    #[serde(rename = "SCP")]
    Scp,
    Config,
}

impl GuardrailKind {
    pub fn label(&self) -> &'static str {
        match self {
            GuardrailKind::Scp => "SCP",
            GuardrailKind::Config => "Config",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Guardrail {
    pub name: &'static str,
    pub kind: GuardrailKind,
    pub active: bool,
    pub accounts: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrgUnitCompliance {
    pub name: &'static str,
    pub score: f64,
    pub accounts: u32,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigRuleRow {
    pub rule: &'static str,
    pub compliant: u32,
    pub non_compliant: u32,
    pub compliance_pct: f64,
    pub last_evaluated: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub connected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewTab {
    pub architecture: Vec<&'static str>,
    pub architecture_caption: String,
    pub policy_distribution: Vec<CategoryCount>,
    pub quick_links: Vec<QuickLink>,
    pub framework_compliance: Vec<CategoryScore>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CiCdTab {
    pub stages: Vec<PipelineStage>,
    pub pull_requests: Vec<PullRequest>,
    pub weekly_runs: MultiSeries,
    pub repository_layout: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KicsPanel {
    pub stats: Vec<StatDelta>,
    pub distribution: Vec<CategoryCount>,
    pub total_checks: u32,
    pub top_findings: Vec<ScanFinding>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpaPanel {
    pub stats: Vec<StatDelta>,
    pub evaluations: Vec<PolicyEvaluation>,
    pub sample_policy: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScansTab {
    pub kics: KicsPanel,
    pub opa: OpaPanel,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComplianceTab {
    pub org_units: Vec<OrgUnitCompliance>,
    pub guardrails: Vec<Guardrail>,
    pub config_rules: Vec<ConfigRuleRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendsTab {
    pub compliance_score: Vec<DatedValue>,
    pub compliance_target: f64,
    pub findings: MultiSeries,
    pub deployments: MultiSeries,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sidebar {
    pub quick_actions: Vec<QuickActionEntry>,
    pub components: Vec<ComponentStatus>,
    pub environments: Vec<&'static str>,
    pub version: &'static str,
    pub edition: &'static str,
}

/// Everything one render pass displays. Datasets are independent of each other.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub summary: Vec<MetricTile>,
    pub overview: OverviewTab,
    pub cicd: CiCdTab,
    pub scans: ScansTab,
    pub compliance: ComplianceTab,
    pub trends: TrendsTab,
    pub sidebar: Sidebar,
}

/// Signed-in user shown in the page header
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewHeader {
    pub display_name: String,
    pub role: Role,
    pub role_label: String,
}

impl ViewHeader {
    pub fn from_session(session: &Session) -> Self {
        Self {
            display_name: session.display_name.clone(),
            role: session.role,
            role_label: session.role.display_label(),
        }
    }
}
