//! Literal datasets shown on the dashboard.
//!
//! Everything here is illustrative. Integration names (GitHub, Terraform, KICS,
//! OPA, AWS) are labels only.

use crate::models::snapshot::{
    GuardrailKind, PrState, Severity, StageStatus, Status, Verdict,
};

pub const VERSION: &str = "2.0.0";
pub const EDITION: &str = "Policy as Code Edition";

pub const AWS_ACCOUNTS: u32 = 487;
pub const PORTFOLIOS: u32 = 8;
pub const POLICIES_IN_GIT: u32 = 156;
pub const POLICY_COMPLIANCE_PCT: f64 = 94.2;
pub const OPEN_PRS: u32 = 12;
pub const PIPELINE_HEALTHY: bool = true;

/// (key, label, status) for the summary row; values come from the constants above
pub const SUMMARY_TILES: [(&str, &str, Status); 6] = [
    ("aws_accounts", "AWS Accounts", Status::Healthy),
    ("policies_in_git", "Policies in Git", Status::Info),
    ("policy_compliance", "Policy Compliance", Status::Healthy),
    ("open_prs", "Open PRs", Status::Warning),
    ("kics_findings", "KICS Findings", Status::Critical),
    ("pipeline", "Pipeline Healthy", Status::Healthy),
];

pub const ARCHITECTURE: [&str; 4] = ["GitHub", "KICS + OPA", "Terraform", "AWS Organization"];

pub const POLICY_DISTRIBUTION: [(&str, u32); 5] = [
    ("SCPs", 24),
    ("OPA/Rego", 45),
    ("Config Rules", 52),
    ("Sentinel", 18),
    ("Custom", 17),
];

/// (title, headline, detail)
pub const QUICK_LINKS: [(&str, &str, &str); 3] = [
    (
        "Policy Repository",
        "company/aws-governance-policies",
        "Last commit: 2 hours ago",
    ),
    (
        "Latest Pipeline",
        "All checks passed",
        "Run #1247 • 15 minutes ago",
    ),
    (
        "Terraform Cloud",
        "aws-guardrails workspace",
        "State: Healthy • Drift: None",
    ),
];

pub const FRAMEWORK_SCORES: [(&str, f64); 4] = [
    ("CIS", 96.0),
    ("SOC2", 94.0),
    ("PCI", 88.0),
    ("HIPAA", 92.0),
];

pub const PIPELINE_STAGES: [(&str, StageStatus, &str); 7] = [
    ("Checkout", StageStatus::Success, "2s"),
    ("KICS Scan", StageStatus::Success, "45s"),
    ("OPA Validate", StageStatus::Success, "12s"),
    ("Terraform Plan", StageStatus::Success, "1m 23s"),
    ("Security Review", StageStatus::Success, "Manual"),
    ("Terraform Apply", StageStatus::Success, "2m 45s"),
    ("Verify", StageStatus::Success, "30s"),
];

/// (number, title, author, state, checks, age)
pub const PULL_REQUESTS: [(u32, &str, &str, PrState, &str, &str); 4] = [
    (
        156,
        "Add IMDSv2 enforcement SCP for all OUs",
        "security-team",
        PrState::Merged,
        "All passed",
        "2 hours ago",
    ),
    (
        155,
        "Update OPA policy for RDS encryption",
        "cloud-arch",
        PrState::Open,
        "All passed",
        "5 hours ago",
    ),
    (
        154,
        "New Sentinel policy for cost tags",
        "finops",
        PrState::Open,
        "1 warning",
        "1 day ago",
    ),
    (
        153,
        "Fix KICS false positive in S3 module",
        "devsecops",
        PrState::Failed,
        "KICS failed",
        "1 day ago",
    ),
];

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const PIPELINE_RUNS: [u32; 7] = [23, 31, 28, 35, 29, 12, 8];
pub const PIPELINE_FAILURES: [u32; 7] = [2, 1, 3, 2, 1, 0, 1];

pub const REPOSITORY_LAYOUT: &str = "\
aws-governance-policies/
├── policies/
│   ├── scp/              # Service Control Policies
│   ├── opa/              # OPA Rego policies
│   ├── sentinel/         # Terraform Sentinel
│   └── config-rules/     # AWS Config rules
├── terraform/
│   ├── scp-deployment/   # Deploy SCPs
│   ├── config-rules/     # Deploy Config
│   └── stacksets/        # StackSet modules
└── .github/workflows/    # CI/CD pipelines
";

/// (label, value, delta)
pub const KICS_STATS: [(&str, u32, Option<i32>); 4] = [
    ("High", 3, Some(-2)),
    ("Medium", 12, Some(1)),
    ("Low", 8, Some(0)),
    ("Files Scanned", 234, None),
];

pub const KICS_DISTRIBUTION: [(&str, u32); 4] = [
    ("Passed", 211),
    ("Low", 8),
    ("Medium", 12),
    ("High", 3),
];

/// (severity, query, file, line)
pub const KICS_FINDINGS: [(Severity, &str, &str, u32); 3] = [
    (
        Severity::High,
        "S3 Bucket Without Encryption",
        "terraform/modules/s3/main.tf",
        23,
    ),
    (
        Severity::High,
        "Security Group Open to Internet",
        "terraform/modules/vpc/security.tf",
        45,
    ),
    (
        Severity::Medium,
        "RDS Without Multi-AZ",
        "terraform/modules/rds/main.tf",
        67,
    ),
];

pub const OPA_STATS: [(&str, u32, Option<i32>); 4] = [
    ("Policies", 45, None),
    ("Passed", 42, Some(2)),
    ("Violations", 3, Some(-1)),
    ("Resources", 156, None),
];

pub const OPA_EVALUATIONS: [(&str, Verdict, u32); 5] = [
    ("require_encryption", Verdict::Pass, 34),
    ("restrict_regions", Verdict::Pass, 28),
    ("require_tags", Verdict::Fail, 12),
    ("security_group_rules", Verdict::Pass, 18),
    ("iam_least_privilege", Verdict::Warn, 8),
];

pub const SAMPLE_REGO: &str = "\
# policies/opa/require_encryption.rego
package terraform.aws

deny[msg] {
    resource := input.resource_changes[_]
    resource.type == \"aws_s3_bucket\"
    not has_encryption(resource)
    msg := sprintf(\"S3 bucket '%s' must have encryption\",
                   [resource.address])
}
";

/// (organizational unit, compliance score, accounts)
pub const ORG_UNITS: [(&str, f64, u32); 7] = [
    ("Production", 98.0, 145),
    ("Development", 94.0, 98),
    ("Staging", 96.0, 45),
    ("Security", 99.0, 32),
    ("Data Analytics", 92.0, 67),
    ("Shared Services", 95.0, 65),
    ("Sandbox", 78.0, 35),
];

pub const GUARDRAILS: [(&str, GuardrailKind, u32); 5] = [
    ("Deny Public S3", GuardrailKind::Scp, 487),
    ("Require IMDSv2", GuardrailKind::Scp, 487),
    ("Restrict Regions", GuardrailKind::Scp, 452),
    ("S3 Encryption", GuardrailKind::Config, 487),
    ("EBS Encryption", GuardrailKind::Config, 487),
];

/// (rule, compliant, non-compliant, last evaluated)
pub const CONFIG_RULES: [(&str, u32, u32, &str); 5] = [
    ("s3-bucket-server-side-encryption-enabled", 487, 0, "5 min ago"),
    ("ec2-imdsv2-check", 485, 2, "5 min ago"),
    ("rds-storage-encrypted", 456, 31, "5 min ago"),
    ("ebs-encrypted-volumes", 478, 9, "5 min ago"),
    ("iam-password-policy", 487, 0, "5 min ago"),
];

/// Compliance trend: `TREND_BASE + TREND_SLOPE * day ± TREND_JITTER`, last day pinned
pub const TREND_DAYS: usize = 90;
pub const TREND_BASE: f64 = 85.0;
pub const TREND_SLOPE: f64 = 0.1;
pub const TREND_JITTER: f64 = 1.0;
pub const COMPLIANCE_TARGET: f64 = 90.0;

pub const WEEKS: [&str; 8] = ["W1", "W2", "W3", "W4", "W5", "W6", "W7", "W8"];
pub const FINDINGS_CRITICAL: [u32; 8] = [5, 4, 6, 3, 4, 2, 3, 2];
pub const FINDINGS_HIGH: [u32; 8] = [23, 25, 22, 20, 18, 19, 16, 15];
pub const FINDINGS_MEDIUM: [u32; 8] = [67, 65, 70, 62, 58, 55, 52, 48];

pub const MONTHS: [&str; 6] = ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
pub const SCP_DEPLOYS: [u32; 6] = [8, 12, 10, 15, 11, 14];
pub const CONFIG_DEPLOYS: [u32; 6] = [15, 18, 22, 19, 25, 21];
pub const OPA_UPDATES: [u32; 6] = [23, 28, 31, 35, 29, 33];

pub const SYSTEM_COMPONENTS: [&str; 5] = [
    "GitHub Connected",
    "Terraform Cloud",
    "AWS Organization",
    "KICS Scanner",
    "OPA Engine",
];
