use crate::models::sidebar::{Acknowledgement, Environment};
use crate::models::snapshot::{DashboardSnapshot, StatDelta, ViewHeader};
use crate::render::charts::{self, BarGroup, BarRow, LineChart};
use askama::Template;
use std::str::FromStr;

/// Dashboard tabs, selected with `?tab=`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    CiCd,
    Scans,
    Compliance,
    Trends,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::CiCd, Tab::Scans, Tab::Compliance, Tab::Trends];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::CiCd => "cicd",
            Tab::Scans => "scans",
            Tab::Compliance => "compliance",
            Tab::Trends => "trends",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::CiCd => "GitHub & CI/CD",
            Tab::Scans => "Policy Scans",
            Tab::Compliance => "AWS Compliance",
            Tab::Trends => "Trends",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{}'", s))
    }
}

pub struct DashboardView<'a> {
    pub header: &'a ViewHeader,
    pub snapshot: &'a DashboardSnapshot,
    pub tab: Tab,
    pub environment: Environment,
    pub ack: Option<Acknowledgement>,
}

pub struct TabLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub environment: &'static str,
    pub active: bool,
}

pub struct EnvironmentOption {
    pub name: &'static str,
    pub selected: bool,
}

/// A stat with its change indicator already spelled out
pub struct StatCard {
    pub label: &'static str,
    pub value: u32,
    pub delta: String,
}

impl From<&StatDelta> for StatCard {
    fn from(stat: &StatDelta) -> Self {
        let delta = match stat.delta {
            Some(d) if d > 0 => format!("\u{2191} +{}", d),
            Some(d) if d < 0 => format!("\u{2193} {}", d),
            Some(_) => "0".to_string(),
            None => String::new(),
        };

        Self {
            label: stat.label,
            value: stat.value,
            delta,
        }
    }
}

/// Chart geometry for every tab, projected from the snapshot
pub struct DashboardCharts {
    pub policy_distribution: Vec<BarRow>,
    pub framework_compliance: Vec<BarRow>,
    pub weekly_runs: Vec<BarGroup>,
    pub kics_stats: Vec<StatCard>,
    pub kics_distribution: Vec<BarRow>,
    pub opa_stats: Vec<StatCard>,
    pub org_units: Vec<BarRow>,
    pub compliance_score: LineChart,
    pub findings: LineChart,
    pub deployments: Vec<BarGroup>,
}

impl DashboardCharts {
    fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self {
            policy_distribution: charts::count_bars(&snapshot.overview.policy_distribution),
            framework_compliance: charts::score_bars(&snapshot.overview.framework_compliance),
            weekly_runs: charts::grouped_bars(&snapshot.cicd.weekly_runs),
            kics_stats: snapshot.scans.kics.stats.iter().map(StatCard::from).collect(),
            kics_distribution: charts::count_bars(&snapshot.scans.kics.distribution),
            opa_stats: snapshot.scans.opa.stats.iter().map(StatCard::from).collect(),
            org_units: charts::org_unit_bars(&snapshot.compliance.org_units),
            compliance_score: charts::trend_line(
                &snapshot.trends.compliance_score,
                snapshot.trends.compliance_target,
            ),
            findings: charts::multi_line(&snapshot.trends.findings),
            deployments: charts::grouped_bars(&snapshot.trends.deployments),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub view: &'a DashboardView<'a>,
    pub charts: DashboardCharts,
    pub tab_links: Vec<TabLink>,
    pub environment_options: Vec<EnvironmentOption>,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(view: &'a DashboardView<'a>) -> Self {
        let environment = view.environment.as_str();

        let tab_links = Tab::ALL
            .into_iter()
            .map(|tab| TabLink {
                slug: tab.slug(),
                title: tab.title(),
                environment,
                active: tab == view.tab,
            })
            .collect();

        let environment_options = view
            .snapshot
            .sidebar
            .environments
            .iter()
            .map(|name| EnvironmentOption {
                name: *name,
                selected: *name == environment,
            })
            .collect();

        Self {
            view,
            charts: DashboardCharts::from_snapshot(view.snapshot),
            tab_links,
            environment_options,
        }
    }
}

pub fn render_dashboard(view: &DashboardView<'_>) -> askama::Result<String> {
    DashboardTemplate::new(view).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::builder::build_snapshot;
    use crate::models::account::Role;
    use crate::models::sidebar::QuickAction;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot() -> DashboardSnapshot {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        build_snapshot(now, &mut StdRng::seed_from_u64(7))
    }

    fn header() -> ViewHeader {
        ViewHeader {
            display_name: "Security Lead".to_string(),
            role: Role::SecurityAdmin,
            role_label: Role::SecurityAdmin.display_label(),
        }
    }

    fn render(tab: Tab, environment: Environment, ack: Option<Acknowledgement>) -> String {
        let snapshot = snapshot();
        let header = header();
        render_dashboard(&DashboardView {
            header: &header,
            snapshot: &snapshot,
            tab,
            environment,
            ack,
        })
        .unwrap()
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("cicd".parse::<Tab>().unwrap(), Tab::CiCd);
        assert_eq!(" Trends ".parse::<Tab>().unwrap(), Tab::Trends);
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_stat_card_deltas() {
        let card = |delta| {
            StatCard::from(&StatDelta {
                label: "High",
                value: 3,
                delta,
            })
            .delta
        };

        assert_eq!(card(Some(2)), "\u{2191} +2");
        assert_eq!(card(Some(-1)), "\u{2193} -1");
        assert_eq!(card(Some(0)), "0");
        assert_eq!(card(None), "");
    }

    #[test]
    fn test_dynamic_text_is_escaped() {
        let snapshot = snapshot();
        let header = ViewHeader {
            display_name: "Eve <admin> & co".to_string(),
            role: Role::Viewer,
            role_label: Role::Viewer.display_label(),
        };

        let html = render_dashboard(&DashboardView {
            header: &header,
            snapshot: &snapshot,
            tab: Tab::Overview,
            environment: Environment::Production,
            ack: None,
        })
        .unwrap();

        assert!(html.contains("Eve &lt;admin&gt; &amp; co"));
        assert!(!html.contains("<admin>"));
        assert!(html.contains("GitHub &amp; CI"));
    }

    #[test]
    fn test_header_tiles_and_nav() {
        let html = render(Tab::Overview, Environment::Production, None);

        assert!(html.contains("Security Lead"));
        assert!(html.contains("SECURITY ADMIN"));
        assert!(html.contains("action=\"/logout\""));
        assert_eq!(html.matches("<div class=\"tile ").count(), 6);
        assert_eq!(html.matches("href=\"/?tab=").count(), 5);
        assert!(html.contains("<a href=\"/?tab=overview&amp;env=Production\" class=\"active\">"));
    }

    #[test]
    fn test_each_tab_renders_its_panels() {
        let cases = [
            (Tab::Overview, "Architecture Overview"),
            (Tab::CiCd, "Recent Pull Requests"),
            (Tab::Scans, "Sample OPA Policy"),
            (Tab::Compliance, "AWS Config Rules Compliance"),
            (Tab::Trends, "Compliance Score Trend (90 Days)"),
        ];

        for (tab, heading) in cases {
            let html = render(tab, Environment::Production, None);
            assert!(html.contains(heading), "{:?} should contain {}", tab, heading);
        }
    }

    #[test]
    fn test_trends_tab_draws_svg() {
        let html = render(Tab::Trends, Environment::Production, None);

        assert!(html.contains("<svg"));
        assert!(html.contains("2026-10-19"));
    }

    #[test]
    fn test_sidebar_actions_and_environment_echo() {
        let html = render(Tab::Scans, Environment::Staging, None);

        for action in QuickAction::ALL {
            assert!(html.contains(&format!("action=\"/actions/{}\"", action.slug())));
        }
        assert!(html.contains("<option selected>Staging</option>"));
        assert!(html.contains("<option>Production</option>"));
        assert!(html.contains("name=\"tab\" value=\"scans\""));
        assert!(html.contains("Version 2.0.0"));
        assert!(html.contains("2026-10-19 09:30"));
    }

    #[test]
    fn test_acknowledgement_banner() {
        let html = render(
            Tab::Overview,
            Environment::Production,
            Some(QuickAction::TriggerDeploy.acknowledge()),
        );
        assert!(
            html.contains("<div class=\"notice warning\">Requires approval for production</div>")
        );

        let html = render(
            Tab::Overview,
            Environment::Production,
            Some(QuickAction::RunKics.acknowledge()),
        );
        assert!(html.contains("<div class=\"notice info\">Starting KICS security scan...</div>"));
    }
}
