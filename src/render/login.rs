use askama::Template;

#[derive(Debug, Clone, Copy)]
pub struct DemoCredential {
    pub username: &'static str,
    pub password: &'static str,
}

/// Accounts advertised in the demo credentials panel
const DEMO_CREDENTIALS: [DemoCredential; 3] = [
    DemoCredential { username: "admin", password: "admin123" },
    DemoCredential { username: "security_lead", password: "security123" },
    DemoCredential { username: "viewer", password: "viewer123" },
];

pub struct LoginView<'a> {
    pub error: Option<&'a str>,
    pub username: &'a str,
    pub show_demo_credentials: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub view: &'a LoginView<'a>,
    pub demo_credentials: [DemoCredential; 3],
}

pub fn render_login(view: &LoginView<'_>) -> askama::Result<String> {
    LoginTemplate {
        view,
        demo_credentials: DEMO_CREDENTIALS,
    }
    .render()
}
