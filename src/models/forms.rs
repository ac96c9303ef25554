use serde::{Deserialize, Serialize};

/// POST /login body. Missing fields deserialize as empty and fail authentication.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET / query string
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub env: Option<String>,
    pub ack: Option<String>,
}

#[derive(Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
