use askama::Template;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

pub fn render_not_found() -> askama::Result<String> {
    NotFoundTemplate.render()
}
