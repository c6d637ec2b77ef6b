use super::layout::{escape, page};

/// Render the error view carrying `message` verbatim.
pub fn render(message: &str) -> String {
    let content = format!(
        r#"<div class="content-header">
<div class="content-title"> Erreur </div>
</div>
<div data-testid="error-message">{}</div>"#,
        escape(message)
    );
    page("Erreur", &content)
}
