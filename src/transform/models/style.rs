#[derive(Debug, Clone)]
pub struct Style {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt_template: &'static str,
    pub model: &'static str,
    pub aspect_ratio: &'static str,
}
