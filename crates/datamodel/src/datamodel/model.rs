#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) name: String,
    pub(crate) documentation: Option<String>,
}

impl Model {
    pub(crate) fn new(name: String, documentation: Option<String>) -> Self {
        Self { name, documentation }
    }
}
