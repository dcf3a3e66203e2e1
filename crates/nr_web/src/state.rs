use crate::research::Researcher;

pub struct AppState {
    pub researcher: Researcher,
}

impl AppState {
    pub fn new(researcher: Researcher) -> Self {
        Self { researcher }
    }
}
