/// Query filter over products. `None` fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub id: Option<u64>,
    pub available: Option<bool>,
}

impl ProductFilter {
    /// The visibility predicate shared by every read path.
    pub fn visible() -> Self {
        Self { id: None, available: Some(true) }
    }

    pub fn by_id(id: u64) -> Self {
        Self { id: Some(id), available: None }
    }

    pub fn visible_by_id(id: u64) -> Self {
        Self { id: Some(id), ..Self::visible() }
    }
}
