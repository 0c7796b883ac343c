/// The individual producers credited by one award record.
///
/// Records store their producers as a single comma-separated string
/// (`"Steven Perry, Joel Silver"`). This type splits that string once so the
/// delimiter never travels further than parsing: every name is trimmed, empty
/// segments are dropped, and a name repeated inside the same field is kept
/// only once, in first-seen order.
///
/// # Examples
///
/// ```
/// use storage::models::ProducerList;
///
/// let producers = ProducerList::parse("Steven Perry, Joel Silver");
///
/// assert_eq!(producers.len(), 2);
/// assert!(producers.contains("Joel Silver"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerList {
    names: Vec<String>,
}

impl ProducerList {
    pub const SEPARATOR: char = ',';

    /// Splits a raw producers field into individual names.
    pub fn parse(raw: &str) -> Self {
        let mut names: Vec<String> = Vec::new();

        for name in raw
            .split(Self::SEPARATOR)
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
