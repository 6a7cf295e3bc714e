//! Insertion-ordered value counts.

/// `(value, count)` pairs in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `value`, appending it when first seen.
    pub fn record(&mut self, value: &str) {
        match self.entries.iter_mut().find(|(seen, _)| seen == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value.to_string(), 1)),
        }
    }

    /// Count for `value`; zero when never seen.
    pub fn get(&self, value: &str) -> usize {
        self.entries
            .iter()
            .find(|(seen, _)| seen == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::Tally;

    #[test]
    fn keeps_first_seen_order() {
        let tally = ["warning", "active", "warning", "inactive", "active", "active"]
            .into_iter()
            .collect::<Tally>();
        let order = tally.iter().map(|(value, _)| value).collect::<Vec<_>>();
        assert_eq!(order, vec!["warning", "active", "inactive"]);
        assert_eq!(tally.get("active"), 3);
        assert_eq!(tally.get("missing"), 0);
        assert_eq!(tally.total(), 6);
    }
}
