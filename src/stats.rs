use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, Reporter};

/// Per-cookie occurrence counts for one target date, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CounterTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl CounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, cookie: &str) {
        match self.index.get(cookie) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(cookie.to_string(), self.entries.len());
                self.entries.push((cookie.to_string(), 1));
            }
        }
    }

    pub fn get(&self, cookie: &str) -> Option<u64> {
        self.index.get(cookie).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(cookie, count)| (cookie.as_str(), *count))
    }
}

#[cfg(test)]
impl CounterTable {
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn to_map(&self) -> HashMap<String, u64> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
impl<'a> FromIterator<&'a str> for CounterTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = CounterTable::new();
        for cookie in iter {
            table.increment(cookie);
        }
        table
    }
}

/// Every cookie sharing the highest count, ordered by first appearance.
pub fn find_most_active_cookies(table: &CounterTable, reporter: &mut dyn Reporter) -> Vec<String> {
    let Some(max_count) = table.iter().map(|(_, count)| count).max() else {
        reporter.report(Diagnostic::NoCookiesForDate);
        return Vec::new();
    };

    table
        .iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(cookie, _)| cookie.to_string())
        .collect()
}
