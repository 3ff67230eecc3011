//! Searchable single-select dropdown: filtering and keyboard navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    Down,
    Up,
    Home,
    End,
    Enter,
    Escape,
}

impl DropdownKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "Down" => Some(Self::Down),
            "ArrowUp" | "Up" => Some(Self::Up),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" => Some(Self::Enter),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownOutcome {
    None,
    Selected(DropdownOption),
    Closed,
}

/// Options whose label contains `query`, case-insensitively, in original order.
#[must_use]
pub fn filter_options<'a>(options: &'a [DropdownOption], query: &str) -> Vec<&'a DropdownOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
    query: String,
    /// Index into the filtered list.
    highlighted: Option<usize>,
}

impl DropdownState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn open(&mut self, options: &[DropdownOption]) {
        if self.open {
            return;
        }
        self.open = true;
        self.highlighted = first_index(filter_options(options, &self.query).len());
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.highlighted = None;
    }

    pub fn set_query(&mut self, query: &str, options: &[DropdownOption]) {
        self.query = query.to_string();
        self.open = true;
        self.highlighted = first_index(filter_options(options, &self.query).len());
    }

    /// Pointer pick of `index` within the filtered list.
    pub fn select(&mut self, index: usize, options: &[DropdownOption]) -> Option<DropdownOption> {
        let chosen = filter_options(options, &self.query).get(index).copied().cloned()?;
        self.close();
        Some(chosen)
    }

    /// Whether `key` acts on the dropdown in its current state. Keys it does not
    /// capture keep their default behavior in the text field.
    #[must_use]
    pub const fn captures(&self, key: DropdownKey) -> bool {
        self.open || matches!(key, DropdownKey::Down | DropdownKey::Up)
    }

    pub fn handle_key(&mut self, key: DropdownKey, options: &[DropdownOption]) -> DropdownOutcome {
        if !self.captures(key) {
            return DropdownOutcome::None;
        }
        let count = filter_options(options, &self.query).len();
        match key {
            DropdownKey::Down | DropdownKey::Up if !self.open => {
                self.open = true;
                self.highlighted = first_index(count);
                DropdownOutcome::None
            }
            DropdownKey::Down => {
                self.highlighted = step(self.highlighted, count, true);
                DropdownOutcome::None
            }
            DropdownKey::Up => {
                self.highlighted = step(self.highlighted, count, false);
                DropdownOutcome::None
            }
            DropdownKey::Home => {
                self.highlighted = first_index(count);
                DropdownOutcome::None
            }
            DropdownKey::End => {
                self.highlighted = count.checked_sub(1);
                DropdownOutcome::None
            }
            DropdownKey::Enter => self
                .highlighted
                .and_then(|idx| self.select(idx, options))
                .map_or(DropdownOutcome::None, DropdownOutcome::Selected),
            DropdownKey::Escape => {
                self.close();
                DropdownOutcome::Closed
            }
        }
    }
}

const fn first_index(count: usize) -> Option<usize> {
    if count == 0 { None } else { Some(0) }
}

const fn step(current: Option<usize>, count: usize, forward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => count - 1,
        (Some(idx), true) => (idx + 1) % count,
        (Some(idx), false) => (idx + count - 1) % count,
    })
}
