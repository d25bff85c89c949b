//! Content packs and the lobby's pack selection.

use std::sync::Arc;

/// Prompt (black) and response (white) card text of a pack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackCards {
    pub white: Vec<String>,
    pub black: Vec<String>,
}

/// A named, immutable bundle of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub cards: PackCards,
}

impl Pack {
    pub fn new<W, B>(name: impl Into<String>, white: W, black: B) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            name: name.into(),
            cards: PackCards {
                white: white.into_iter().map(Into::into).collect(),
                black: black.into_iter().map(Into::into).collect(),
            },
        }
    }
}

/// One entry of the candidate pack list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackChoice {
    pub pack: Arc<Pack>,
    pub selected: bool,
}

/// Ordered candidate packs with their selection flag.
///
/// Defaults to exactly the first pack selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackSelection {
    choices: Vec<PackChoice>,
}

impl PackSelection {
    pub fn new(packs: impl IntoIterator<Item = Arc<Pack>>) -> Self {
        let choices = packs
            .into_iter()
            .enumerate()
            .map(|(i, pack)| PackChoice {
                pack,
                selected: i == 0,
            })
            .collect();
        Self { choices }
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackChoice> {
        self.choices.iter()
    }

    /// Flip one entry. Returns the new value, or `None` if out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let choice = self.choices.get_mut(index)?;
        choice.selected = !choice.selected;
        Some(choice.selected)
    }

    /// Replace the selection with `indices`; out-of-range indices are ignored.
    pub fn select_only(&mut self, indices: &[usize]) {
        for (i, choice) in self.choices.iter_mut().enumerate() {
            choice.selected = indices.contains(&i);
        }
    }

    /// Selected packs in candidate order.
    pub fn selected(&self) -> impl Iterator<Item = &Pack> {
        self.iter().filter(|c| c.selected).map(|c| c.pack.as_ref())
    }

    /// `(name, selected)` pairs for the multi-select input.
    pub fn options(&self) -> Vec<(String, bool)> {
        self.iter().map(|c| (c.pack.name.clone(), c.selected)).collect()
    }
}
