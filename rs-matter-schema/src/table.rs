/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The bidirectional ID <-> name table backing each (cluster, kind) namespace.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::ids::FieldId;

/// A field name. Borrowed for the built-in tables, owned when loaded at runtime.
pub type FieldName = Cow<'static, str>;

/// Why an entry could not be added to a [`FieldTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Conflict {
    /// The ID is already mapped to the contained name.
    Id(String),
    /// The name is already mapped to the contained ID.
    Name(FieldId),
}

/// A bijection between field IDs and field names.
///
/// Both directions are hashed, so neither lookup derives one direction from
/// the other. Entries keep their definition order for iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    entries: Vec<(FieldId, FieldName)>,
    by_id: HashMap<FieldId, usize>,
    by_name: HashMap<FieldName, usize>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, leaving the table untouched if either side is taken.
    pub(crate) fn insert(&mut self, id: FieldId, name: FieldName) -> Result<(), Conflict> {
        if let Some(index) = self.by_id.get(&id) {
            return Err(Conflict::Id(self.entries[*index].1.to_string()));
        }
        if let Some(index) = self.by_name.get(&*name) {
            return Err(Conflict::Name(self.entries[*index].0));
        }

        let index = self.entries.len();
        self.by_id.insert(id, index);
        self.by_name.insert(name.clone(), index);
        self.entries.push((id, name));

        Ok(())
    }

    /// Return the name mapped to `id`, if any.
    pub fn name(&self, id: FieldId) -> Option<&str> {
        self.by_id.get(&id).map(|index| &*self.entries[*index].1)
    }

    /// Return the ID mapped to `name`, if any. The match is exact and case-sensitive.
    pub fn id(&self, name: &str) -> Option<FieldId> {
        self.by_name.get(name).map(|index| self.entries[*index].0)
    }

    pub fn contains_id(&self, id: FieldId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over all `(id, name)` pairs in definition order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (FieldId, &str)> + '_ {
        self.entries.iter().map(|(id, name)| (*id, &**name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(FieldId, &'static str)]) -> FieldTable {
        let mut table = FieldTable::new();
        for (id, name) in entries {
            table.insert(*id, Cow::Borrowed(*name)).expect("unique entries");
        }
        table
    }

    #[test]
    fn both_directions() {
        let t = table(&[(0, "Off"), (1, "On"), (2, "Toggle")]);

        assert_eq!(t.name(1), Some("On"));
        assert_eq!(t.id("Toggle"), Some(2));
        assert_eq!(t.name(3), None);
        assert_eq!(t.id("toggle"), None);
        assert!(t.contains_id(0));
        assert!(t.contains_name("Off"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn definition_order() {
        let t = table(&[(0x40, "OffWithEffect"), (0, "Off"), (1, "On")]);

        assert_eq!(
            t.iter().collect::<Vec<_>>(),
            vec![(0x40, "OffWithEffect"), (0, "Off"), (1, "On")]
        );
    }

    #[test]
    fn conflicts_leave_table_untouched() {
        let mut t = table(&[(0, "Off"), (1, "On")]);

        assert_eq!(
            t.insert(1, Cow::Borrowed("Toggle")),
            Err(Conflict::Id("On".into()))
        );
        assert_eq!(
            t.insert(2, Cow::Owned("Off".into())),
            Err(Conflict::Name(0))
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.id("Toggle"), None);
        assert_eq!(t.name(2), None);
    }

    #[test]
    fn empty_table() {
        let t = FieldTable::new();

        assert!(t.is_empty());
        assert_eq!(t.name(0), None);
        assert_eq!(t.id(""), None);
        assert_eq!(t.iter().len(), 0);
    }
}
