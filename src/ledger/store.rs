//! The trial balance entry store - the only mutable state in the system

use bigdecimal::BigDecimal;

use crate::classify::RuleSet;
use crate::types::*;

/// Ordered, versioned collection of trial balance entries
///
/// Holds the working trial balance between edits and feeds snapshots into
/// `statements::aggregate`. Ids come from a monotonic counter and
/// stay stable across edits; `revision` bumps on every mutation so callers
/// can tell whether derived statements are stale.
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<LedgerEntry>,
    rules: RuleSet,
    next_id: u64,
    revision: u64,
}

impl EntryStore {
    /// Create an empty store using the standard rule table
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard())
    }

    /// Create an empty store with a caller-supplied rule table
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            entries: Vec::new(),
            rules,
            next_id: 1,
            revision: 0,
        }
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter; changes whenever the entry list changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Look up an entry by id
    pub fn get_entry(&self, id: u64) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Add an entry, auto-classifying it from its name
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        debit: BigDecimal,
        credit: BigDecimal,
    ) -> &LedgerEntry {
        let name = name.into();
        let (classification, subtype) = self.rules.classify(&name);
        let id = self.next_id;
        self.next_id += 1;
        let index = self.entries.len();
        self.entries.push(LedgerEntry::new(
            id,
            name,
            debit,
            credit,
            classification,
            subtype,
        ));
        self.revision += 1;
        &self.entries[index]
    }

    /// Add an empty row for manual editing; classifies as `Ignore` until
    /// the user types a name
    pub fn add_blank_entry(&mut self) -> &LedgerEntry {
        self.add_entry("", BigDecimal::from(0), BigDecimal::from(0))
    }

    /// Rename an entry, re-deriving its classification unless the user has
    /// manually overridden it
    pub fn rename_entry(&mut self, id: u64, name: impl Into<String>) -> LedgerResult<()> {
        let name = name.into();
        let derived = self.rules.classify(&name);
        let entry = self.entry_mut(id)?;
        entry.name = name;
        if !entry.user_overridden {
            entry.classification = derived.0;
            entry.subtype = derived.1;
        }
        entry.updated_at = chrono::Utc::now().naive_utc();
        self.revision += 1;
        Ok(())
    }

    /// Replace both amounts of an entry; classification is untouched
    pub fn set_amounts(
        &mut self,
        id: u64,
        debit: BigDecimal,
        credit: BigDecimal,
    ) -> LedgerResult<()> {
        let entry = self.entry_mut(id)?;
        entry.debit = debit;
        entry.credit = credit;
        entry.updated_at = chrono::Utc::now().naive_utc();
        self.revision += 1;
        Ok(())
    }

    /// Manually assign a class (and optionally a subtype), marking the
    /// entry as overridden so later renames keep the user's choice
    pub fn set_classification(
        &mut self,
        id: u64,
        classification: Classification,
        subtype: Option<String>,
    ) -> LedgerResult<()> {
        let entry = self.entry_mut(id)?;
        entry.classification = classification;
        entry.subtype =
            subtype.unwrap_or_else(|| classification.default_subtype().to_string());
        entry.user_overridden = true;
        entry.updated_at = chrono::Utc::now().naive_utc();
        self.revision += 1;
        Ok(())
    }

    /// Drop a manual override and re-derive the classification from the
    /// current name
    pub fn reset_classification(&mut self, id: u64) -> LedgerResult<()> {
        let derived = {
            let entry = self.get_entry(id).ok_or(LedgerError::EntryNotFound(id))?;
            self.rules.classify(&entry.name)
        };
        let entry = self.entry_mut(id)?;
        entry.classification = derived.0;
        entry.subtype = derived.1;
        entry.user_overridden = false;
        entry.updated_at = chrono::Utc::now().naive_utc();
        self.revision += 1;
        Ok(())
    }

    /// Remove an entry, returning it
    pub fn delete_entry(&mut self, id: u64) -> LedgerResult<LedgerEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(LedgerError::EntryNotFound(id))?;
        self.revision += 1;
        Ok(self.entries.remove(index))
    }

    /// Remove every entry and restart the id counter
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
        self.revision += 1;
    }

    /// One-shot import: atomically replace the whole store with the given
    /// rows, re-classifying each from its name
    pub fn replace_all<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = TrialBalanceRow>,
    {
        self.entries.clear();
        self.next_id = 1;
        for row in rows {
            self.add_entry(row.name, row.debit, row.credit);
        }
        self.revision += 1;
    }

    /// Raw debit/credit sums over all entries (ignored ones included) with
    /// the tolerance-based balanced check
    pub fn trial_balance(&self) -> TrialBalanceCheck {
        TrialBalanceCheck::over(&self.entries)
    }

    fn entry_mut(&mut self, id: u64) -> LedgerResult<&mut LedgerEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(LedgerError::EntryNotFound(id))
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
