//! Tab selection over the process catalog.

use qrfolio_types::{PROCESS_CATALOG, ProcessCategory, ProcessId, find_process};

/// Which process tab is active. There is no "nothing selected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessFlowViewer {
    active: ProcessId,
}

impl Default for ProcessFlowViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessFlowViewer {
    /// Starts on the first catalog entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: ProcessId::ALL[0],
        }
    }

    #[must_use]
    pub fn with_active(active: ProcessId) -> Self {
        Self { active }
    }

    #[must_use]
    pub fn active_id(&self) -> ProcessId {
        self.active
    }

    /// Makes `id` the active tab. Returns whether the selection changed.
    pub fn select_process(&mut self, id: ProcessId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    /// String form of [`select_process`](Self::select_process).
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the catalog. Selectable ids come from the
    /// catalog itself, so a miss is a caller bug.
    pub fn select_process_id(&mut self, id: &str) -> bool {
        let parsed = id
            .parse::<ProcessId>()
            .unwrap_or_else(|err| panic!("process selection outside the catalog: {err}"));
        self.select_process(parsed)
    }

    pub fn select_next(&mut self) -> bool {
        self.select_process(self.active.next())
    }

    pub fn select_previous(&mut self) -> bool {
        self.select_process(self.active.previous())
    }

    /// The category for the active tab.
    ///
    /// # Panics
    ///
    /// Panics if the active id has no catalog entry.
    #[must_use]
    pub fn active_process(&self) -> &'static ProcessCategory {
        let id = self.active.as_str();
        find_process(id).unwrap_or_else(|| panic!("active process `{id}` missing from catalog"))
    }

    /// Every tab in catalog order, flagged if active.
    pub fn tabs(&self) -> impl Iterator<Item = (&'static ProcessCategory, bool)> + '_ {
        PROCESS_CATALOG
            .iter()
            .map(move |process| (process, process.id == self.active.as_str()))
    }
}
