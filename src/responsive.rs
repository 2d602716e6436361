//! # Responsive Merge
//!
//! Breakpoint-aware values: a `base` plus optional per-breakpoint partial
//! overrides. The effective value for a breakpoint is the base with that
//! breakpoint's patch shallow-merged on top. Keys present in the patch
//! replace the base value, missing keys keep it.
//!
//! The solver and converter never see a `Responsive`; callers resolve
//! first and hand them plain values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{
    Breakpoint, GridConfig, GridConfigPatch, NodeGridDatum, NodeGridPatch,
};

/// A value that can take a partial update on top of itself.
pub trait Overlay: Clone {
    /// The partial form of `Self`.
    type Patch: Clone + Default;

    /// Replace every field the patch carries.
    fn overlay(&mut self, patch: &Self::Patch);

    /// Fold `newer` into an existing patch; fields set in `newer` win.
    fn merge_patch(patch: &mut Self::Patch, newer: &Self::Patch);
}

/// A base value with per-breakpoint partial overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Patch: Serialize",
    deserialize = "T: Deserialize<'de>, T::Patch: Deserialize<'de>"
))]
pub struct Responsive<T: Overlay> {
    pub base: T,
    #[serde(default, alias = "bp", skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<Breakpoint, T::Patch>,
}

impl<T: Overlay> Responsive<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: BTreeMap::new(),
        }
    }

    /// Effective value at `breakpoint`. Without an override this is a copy
    /// of `base`.
    pub fn resolve(&self, breakpoint: Breakpoint) -> T {
        let mut value = self.base.clone();
        if let Some(patch) = self.overrides.get(&breakpoint) {
            value.overlay(patch);
        }
        value
    }

    /// Record an edit made while viewing `breakpoint`.
    ///
    /// Desktop edits (and edits with no breakpoint) land in `base`. Other
    /// breakpoints accumulate into their own override.
    pub fn apply(&mut self, breakpoint: Option<Breakpoint>, patch: &T::Patch) {
        match breakpoint {
            None | Some(Breakpoint::Desktop) => self.base.overlay(patch),
            Some(bp) => {
                let entry = self.overrides.entry(bp).or_default();
                T::merge_patch(entry, patch);
            }
        }
    }
}

fn set<V: Clone>(slot: &mut V, value: &Option<V>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

fn set_opt<V: Clone>(slot: &mut Option<V>, value: &Option<V>) {
    if value.is_some() {
        *slot = value.clone();
    }
}

impl Overlay for GridConfig {
    type Patch = GridConfigPatch;

    fn overlay(&mut self, patch: &GridConfigPatch) {
        set(&mut self.max_width, &patch.max_width);
        set(&mut self.column_count, &patch.column_count);
        set(&mut self.gutter, &patch.gutter);
        set(&mut self.margin, &patch.margin);
        set(&mut self.snap_tolerance, &patch.snap_tolerance);
    }

    fn merge_patch(patch: &mut GridConfigPatch, newer: &GridConfigPatch) {
        set_opt(&mut patch.max_width, &newer.max_width);
        set_opt(&mut patch.column_count, &newer.column_count);
        set_opt(&mut patch.gutter, &newer.gutter);
        set_opt(&mut patch.margin, &newer.margin);
        set_opt(&mut patch.snap_tolerance, &newer.snap_tolerance);
    }
}

impl Overlay for NodeGridDatum {
    type Patch = NodeGridPatch;

    fn overlay(&mut self, patch: &NodeGridPatch) {
        set(&mut self.col_start, &patch.col_start);
        set(&mut self.col_span, &patch.col_span);
        set_opt(&mut self.row_start, &patch.row_start);
        set_opt(&mut self.row_span, &patch.row_span);
        set_opt(&mut self.margin_left, &patch.margin_left);
        set_opt(&mut self.margin_right, &patch.margin_right);
        set_opt(&mut self.margin_top, &patch.margin_top);
        set_opt(&mut self.margin_bottom, &patch.margin_bottom);
    }

    fn merge_patch(patch: &mut NodeGridPatch, newer: &NodeGridPatch) {
        set_opt(&mut patch.col_start, &newer.col_start);
        set_opt(&mut patch.col_span, &newer.col_span);
        set_opt(&mut patch.row_start, &newer.row_start);
        set_opt(&mut patch.row_span, &newer.row_span);
        set_opt(&mut patch.margin_left, &newer.margin_left);
        set_opt(&mut patch.margin_right, &newer.margin_right);
        set_opt(&mut patch.margin_top, &newer.margin_top);
        set_opt(&mut patch.margin_bottom, &newer.margin_bottom);
    }
}

/// Keyed maps (style tables) patch key by key.
impl<K: Ord + Clone, V: Clone> Overlay for BTreeMap<K, V> {
    type Patch = BTreeMap<K, V>;

    fn overlay(&mut self, patch: &BTreeMap<K, V>) {
        for (key, value) in patch {
            self.insert(key.clone(), value.clone());
        }
    }

    fn merge_patch(patch: &mut BTreeMap<K, V>, newer: &BTreeMap<K, V>) {
        patch.overlay(newer);
    }
}
