//! Combobox machine context glue.
//!
//! The interaction state machine itself lives behind this seam; what this
//! module fixes is the wiring around it: constructed once per scope from a
//! small options struct, provided to the subtree as a composition local,
//! and required by descendant parts with a fail-fast error when the
//! `Combobox` ancestor is missing.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use veneer_core::{ContextError, remember, require_local, with_local};

/// Factory configuration for a combobox machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComboboxOptions {
    /// Keeps the options list open for demos/screenshots.
    pub demo_mode: bool,
}

/// Interaction state machine for one combobox, over items of type `T`.
///
/// Transition logic plugs in behind this type; the runtime only cares
/// that there is exactly one machine per combobox scope and that
/// descendants reach it through context, never through a global.
pub struct ComboboxMachine<T> {
    options: ComboboxOptions,
    _items: PhantomData<T>,
}

impl<T: 'static> ComboboxMachine<T> {
    pub fn new(options: ComboboxOptions) -> Self {
        Self {
            options,
            _items: PhantomData,
        }
    }

    pub fn options(&self) -> ComboboxOptions {
        self.options
    }
}

// No `T: Debug` bound; the item type never shows up in the output.
impl<T> fmt::Debug for ComboboxMachine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxMachine")
            .field("options", &self.options)
            .finish()
    }
}

/// Constructs the machine once for the current composition scope;
/// subsequent passes reuse the remembered instance (the `options` of the
/// first pass win, as with any remembered value).
pub fn remember_combobox_machine<T: 'static>(options: ComboboxOptions) -> Rc<ComboboxMachine<T>> {
    remember(|| ComboboxMachine::new(options))
}

/// Provides `machine` to the subtree composed by `f`.
pub fn with_combobox<T: 'static, R>(
    machine: Rc<ComboboxMachine<T>>,
    f: impl FnOnce() -> R,
) -> R {
    with_local(machine, f)
}

/// Accessor for descendant combobox parts. Fails with a
/// [`ContextError::MissingContext`] naming `component` and the missing
/// `Combobox` parent, carrying the call site.
#[track_caller]
pub fn use_combobox_machine<T: 'static>(
    component: &str,
) -> Result<Rc<ComboboxMachine<T>>, ContextError> {
    require_local::<Rc<ComboboxMachine<T>>>(component, "Combobox")
}
