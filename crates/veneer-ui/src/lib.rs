//! Headless widgets built on `veneer-core`.

pub mod combobox;
pub mod keycaster;
pub mod tests;

pub use combobox::{
    ComboboxMachine, ComboboxOptions, remember_combobox_machine, use_combobox_machine,
    with_combobox,
};
pub use keycaster::{KEY_TTL, KeyCaster, KeyGlyphs};
