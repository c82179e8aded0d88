use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::select::{Multiple, OptionIx, SelectController, SelectKey, SelectOption, Single};
use crate::tui::interaction::InteractionRegistry;

/// One dropdown field in the form.
///
/// The two variants are the two controller instantiations; each carries the
/// selection value the controller itself never stores. Mutations come back
/// from the controller as replacement values and are applied here, which
/// keeps a single copy of the truth.
#[derive(Debug)]
pub enum Field {
    Single {
        name: String,
        select: SelectController<Single>,
        value: Option<OptionIx>,
    },
    Multiple {
        name: String,
        select: SelectController<Multiple>,
        value: Vec<OptionIx>,
    },
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Single { name, .. } | Field::Multiple { name, .. } => name,
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Field::Multiple { .. })
    }

    pub fn is_open(&self) -> bool {
        match self {
            Field::Single { select, .. } => select.is_open(),
            Field::Multiple { select, .. } => select.is_open(),
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            Field::Single { select, .. } => select.options(),
            Field::Multiple { select, .. } => select.options(),
        }
    }

    pub fn highlighted_index(&self) -> usize {
        match self {
            Field::Single { select, .. } => select.highlighted_index(),
            Field::Multiple { select, .. } => select.highlighted_index(),
        }
    }

    /// Whether the option row at `index` is under the highlight cursor.
    pub fn is_row_highlighted(&self, index: usize) -> bool {
        match self {
            Field::Single { select, .. } => select.is_highlighted(index),
            Field::Multiple { select, .. } => select.is_highlighted(index),
        }
    }

    /// Whether the option row at `index` is part of the current selection.
    pub fn is_row_selected(&self, index: usize) -> bool {
        match self {
            Field::Single { select, value, .. } => select.is_selected(value, OptionIx(index)),
            Field::Multiple { select, value, .. } => select.is_selected(value, OptionIx(index)),
        }
    }

    pub fn has_selection(&self) -> bool {
        match self {
            Field::Single { value, .. } => value.is_some(),
            Field::Multiple { value, .. } => !value.is_empty(),
        }
    }

    /// Selected entries in selection order, for badge rendering.
    pub fn badges(&self) -> Vec<(OptionIx, &SelectOption)> {
        match self {
            Field::Single { .. } => Vec::new(),
            Field::Multiple { select, value, .. } => value
                .iter()
                .filter_map(|ix| select.option(*ix).map(|opt| (*ix, opt)))
                .collect(),
        }
    }

    /// Human-readable rendering of the current selection, used for the
    /// single-mode container line and for change logging.
    pub fn value_summary(&self) -> String {
        match self {
            Field::Single { select, value, .. } => value
                .and_then(|ix| select.option(ix))
                .map(|opt| opt.label.clone())
                .unwrap_or_else(|| "(none)".to_string()),
            Field::Multiple { select, value, .. } => {
                if value.is_empty() {
                    "(none)".to_string()
                } else {
                    value
                        .iter()
                        .filter_map(|ix| select.option(*ix))
                        .map(|opt| opt.label.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
        }
    }

    // Gestures. Each returns whether a change notification was emitted.

    pub fn handle_key(&mut self, key: SelectKey) -> bool {
        match self {
            Field::Single { select, value, .. } => {
                if let Some(next) = select.handle_key(value, key) {
                    *value = next;
                    true
                } else {
                    false
                }
            }
            Field::Multiple { select, value, .. } => {
                if let Some(next) = select.handle_key(value, key) {
                    *value = next;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn toggle(&mut self) {
        match self {
            Field::Single { select, .. } => select.toggle(),
            Field::Multiple { select, .. } => select.toggle(),
        }
    }

    pub fn blur(&mut self) {
        match self {
            Field::Single { select, .. } => select.blur(),
            Field::Multiple { select, .. } => select.blur(),
        }
    }

    pub fn hover(&mut self, index: usize) {
        match self {
            Field::Single { select, .. } => select.hover(index),
            Field::Multiple { select, .. } => select.hover(index),
        }
    }

    pub fn click_option(&mut self, index: usize) -> bool {
        match self {
            Field::Single { select, value, .. } => {
                if let Some(next) = select.click_option(value, index) {
                    *value = next;
                    true
                } else {
                    false
                }
            }
            Field::Multiple { select, value, .. } => {
                if let Some(next) = select.click_option(value, index) {
                    *value = next;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Clear the selection. Always emits, even when already empty.
    pub fn clear(&mut self) -> bool {
        match self {
            Field::Single { select, value, .. } => {
                *value = select.clear();
            }
            Field::Multiple { select, value, .. } => {
                *value = select.clear();
            }
        }
        true
    }

    /// Remove one badge (multiple mode only; single mode has no badges).
    pub fn remove_badge(&mut self, ix: OptionIx) -> bool {
        match self {
            Field::Single { .. } => false,
            Field::Multiple { select, value, .. } => {
                if let Some(next) = select.remove(value, ix) {
                    *value = next;
                    true
                } else {
                    false
                }
            }
        }
    }
}

pub struct App {
    pub fields: Vec<Field>,
    pub focus: usize,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|f| {
                if f.multiple {
                    Field::Multiple {
                        name: f.name.clone(),
                        select: SelectController::new(f.options.clone()),
                        value: Vec::new(),
                    }
                } else {
                    Field::Single {
                        name: f.name.clone(),
                        select: SelectController::new(f.options.clone()),
                        value: None,
                    }
                }
            })
            .collect();

        Self {
            fields,
            focus: 0,
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    /// Move focus, dismissing the previously focused field's dropdown.
    fn set_focus(&mut self, index: usize) {
        if index == self.focus || index >= self.fields.len() {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.blur();
        }
        self.focus = index;
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.set_focus((self.focus + 1) % self.fields.len());
        }
    }

    fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            let prev = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
            self.set_focus(prev);
        }
    }

    /// Apply one action. Gestures resolve fully before the next event is
    /// processed; there is no queueing or batching here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}

            Action::Quit => self.should_quit = true,

            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),

            Action::Blur => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.blur();
                }
            }

            Action::Key(key) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    if field.handle_key(key) {
                        log::log_change(field.name(), &field.value_summary());
                    }
                }
            }

            Action::ToggleField(index) => {
                self.set_focus(index);
                if let Some(field) = self.fields.get_mut(index) {
                    field.toggle();
                }
            }

            Action::HoverOption { field, index } => {
                if let Some(field) = self.fields.get_mut(field) {
                    field.hover(index);
                }
            }

            Action::ClickOption { field, index } => {
                self.set_focus(field);
                if let Some(field) = self.fields.get_mut(field) {
                    if field.click_option(index) {
                        log::log_change(field.name(), &field.value_summary());
                    }
                }
            }

            Action::RemoveBadge { field, ix } => {
                self.set_focus(field);
                if let Some(field) = self.fields.get_mut(field) {
                    if field.remove_badge(ix) {
                        log::log_change(field.name(), &field.value_summary());
                    }
                }
            }

            Action::ClearField(index) => {
                self.set_focus(index);
                if let Some(field) = self.fields.get_mut(index) {
                    field.clear();
                    log::log_change(field.name(), &field.value_summary());
                }
            }
        }
    }
}
