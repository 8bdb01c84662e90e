use super::navigation::{DragState, Mode};
use crate::appearance::ThemePreference;
use crate::config::ModeHotkeys;
use crate::logger::LogBuffer;
use crate::storage::{ItemPersistence, MemoryStore};
use crate::todo::{Filter, ItemId, ItemStore, TodoItem};
use crate::ui::{Theme, ThemePair};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::cell::Cell;
use std::rc::Rc;

/// Houses data representative of application state.
///
/// The item store is the source of truth for the list; everything else here
/// is view state (selection, filter, input buffer, drag gesture, display
/// mode) that lives for the session only.
pub struct State {
    store: ItemStore,
    filter: Filter,
    mode: Mode,
    list_state: ListState,
    input: String,
    drag: Option<DragState>,
    drag_list_state: ListState,
    theme_preference: ThemePreference,
    themes: ThemePair,
    hotkeys: ModeHotkeys,
    log_buffer: LogBuffer,
    log_list_state: ListState,
    log_seen: u64,
    terminal_size: Rect,
    redraw: Rc<Cell<bool>>,
}

/// Defines default application state over an in-memory store.
///
impl Default for State {
    fn default() -> State {
        let store = ItemStore::open(ItemPersistence::new(Box::new(MemoryStore::new())));
        State::new(
            store,
            ThemePreference::new(false),
            ThemePair::default(),
            ModeHotkeys::default(),
            LogBuffer::new(),
        )
    }
}

impl State {
    pub fn new(
        mut store: ItemStore,
        theme_preference: ThemePreference,
        themes: ThemePair,
        hotkeys: ModeHotkeys,
        log_buffer: LogBuffer,
    ) -> Self {
        // The display layer listens for list changes to know when to redraw
        let redraw = Rc::new(Cell::new(true));
        {
            let redraw = Rc::clone(&redraw);
            store.subscribe(Box::new(move |_| redraw.set(true)));
        }

        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        State {
            store,
            filter: Filter::All,
            mode: Mode::Normal,
            list_state,
            input: String::new(),
            drag: None,
            drag_list_state: ListState::default(),
            theme_preference,
            themes,
            hotkeys,
            log_buffer,
            log_list_state: ListState::default(),
            log_seen: 0,
            terminal_size: Rect::default(),
            redraw,
        }
    }

    /// Return the item store.
    ///
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Return the current input mode.
    ///
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    /// Request a redraw on the next loop iteration.
    ///
    pub fn mark_dirty(&mut self) -> &mut Self {
        self.redraw.set(true);
        self
    }

    /// Return whether a redraw was requested and clear the request.
    ///
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.replace(false)
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        if self.terminal_size != size {
            self.terminal_size = size;
            self.mark_dirty();
        }
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    // ---- List view ----

    /// Items visible under the active filter, in order.
    ///
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.store.view(self.filter)
    }

    pub fn get_filter(&self) -> Filter {
        self.filter
    }

    /// Switch the filter, keeping the selected item selected when it stays
    /// visible.
    ///
    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        let selected = self.selected_id();
        self.filter = filter;
        debug!("Filter set to {}", filter.label());
        match selected {
            Some(id) => self.select_id(&id),
            None => self.clamp_selection(),
        };
        self.mark_dirty()
    }

    pub fn next_filter(&mut self) -> &mut Self {
        let next = self.filter.next();
        self.set_filter(next)
    }

    pub fn get_list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        let index = self.list_state.selected()?;
        self.visible_items().get(index).copied()
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id.clone())
    }

    /// Move the selection down, wrapping at the end.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let len = self.visible_items().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let next = match self.list_state.selected() {
                Some(i) => (i + 1) % len,
                None => 0,
            };
            self.list_state.select(Some(next));
        }
        self.mark_dirty()
    }

    /// Move the selection up, wrapping at the start.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let len = self.visible_items().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let previous = match self.list_state.selected() {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            };
            self.list_state.select(Some(previous));
        }
        self.mark_dirty()
    }

    /// Select the item with `id` if it is visible; otherwise keep the
    /// selection within bounds.
    ///
    fn select_id(&mut self, id: &ItemId) {
        let position = self.visible_items().iter().position(|item| &item.id == id);
        match position {
            Some(index) => self.list_state.select(Some(index)),
            None => self.clamp_selection(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let index = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(index));
        }
    }

    // ---- Item mutations ----

    pub fn toggle_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id() {
            if self.store.toggle(&id) {
                self.clamp_selection();
            }
        }
        self
    }

    pub fn delete_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id() {
            if self.store.delete(&id) {
                self.clamp_selection();
            }
        }
        self
    }

    pub fn clear_completed(&mut self) -> &mut Self {
        let selected = self.selected_id();
        if self.store.clear_completed() {
            match selected {
                Some(id) => self.select_id(&id),
                None => self.clamp_selection(),
            }
        }
        self
    }

    /// Move the selected item one place up among the visible items.
    ///
    pub fn move_selected_up(&mut self) -> &mut Self {
        self.move_selected_by(-1)
    }

    /// Move the selected item one place down among the visible items.
    ///
    pub fn move_selected_down(&mut self) -> &mut Self {
        self.move_selected_by(1)
    }

    fn move_selected_by(&mut self, offset: isize) -> &mut Self {
        let index = match self.list_state.selected() {
            Some(index) => index,
            None => return self,
        };
        let target = match index.checked_add_signed(offset) {
            Some(target) => target,
            None => return self,
        };
        if self.store.reorder_in_view(self.filter, index, target) {
            self.list_state.select(Some(target));
        }
        self
    }

    // ---- Insert mode ----

    pub fn enter_insert_mode(&mut self) -> &mut Self {
        self.mode = Mode::Insert;
        self.input.clear();
        self.mark_dirty()
    }

    /// Leave insert mode, discarding unsubmitted text.
    ///
    pub fn cancel_input(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self.input.clear();
        self.mark_dirty()
    }

    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        self.input.push(c);
        self.mark_dirty()
    }

    pub fn remove_input_char(&mut self) -> &mut Self {
        self.input.pop();
        self.mark_dirty()
    }

    /// Submit the input buffer as a new item. The buffer is cleared and
    /// insert mode stays active for the next entry.
    ///
    pub fn submit_input(&mut self) -> &mut Self {
        let text = std::mem::take(&mut self.input);
        if self.store.add(&text) {
            let id = self.store.items().last().map(|item| item.id.clone());
            if let Some(id) = id {
                self.select_id(&id);
            }
        }
        self.mark_dirty()
    }

    // ---- Drag ----

    /// Pick up the selected item.
    ///
    pub fn grab_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id() {
            debug!("Grabbed item {}", id);
            self.drag = Some(DragState::new(id));
            // Start from the list's scroll position so the view does not jump
            self.drag_list_state = ListState::default()
                .with_offset(self.list_state.offset())
                .with_selected(self.list_state.selected());
            self.mode = Mode::Drag;
        }
        self.mark_dirty()
    }

    pub fn get_drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// List state highlighting the row the carried item is held over.
    ///
    pub fn get_drag_list_state(&mut self) -> &mut ListState {
        &mut self.drag_list_state
    }

    pub fn drag_next(&mut self) -> &mut Self {
        self.drag_by(1)
    }

    pub fn drag_previous(&mut self) -> &mut Self {
        self.drag_by(-1)
    }

    fn drag_by(&mut self, offset: isize) -> &mut Self {
        let next_over = match &self.drag {
            Some(drag) => {
                let view = self.visible_items();
                view.iter()
                    .position(|item| item.id == drag.over)
                    .and_then(|index| index.checked_add_signed(offset))
                    .and_then(|index| view.get(index).map(|item| (index, item.id.clone())))
            }
            None => None,
        };
        if let (Some(drag), Some((index, over))) = (self.drag.as_mut(), next_over) {
            drag.over = over;
            self.drag_list_state.select(Some(index));
        }
        self.mark_dirty()
    }

    /// Drop the carried item at the position it is held over.
    ///
    pub fn drop_grabbed(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        if let Some(drag) = self.drag.take() {
            let end = drag.end();
            self.store.apply_drag(&end);
            self.select_id(&end.active);
        }
        self.mark_dirty()
    }

    pub fn cancel_drag(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self.drag = None;
        self.mark_dirty()
    }

    // ---- Display mode ----

    pub fn toggle_theme(&mut self) -> &mut Self {
        self.theme_preference.toggle();
        info!(
            "Switched to {} mode",
            if self.theme_preference.is_dark() {
                "dark"
            } else {
                "light"
            }
        );
        self.mark_dirty()
    }

    pub fn is_dark(&self) -> bool {
        self.theme_preference.is_dark()
    }

    pub fn get_theme(&self) -> &Theme {
        self.themes.select(self.theme_preference.is_dark())
    }

    // ---- Log panel ----

    /// Enter log mode with the newest entry selected.
    ///
    pub fn open_log(&mut self) -> &mut Self {
        self.mode = Mode::Log;
        let len = self.log_buffer.len();
        self.log_list_state
            .select(if len == 0 { None } else { Some(len - 1) });
        self.mark_dirty()
    }

    pub fn close_log(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self.mark_dirty()
    }

    pub fn is_log_open(&self) -> bool {
        self.mode == Mode::Log
    }

    pub fn next_log(&mut self) -> &mut Self {
        let len = self.log_buffer.len();
        if len > 0 {
            let next = match self.log_list_state.selected() {
                Some(i) => (i + 1) % len,
                None => 0,
            };
            self.log_list_state.select(Some(next));
        }
        self.mark_dirty()
    }

    pub fn previous_log(&mut self) -> &mut Self {
        let len = self.log_buffer.len();
        if len > 0 {
            let previous = match self.log_list_state.selected() {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            };
            self.log_list_state.select(Some(previous));
        }
        self.mark_dirty()
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.snapshot()
    }

    pub fn get_log_list_state(&mut self) -> &mut ListState {
        &mut self.log_list_state
    }

    /// Request a redraw when new log lines arrived since the last check.
    ///
    pub fn poll_log(&mut self) -> &mut Self {
        let pushed = self.log_buffer.pushed();
        if pushed != self.log_seen {
            self.log_seen = pushed;
            self.mark_dirty();
        }
        self
    }
}
