use std::path::PathBuf;

use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::text;
use cosmic::{Application, Element, executor};

use gtodo::config::{APP_ID, GtodoConfig};
use gtodo::core::item_list::ItemList;
use gtodo::store;

use crate::message::Message;
use crate::pages;

pub struct Gtodo {
    core: Core,
    /// `None` when no storage location could be resolved; nothing is loaded or saved.
    storage_path: Option<PathBuf>,

    // Data
    items: ItemList,

    // UI state
    input: String,
}

pub struct Flags {
    pub config: GtodoConfig,
}

impl Application for Gtodo {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        let storage_path = match config.storage_path() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Persistence disabled: {}", e);
                None
            }
        };

        let items = storage_path
            .as_deref()
            .map(store::load)
            .unwrap_or_default();

        let app = Self {
            core,
            storage_path,
            items,
            input: String::new(),
        };

        (app, CosmicTask::none())
    }

    fn header_center(&self) -> Vec<Element<'_, Message>> {
        vec![text::title4("gtodo").into()]
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::AddItem => {
                if let Some(content) = take_input(&mut self.input) {
                    let id = self.items.add(content, false);
                    log::debug!("Added item {}", id);
                }
            }
            Message::ToggleItemDone(id) => {
                if let Some(done) = self.items.toggle(id) {
                    log::debug!("Item {} done = {}", id, done);
                }
            }
            Message::RemoveItem(id) => {
                if self.items.remove(id).is_some() {
                    log::debug!("Removed item {}", id);
                }
            }
        }
        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        pages::todo_list::todo_list_view(&self.items, &self.input)
    }
}

impl Gtodo {
    fn save(&self) {
        let Some(path) = self.storage_path.as_deref() else {
            return;
        };
        if let Err(e) = store::save(path, &self.items) {
            log::error!("Failed to save to-do list: {}", e);
        }
    }
}

impl Drop for Gtodo {
    fn drop(&mut self) {
        log::info!("Saving {} items on shutdown", self.items.len());
        self.save();
    }
}

/// Take the pending input as new item content, clearing the field.
/// Empty input is left alone and yields nothing.
fn take_input(input: &mut String) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    Some(std::mem::take(input))
}
