use serde::{Deserialize, Serialize};

pub mod accordion;
pub mod gallery;
pub mod radial;
pub mod system;
pub mod view;
pub mod wizard;

use accordion::AccordionMsg;
use gallery::GalleryMsg;
use radial::RadialMsg;
use system::SystemMsg;
use view::ViewMsg;
use wizard::WizardMsg;

/// Domain messages representing user intent
/// These are processed by the update function; presenter messages only
/// reach the presenter that is currently mounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    View(ViewMsg),
    Accordion(AccordionMsg),
    Radial(RadialMsg),
    Wizard(WizardMsg),
    Gallery(GalleryMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
