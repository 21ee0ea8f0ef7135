//! UI Components for Story Card.

mod editor_panel;
mod media_picker;
mod story_card;

pub use editor_panel::EditorPanel;
pub use story_card::StoryCard;
