//! Top stories models
//!
//! - `section` - The closed set of sections (Section)
//! - `format` - Response encodings (FormatType)
//! - `story` - Story records and fetch results (StoryRecord, StoriesResult)
//! - `credential` - The API key (ApiKey)

mod credential;
mod format;
mod section;
mod story;

pub use credential::ApiKey;
pub use format::FormatType;
pub use section::Section;
pub use story::{StoriesResult, StoryRecord};

pub(crate) use story::{ErrorResponse, TopStoriesResponse};
