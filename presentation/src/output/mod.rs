//! Reply shapes shared by the HTTP API and the `generate` command

pub mod story_reply;

pub use story_reply::StoryReply;
