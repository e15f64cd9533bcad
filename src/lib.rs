//! agentos-demo: terminal walkthrough of the AgentOS assistant demo.

pub mod clock;
pub mod content;
pub mod controller;
pub mod timer;
pub mod transcript;
pub mod tui;
pub mod types;
