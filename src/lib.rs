//! Two-page personal portfolio site rendered with Yew: a home/about page
//! and one sample blog post, sharing a common layout shell. The post page
//! additionally loads a third-party SDK script lazily after page load.

pub mod app;
pub mod head;
pub mod layout;
pub mod pages;
pub mod script;
pub mod styles;
