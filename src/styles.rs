//! Class-name tokens for the deployed stylesheet. Components treat these
//! as opaque strings; the actual rules live in `styles.css`.

pub const CONTAINER: &str = "container";
pub const HEADER: &str = "site-header";
pub const HEADING_2XL: &str = "heading-2xl";
pub const HEADING_LG: &str = "heading-lg";
pub const HEADING_MD: &str = "heading-md";
pub const COLOR_INHERIT: &str = "color-inherit";
pub const BACK_TO_HOME: &str = "back-to-home";
