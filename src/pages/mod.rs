pub mod first_post;
pub mod home;

pub use first_post::FirstPostPage;
pub use home::HomePage;
