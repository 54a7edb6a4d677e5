pub mod article_repos;
pub mod time;

pub use article_repos::{InMemoryArticleStore, InMemoryTransaction};
pub use time::{FixedClock, StepClock, fixed_now};
